//! Flatten Atlassian Document Format to plain text
//!
//! Jira Cloud v3 returns rich text fields as an ADF tree. Only the text
//! matters for prompting, so the tree is reduced to lines.

use serde_json::Value;

/// Node types after which a line break is inserted
const BLOCK_NODES: &[&str] = &[
    "paragraph",
    "heading",
    "listItem",
    "codeBlock",
    "blockquote",
    "rule",
    "tableRow",
];

/// Plain text of a rich text field.
///
/// Accepts either a bare string (older API versions) or an ADF document.
/// Returns `None` when the field holds no text.
pub fn to_plain_text(field: &Value) -> Option<String> {
    let mut out = String::new();
    match field {
        Value::String(s) => out.push_str(s),
        Value::Object(_) => collect_text(field, &mut out),
        _ => {}
    }

    let text = out
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn collect_text(node: &Value, out: &mut String) {
    let node_type = node.get("type").and_then(Value::as_str).unwrap_or("");

    if node_type == "hardBreak" {
        out.push('\n');
        return;
    }

    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(text);
    }

    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }

    if BLOCK_NODES.contains(&node_type) && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string() {
        assert_eq!(
            to_plain_text(&json!("  Users log in with OTP.  ")),
            Some("Users log in with OTP.".to_string())
        );
    }

    #[test]
    fn test_null_and_empty() {
        assert_eq!(to_plain_text(&Value::Null), None);
        assert_eq!(to_plain_text(&json!("")), None);
        assert_eq!(to_plain_text(&json!({"type": "doc", "content": []})), None);
    }

    #[test]
    fn test_adf_paragraphs() {
        let doc = json!({
            "type": "doc",
            "version": 1,
            "content": [
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "Users log in "},
                    {"type": "text", "text": "with OTP", "marks": [{"type": "strong"}]},
                    {"type": "text", "text": "."}
                ]},
                {"type": "paragraph", "content": [
                    {"type": "text", "text": "Codes expire."},
                    {"type": "hardBreak"},
                    {"type": "text", "text": "After 5 minutes."}
                ]}
            ]
        });

        assert_eq!(
            to_plain_text(&doc).unwrap(),
            "Users log in with OTP.\nCodes expire.\nAfter 5 minutes."
        );
    }

    #[test]
    fn test_adf_lists() {
        let doc = json!({
            "type": "doc",
            "content": [
                {"type": "bulletList", "content": [
                    {"type": "listItem", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "First"}]}
                    ]},
                    {"type": "listItem", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "Second"}]}
                    ]}
                ]}
            ]
        });

        assert_eq!(to_plain_text(&doc).unwrap(), "First\nSecond");
    }
}
