//! Parse generated text into test case records
//!
//! The generator answers in loosely formatted markdown. The scan below keeps
//! track of the section heading it is under and picks out numbered or dashed
//! items, folding `•` sub-steps into the item above them. Anything it does not
//! recognize is skipped, so a badly formatted answer yields fewer records
//! rather than an error.

use casegen_domain::{Category, TestCaseRecord};
use std::str::Lines;

/// Bullet that marks a sub-step of the preceding test case
const SUB_ITEM_BULLET: char = '•';

/// Extract test case records from generated text.
///
/// The returned iterator is lazy and scans the input once; call this again
/// to re-scan. Records come out in the order their lines appear.
pub fn extract_test_cases(text: &str) -> TestCases<'_> {
    TestCases {
        lines: text.lines(),
        category: None,
        pending: None,
    }
}

/// Iterator over the test cases found in a block of generated text
///
/// Created by [`extract_test_cases`].
#[derive(Debug)]
pub struct TestCases<'a> {
    lines: Lines<'a>,
    category: Option<Category>,
    // Held back until the next item starts, so trailing sub-steps can join it.
    pending: Option<TestCaseRecord>,
}

impl Iterator for TestCases<'_> {
    type Item = TestCaseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(category) = heading_category(line) {
                self.category = Some(category);
                continue;
            }

            if line.starts_with(SUB_ITEM_BULLET) {
                if let Some(record) = self.pending.as_mut() {
                    record.push_sub_item(line);
                }
                continue;
            }

            if is_main_item(line, self.category.is_some()) {
                let record = TestCaseRecord::new(self.category, line);
                if let Some(finished) = self.pending.replace(record) {
                    return Some(finished);
                }
            }
        }

        self.pending.take()
    }
}

impl std::iter::FusedIterator for TestCases<'_> {}

/// Category introduced by a heading line, if `line` is one.
///
/// Matching is case-insensitive. The marker phrase must be followed by a
/// colon (markdown emphasis in between is allowed), unless the line is a
/// `#` heading.
pub(crate) fn heading_category(line: &str) -> Option<Category> {
    let lower = line.to_lowercase();
    let is_markdown_heading = lower.starts_with('#');

    Category::ALL.into_iter().find(|category| {
        category.markers().iter().any(|marker| {
            lower.match_indices(marker).any(|(idx, _)| {
                if is_markdown_heading {
                    return true;
                }
                lower[idx + marker.len()..]
                    .trim_start_matches(['*', '_', ' '])
                    .starts_with(':')
            })
        })
    })
}

/// Whether `line` opens a new test case.
///
/// Under a heading, `12.` style numbering and `-` bullets both count. Before
/// any heading is seen only lines starting with a digit do.
pub(crate) fn is_main_item(line: &str, in_section: bool) -> bool {
    if !in_section {
        return line.starts_with(|c: char| c.is_ascii_digit());
    }
    is_numbered(line) || is_dashed(line)
}

fn is_numbered(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}

fn is_dashed(line: &str) -> bool {
    // A line of dashes is a markdown rule, not an item.
    line.starts_with('-') && !line.chars().all(|c| c == '-')
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn lines_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[^\n]{0,30}", 0..12).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        /// Property: text with no digits, dashes or bullets yields nothing
        #[test]
        fn test_no_markers_yields_nothing(text in "[a-zA-Z ,.!?\n]{0,200}") {
            prop_assert_eq!(extract_test_cases(&text).count(), 0);
        }

        /// Property: appending a numbered line never removes records
        #[test]
        fn test_appending_item_is_monotonic(text in lines_strategy()) {
            let before: Vec<_> = extract_test_cases(&text).collect();
            let extended = format!("{}\n1. appended case", text);
            let after: Vec<_> = extract_test_cases(&extended).collect();

            prop_assert!(after.len() >= before.len());
            prop_assert_eq!(after.len(), before.len() + 1);
            prop_assert_eq!(after.last().map(|r| r.text.as_str()), Some("1. appended case"));
        }

        /// Property: extraction is deterministic
        #[test]
        fn test_extraction_is_deterministic(text in lines_strategy()) {
            let first: Vec<_> = extract_test_cases(&text).collect();
            let second: Vec<_> = extract_test_cases(&text).collect();
            prop_assert_eq!(first, second);
        }

        /// Property: every record starts with the line that opened it
        #[test]
        fn test_records_never_start_blank(text in lines_strategy()) {
            for record in extract_test_cases(&text) {
                prop_assert!(!record.text.is_empty());
                prop_assert!(!record.text.starts_with(char::is_whitespace));
            }
        }
    }
}
