//! Extracted test case records

use crate::Category;

/// Separator placed between a test case and each of its sub-steps
pub const SUB_ITEM_SEPARATOR: &str = "\n  ";

/// A single extracted test case
///
/// `text` holds the main line as written by the generator, followed by any
/// sub-steps joined with [`SUB_ITEM_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseRecord {
    /// Section the test case was listed under, if any
    pub category: Option<Category>,

    /// Test case text, possibly multi-line
    pub text: String,
}

impl TestCaseRecord {
    /// Create a record
    pub fn new(category: Option<Category>, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Append a sub-step line
    pub fn push_sub_item(&mut self, line: &str) {
        self.text.push_str(SUB_ITEM_SEPARATOR);
        self.text.push_str(line);
    }

    /// Category label, or an empty string when uncategorized
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }
}

/// Per-category tally of a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    /// Positive test cases
    pub positive: usize,
    /// Negative test cases
    pub negative: usize,
    /// Edge test cases
    pub edge: usize,
    /// Test cases found outside any section
    pub uncategorized: usize,
}

impl CategoryCounts {
    /// Count the records in `records`
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a TestCaseRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.category {
                Some(Category::Positive) => counts.positive += 1,
                Some(Category::Negative) => counts.negative += 1,
                Some(Category::Edge) => counts.edge += 1,
                None => counts.uncategorized += 1,
            }
        }
        counts
    }

    /// Total number of records counted
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.edge + self.uncategorized
    }

    /// True when at least one record carried a category
    pub fn has_categories(&self) -> bool {
        self.positive + self.negative + self.edge > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sub_item_indents() {
        let mut record = TestCaseRecord::new(Some(Category::Positive), "1. Login works");
        record.push_sub_item("• Enter OTP");
        record.push_sub_item("• Submit");
        assert_eq!(record.text, "1. Login works\n  • Enter OTP\n  • Submit");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(TestCaseRecord::new(None, "1. x").category_label(), "");
        assert_eq!(
            TestCaseRecord::new(Some(Category::Negative), "1. x").category_label(),
            "Negative"
        );
    }

    #[test]
    fn test_tally() {
        let records = vec![
            TestCaseRecord::new(Some(Category::Positive), "1. a"),
            TestCaseRecord::new(Some(Category::Positive), "2. b"),
            TestCaseRecord::new(Some(Category::Edge), "1. c"),
            TestCaseRecord::new(None, "1. d"),
        ];
        let counts = CategoryCounts::tally(&records);
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 0);
        assert_eq!(counts.edge, 1);
        assert_eq!(counts.uncategorized, 1);
        assert_eq!(counts.total(), 4);
        assert!(counts.has_categories());
    }

    #[test]
    fn test_tally_uncategorized_only() {
        let records = vec![TestCaseRecord::new(None, "1. a")];
        assert!(!CategoryCounts::tally(&records).has_categories());
    }
}
