//! Category module - test case sections

/// Section a test case belongs to
///
/// Generated output is usually grouped under headings such as
/// `Positive Test Cases:`. The category is picked up from those headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Happy-path behaviour
    Positive,

    /// Invalid input and failure handling
    Negative,

    /// Boundaries and unusual conditions
    Edge,
}

impl Category {
    /// All categories, in the order they are usually generated
    pub const ALL: [Category; 3] = [Category::Positive, Category::Negative, Category::Edge];

    /// Display label, as written to exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Edge => "Edge",
        }
    }

    /// Lowercase heading phrases that introduce this category's section.
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            Category::Positive => &["positive test cases"],
            Category::Negative => &["negative test cases"],
            Category::Edge => &["edge test cases", "edge case scenarios", "edge cases"],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_lowercase() {
        for category in Category::ALL {
            for marker in category.markers() {
                assert_eq!(*marker, marker.to_lowercase());
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Edge.to_string(), "Edge");
    }
}
