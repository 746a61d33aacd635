use serde::{Deserialize, Serialize};

/// Desired description length. Each option maps to a paragraph count in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl DescriptionLength {
    pub const ALL: [DescriptionLength; 3] = [
        DescriptionLength::Short,
        DescriptionLength::Medium,
        DescriptionLength::Long,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            DescriptionLength::Short => "short",
            DescriptionLength::Medium => "medium",
            DescriptionLength::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DescriptionLength::Short => "Short (1 paragraph)",
            DescriptionLength::Medium => "Medium (2 paragraphs)",
            DescriptionLength::Long => "Long (3 paragraphs)",
        }
    }

    /// Phrase substituted into the prompt, e.g. "2 paragraphs".
    pub fn paragraphs(&self) -> &'static str {
        match self {
            DescriptionLength::Short => "1 paragraph",
            DescriptionLength::Medium => "2 paragraphs",
            DescriptionLength::Long => "3 paragraphs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_mapping() {
        assert_eq!(DescriptionLength::Short.paragraphs(), "1 paragraph");
        assert_eq!(DescriptionLength::Medium.paragraphs(), "2 paragraphs");
        assert_eq!(DescriptionLength::Long.paragraphs(), "3 paragraphs");
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(DescriptionLength::default(), DescriptionLength::Medium);
    }

    #[test]
    fn test_value_matches_serde() {
        for length in DescriptionLength::ALL {
            let wire = serde_json::to_value(length).unwrap();
            assert_eq!(wire, length.value());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(DescriptionLength::Long.label(), "Long (3 paragraphs)");
    }
}
