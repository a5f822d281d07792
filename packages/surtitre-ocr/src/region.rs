/// Axis-aligned rectangle in screen pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Position of a fragment in the page hierarchy, as reported by the engine
/// (Tesseract TSV `level` column, 1 through 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentLevel {
    Page,
    Block,
    Paragraph,
    Line,
    Word,
}

impl FragmentLevel {
    pub fn from_level(level: i32) -> Option<Self> {
        match level {
            1 => Some(Self::Page),
            2 => Some(Self::Block),
            3 => Some(Self::Paragraph),
            4 => Some(Self::Line),
            5 => Some(Self::Word),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub bounding_box: BoundingBox,
    pub level: FragmentLevel,
    pub confidence: Option<f32>,
}

impl TextFragment {
    /// True when the fragment carries no text after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(FragmentLevel::from_level(1), Some(FragmentLevel::Page));
        assert_eq!(FragmentLevel::from_level(4), Some(FragmentLevel::Line));
        assert_eq!(FragmentLevel::from_level(5), Some(FragmentLevel::Word));
        assert_eq!(FragmentLevel::from_level(0), None);
        assert_eq!(FragmentLevel::from_level(6), None);
    }

    #[test]
    fn test_blank_fragments() {
        let mut fragment = TextFragment {
            text: "  \t ".to_string(),
            bounding_box: BoundingBox {
                x: 0,
                y: 0,
                width: 10,
                height: 10,
            },
            level: FragmentLevel::Line,
            confidence: None,
        };
        assert!(fragment.is_blank());

        fragment.text = " hello ".to_string();
        assert!(!fragment.is_blank());
    }
}
