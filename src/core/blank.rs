//! Blank-text detection.
//!
//! A text is blank when it is empty or holds only whitespace. Absent text
//! (`None`) is blank as well.

/// Returns `true` if `text` is empty or consists solely of whitespace.
///
/// Whitespace follows the Unicode `White_Space` property, so tabs, newlines
/// and non-breaking spaces all count.
///
/// # Example
///
/// ```rust
/// use todo_core::core::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank("  x  "));
/// ```
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Types that can be checked for blankness.
///
/// # Example
///
/// ```rust
/// use todo_core::core::Blank;
///
/// let absent: Option<&str> = None;
/// assert!(absent.is_blank());
/// assert!(Some("   ").is_blank());
/// assert!(!String::from("buy milk").is_blank());
/// ```
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        is_blank(self)
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        is_blank(self)
    }
}

impl<T: AsRef<str>> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(|text| is_blank(text.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_blank() {
        assert!(is_blank(""));
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(is_blank(" "));
        assert!(is_blank("     "));
        assert!(is_blank("\t\n\r"));
        assert!(is_blank("\u{00A0}\u{2003}"));
    }

    #[test]
    fn text_with_content_is_not_blank() {
        assert!(!is_blank("a"));
        assert!(!is_blank("  hop on one foot  "));
        assert!(!is_blank("\n.\n"));
    }

    #[test]
    fn absent_text_is_blank() {
        let absent: Option<String> = None;
        assert!(absent.is_blank());
        assert!(Some("").is_blank());
        assert!(!Some("typing away").is_blank());
    }

    #[test]
    fn string_and_str_agree() {
        for text in ["", " ", "x", " x "] {
            assert_eq!(text.is_blank(), text.to_string().is_blank());
        }
    }
}
