use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Default word cleanup: trim, NFC, collapse line breaks
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfc().collect();

        text.split(['\n', '\r'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_composes() {
        // s + combining cedilla
        let out = DefaultPreprocessor.process("  kus\u{0327} \n");
        assert_eq!(out, "ku\u{015F}");
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        assert_eq!(DefaultPreprocessor.process("iyi\r\n günler"), "iyi günler");
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(DefaultPreprocessor.process(" \n\t "), "");
    }
}
