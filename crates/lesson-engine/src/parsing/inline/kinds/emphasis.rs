use std::sync::OnceLock;

use regex::Regex;

/// Bold emphasis inline type with owned delimiter.
pub struct Emphasis;

impl Emphasis {
    /// The delimiter written on both sides of emphasized text.
    pub const DELIMITER: &'static str = "**";
    /// Single marker character; the wrapped text may not contain it.
    pub const MARKER: char = '*';

    /// Matches a delimiter pair around at least one non-marker character.
    ///
    /// Group 1 is the wrapped text.
    pub fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            let delim = regex::escape(Self::DELIMITER);
            let marker = regex::escape(&Self::MARKER.to_string());
            Regex::new(&format!("{delim}([^{marker}]+){delim}")).expect("Invalid emphasis regex")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_wrapped_text() {
        let caps = Emphasis::pattern().captures("say **hi** now").unwrap();
        assert_eq!(&caps[0], "**hi**");
        assert_eq!(&caps[1], "hi");
    }

    #[test]
    fn requires_interior_text() {
        assert!(!Emphasis::pattern().is_match("****"));
    }

    #[test]
    fn interior_may_not_contain_marker() {
        assert!(!Emphasis::pattern().is_match("**a*b**"));
    }
}
