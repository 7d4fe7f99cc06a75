/// A fence line, with the language token from the opening fence if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub language: Option<&'a str>,
}

pub struct CodeFence;

impl CodeFence {
    pub const DELIMITER: &'static str = "```";
    /// Language reported for code blocks whose fences carry no language token.
    pub const DEFAULT_LANGUAGE: &'static str = "javascript";

    /// Recognises a fence at the start of an already trimmed line.
    ///
    /// The language is the first whitespace-separated word after the delimiter.
    pub fn sig(trimmed: &str) -> Option<FenceSig<'_>> {
        let rest = trimmed.strip_prefix(Self::DELIMITER)?;
        Some(FenceSig {
            language: rest.split_whitespace().next(),
        })
    }
}
