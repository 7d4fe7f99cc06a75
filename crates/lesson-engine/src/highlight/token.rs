use serde::Serialize;

/// Lexical class of a code token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenClass {
    Comment,
    StringLiteral,
    Keyword,
    BuiltinIdentifier,
    CallSiteIdentifier,
    Plain,
}

impl TokenClass {
    /// Rank used when annotations overlap; higher wins.
    ///
    /// Comments and string literals never overlap other annotations.
    pub fn precedence(self) -> u8 {
        match self {
            TokenClass::Comment | TokenClass::StringLiteral => 4,
            TokenClass::Keyword => 3,
            TokenClass::BuiltinIdentifier => 2,
            TokenClass::CallSiteIdentifier => 1,
            TokenClass::Plain => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeToken {
    pub text: String,
    pub class: TokenClass,
}

impl CodeToken {
    pub fn new(text: impl Into<String>, class: TokenClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

/// One tokenised source line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLine {
    pub number: usize,
    pub tokens: Vec<CodeToken>,
}

impl CodeLine {
    /// Reassembles the source line from its tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(TokenClass::Keyword.precedence() > TokenClass::BuiltinIdentifier.precedence());
        assert!(
            TokenClass::BuiltinIdentifier.precedence() > TokenClass::CallSiteIdentifier.precedence()
        );
        assert!(TokenClass::CallSiteIdentifier.precedence() > TokenClass::Plain.precedence());
    }

    #[test]
    fn line_text_concatenates_tokens() {
        let line = CodeLine {
            number: 1,
            tokens: vec![
                CodeToken::new("let", TokenClass::Keyword),
                CodeToken::new(" x", TokenClass::Plain),
            ],
        };
        assert_eq!(line.text(), "let x");
    }
}
