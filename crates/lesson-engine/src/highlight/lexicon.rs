use std::sync::OnceLock;

use regex::Regex;

/// Reserved words of the displayed language.
pub const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "for", "while", "class", "import",
    "export", "from", "async", "await", "try", "catch", "throw", "new", "this", "true", "false",
    "null", "undefined", "typeof", "instanceof",
];

/// Well-known global identifiers of the displayed language.
pub const JAVASCRIPT_BUILTINS: &[&str] = &[
    "console", "Math", "Array", "Object", "String", "Number", "Boolean", "Promise", "JSON", "Date",
    "Error", "Map", "Set", "window", "document",
];

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Failed to build matcher for lexicon entry {word:?}: {source}")]
    InvalidEntry {
        word: String,
        #[source]
        source: regex::Error,
    },
}

/// A lexicon word together with its whole-word matcher.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub word: String,
    pub matcher: Regex,
}

impl LexiconEntry {
    /// Word boundaries are Unicode-aware: `éconst` does not contain `const`.
    fn new(word: &str) -> Result<Self, LexiconError> {
        let matcher = Regex::new(&format!(r"\b{}\b", regex::escape(word))).map_err(|source| {
            LexiconError::InvalidEntry {
                word: word.to_string(),
                source,
            }
        })?;
        Ok(Self {
            word: word.to_string(),
            matcher,
        })
    }
}

/// Read-only keyword and builtin vocabularies used by the tokenizer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    keywords: Vec<LexiconEntry>,
    builtins: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Builds a lexicon, compiling one whole-word matcher per entry.
    ///
    /// Empty entries are ignored.
    pub fn new<K, B>(keywords: K, builtins: B) -> Result<Self, LexiconError>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Ok(Self {
            keywords: compile(keywords)?,
            builtins: compile(builtins)?,
        })
    }

    /// The JavaScript lexicon, built once per process.
    pub fn javascript() -> &'static Lexicon {
        static JAVASCRIPT: OnceLock<Lexicon> = OnceLock::new();
        JAVASCRIPT.get_or_init(|| {
            Lexicon::new(JAVASCRIPT_KEYWORDS, JAVASCRIPT_BUILTINS)
                .expect("Invalid JavaScript lexicon")
        })
    }

    pub fn keywords(&self) -> &[LexiconEntry] {
        &self.keywords
    }

    pub fn builtins(&self) -> &[LexiconEntry] {
        &self.builtins
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::javascript().clone()
    }
}

fn compile<I>(words: I) -> Result<Vec<LexiconEntry>, LexiconError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .filter(|w| !w.as_ref().is_empty())
        .map(|w| LexiconEntry::new(w.as_ref()))
        .collect()
}
