use std::{ops::Range, sync::OnceLock};

use regex::Regex;

use super::{
    lexicon::Lexicon,
    token::{CodeLine, CodeToken, TokenClass},
};

/// Marker that turns a whole line into a comment when it starts the trimmed line.
pub const LINE_COMMENT: &str = "//";

/// Double, single or backtick quoted text; no escapes, no nesting.
fn string_literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""[^"]*"|'[^']*'|`[^`]*`"#).expect("Invalid string literal regex")
    })
}

/// An identifier followed by optional whitespace and `(`. Group 1 is the identifier.
///
/// `\w` is Unicode-aware, so `naïve(` tags all of `naïve`, not just `ve`.
fn call_site_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\w+)\s*\(").expect("Invalid call site regex"))
}

/// A classified byte range of a line, collected across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Annotation {
    range: Range<usize>,
    class: TokenClass,
}

/// Tokenises every line of a code block. Line numbers are 1-based.
pub fn tokenize(code: &str, lexicon: &Lexicon) -> Vec<CodeLine> {
    code.split('\n')
        .enumerate()
        .map(|(i, line)| CodeLine {
            number: i + 1,
            tokens: tokenize_line(line, lexicon),
        })
        .collect()
}

/// Tokenises a single line.
///
/// Lines starting with [`LINE_COMMENT`] after trimming are one comment token.
/// Otherwise string literals are tagged first, then lexicon words and call
/// sites are tagged in the text between literals. Overlaps are resolved by
/// [`TokenClass::precedence`]; untagged text is plain.
pub fn tokenize_line(line: &str, lexicon: &Lexicon) -> Vec<CodeToken> {
    if line.is_empty() {
        return vec![];
    }
    if line.trim().starts_with(LINE_COMMENT) {
        return vec![CodeToken::new(line, TokenClass::Comment)];
    }

    let mut annotations: Vec<Annotation> = string_literal_pattern()
        .find_iter(line)
        .map(|m| Annotation {
            range: m.range(),
            class: TokenClass::StringLiteral,
        })
        .collect();

    for region in gaps(line.len(), &annotations) {
        let text = &line[region.clone()];
        annotate_lexicon(text, region.start, lexicon, &mut annotations);
        annotate_call_sites(text, region.start, &mut annotations);
    }

    resolve(line, &annotations)
}

/// Ranges of `0..len` not covered by the sorted, disjoint `taken` annotations.
fn gaps(len: usize, taken: &[Annotation]) -> Vec<Range<usize>> {
    let mut out = vec![];
    let mut pos = 0;
    for a in taken {
        if a.range.start > pos {
            out.push(pos..a.range.start);
        }
        pos = a.range.end;
    }
    if pos < len {
        out.push(pos..len);
    }
    out
}

fn annotate_lexicon(text: &str, base: usize, lexicon: &Lexicon, out: &mut Vec<Annotation>) {
    let passes = [
        (lexicon.keywords(), TokenClass::Keyword),
        (lexicon.builtins(), TokenClass::BuiltinIdentifier),
    ];
    for (entries, class) in passes {
        for entry in entries {
            out.extend(entry.matcher.find_iter(text).map(|m| Annotation {
                range: base + m.start()..base + m.end(),
                class,
            }));
        }
    }
}

fn annotate_call_sites(text: &str, base: usize, out: &mut Vec<Annotation>) {
    for caps in call_site_pattern().captures_iter(text) {
        if let Some(ident) = caps.get(1) {
            out.push(Annotation {
                range: base + ident.start()..base + ident.end(),
                class: TokenClass::CallSiteIdentifier,
            });
        }
    }
}

/// Assigns every byte to its winning annotation and cuts the line into tokens.
///
/// A token is a maximal run of bytes with the same owner; unowned runs are plain.
fn resolve(line: &str, annotations: &[Annotation]) -> Vec<CodeToken> {
    let mut owner: Vec<Option<usize>> = vec![None; line.len()];
    for (idx, ann) in annotations.iter().enumerate() {
        for slot in &mut owner[ann.range.clone()] {
            let wins = slot.is_none_or(|cur| {
                ann.class.precedence() > annotations[cur].class.precedence()
            });
            if wins {
                *slot = Some(idx);
            }
        }
    }

    let mut tokens = vec![];
    let mut start = 0;
    for i in 1..=line.len() {
        if i == line.len() || owner[i] != owner[start] {
            let class = owner[start].map_or(TokenClass::Plain, |o| annotations[o].class);
            tokens.push(CodeToken::new(&line[start..i], class));
            start = i;
        }
    }
    tokens
}
