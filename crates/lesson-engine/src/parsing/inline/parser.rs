use super::{kinds::Emphasis, types::EmphasisSpan};

/// Splits `text` into plain and emphasized spans.
///
/// Delimiter pairs are matched left to right, non-nested and non-overlapping.
/// Each match becomes an [`EmphasisSpan::Emphasized`] with its delimiters
/// stripped; the text around matches becomes [`EmphasisSpan::Plain`]. Empty
/// plain regions are skipped. Unbalanced delimiters stay as literal text.
pub fn format_emphasis(text: &str) -> Vec<EmphasisSpan> {
    let mut out = vec![];
    let mut last = 0;

    for caps in Emphasis::pattern().captures_iter(text) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if full.start() > last {
            out.push(EmphasisSpan::plain(&text[last..full.start()]));
        }
        out.push(EmphasisSpan::emphasized(inner.as_str()));
        last = full.end();
    }

    if last < text.len() {
        out.push(EmphasisSpan::plain(&text[last..]));
    }
    out
}
