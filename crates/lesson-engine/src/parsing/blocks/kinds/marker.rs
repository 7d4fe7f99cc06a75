use crate::parsing::blocks::types::BlockKind;

/// A marker found at the start of a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    pub kind: BlockKind,
    /// Trimmed, non-empty text after the marker (title and section markers only).
    pub trailing: Option<&'a str>,
}

/// Block marker vocabulary. Markers are case-sensitive and must start the trimmed line.
pub struct Marker;

impl Marker {
    pub const TITLE: &'static str = "##TITLE##";
    pub const INTRO: &'static str = "##INTRO##";
    pub const SECTION: &'static str = "##SECTION##";
    pub const PARAGRAPH: &'static str = "##PARAGRAPH##";
    pub const POINTS: &'static str = "##POINTS##";
    pub const CODE: &'static str = "##CODE##";
    pub const SUMMARY: &'static str = "##SUMMARY##";

    /// All markers in the order they are tested.
    pub const ALL: [(&'static str, BlockKind); 7] = [
        (Self::TITLE, BlockKind::Title),
        (Self::INTRO, BlockKind::Intro),
        (Self::SECTION, BlockKind::Section),
        (Self::PARAGRAPH, BlockKind::Paragraph),
        (Self::POINTS, BlockKind::Points),
        (Self::CODE, BlockKind::Code),
        (Self::SUMMARY, BlockKind::Summary),
    ];

    /// Detects a marker at the start of an already trimmed line.
    pub fn detect(trimmed: &str) -> Option<MarkerMatch<'_>> {
        Self::ALL.iter().find_map(|&(token, kind)| {
            let rest = trimmed.strip_prefix(token)?;
            let trailing = Some(rest.trim())
                .filter(|t| kind.accepts_inline_text() && !t.is_empty());
            Some(MarkerMatch { kind, trailing })
        })
    }
}
