//! Terminal rendering of a [`LessonView`] using crossterm styling.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use lesson_engine::{BlockView, CodeLine, EmphasisSpan, LessonView, TokenClass};

const RULE_WIDTH: usize = 60;

pub fn render_lesson(out: &mut impl Write, view: &LessonView) -> io::Result<()> {
    match view {
        LessonView::Structured(blocks) => {
            for block in blocks {
                render_block(out, block)?;
                writeln!(out)?;
            }
        }
        LessonView::Unstructured(paragraphs) => {
            for para in paragraphs {
                writeln!(out, "{}", spans(para))?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn render_block(out: &mut impl Write, block: &BlockView) -> io::Result<()> {
    match block {
        BlockView::Title { spans: s } => {
            writeln!(out, "{}", plain(s).bold())?;
            writeln!(out, "{}", "═".repeat(RULE_WIDTH).dark_grey())?;
        }
        BlockView::Intro { spans: s } => {
            writeln!(out, "{} {}", "│".blue(), spans(s))?;
        }
        BlockView::Section { spans: s } => {
            writeln!(out, "{} {}", "▌".cyan(), plain(s).bold().cyan())?;
        }
        BlockView::Paragraph { spans: s } => {
            writeln!(out, "{}", spans(s))?;
        }
        BlockView::Points { items } => {
            for item in items {
                writeln!(out, "  {} {}", "•".cyan(), spans(item))?;
            }
        }
        BlockView::Code {
            language, lines, ..
        } => render_code(out, language, lines)?,
        BlockView::Summary { spans: s } => {
            writeln!(out, "{}", "Summary".bold().green())?;
            writeln!(out, "{} {}", "│".green(), spans(s))?;
        }
    }
    Ok(())
}

fn render_code(out: &mut impl Write, language: &str, lines: &[CodeLine]) -> io::Result<()> {
    writeln!(out, "{}", format!("┌─ {language} ").dark_grey())?;
    let width = lines.len().to_string().len().max(2);
    for line in lines {
        write!(
            out,
            "{} ",
            format!("{:>width$}", line.number).dark_grey()
        )?;
        for token in &line.tokens {
            let styled = token.text.as_str().with(token_color(token.class));
            match token.class {
                TokenClass::Comment => write!(out, "{}", styled.italic())?,
                TokenClass::Keyword => write!(out, "{}", styled.bold())?,
                _ => write!(out, "{styled}")?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", "└─".dark_grey())
}

fn token_color(class: TokenClass) -> Color {
    match class {
        TokenClass::Comment => Color::DarkGrey,
        TokenClass::StringLiteral => Color::Green,
        TokenClass::Keyword => Color::Magenta,
        TokenClass::BuiltinIdentifier => Color::Blue,
        TokenClass::CallSiteIdentifier => Color::Yellow,
        TokenClass::Plain => Color::Reset,
    }
}

/// Formats spans with emphasized runs in bold.
fn spans(spans: &[EmphasisSpan]) -> String {
    spans
        .iter()
        .map(|s| match s {
            EmphasisSpan::Plain(t) => t.clone(),
            EmphasisSpan::Emphasized(t) => t.as_str().bold().to_string(),
        })
        .collect()
}

fn plain(spans: &[EmphasisSpan]) -> String {
    lesson_engine::parsing::inline::plain_text(spans)
}
