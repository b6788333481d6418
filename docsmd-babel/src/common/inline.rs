//! Inline style reconstruction for text runs.
//!
//! Wraps are applied innermost to outermost in a fixed order:
//! bold, italic, strikethrough, underline, link. Markdown has no underline, so
//! it is written as `<u>…</u>`, and only when the run is not a link (the link
//! wins). Surrounding whitespace is trimmed from the finished token only; text
//! inside the markers is left alone.

use crate::formats::docs::model::TextRun;

pub fn render_text_run(run: &TextRun) -> String {
    let style = &run.text_style;
    let mut text = run.content.clone();

    if style.bold {
        text = format!("**{text}**");
    }
    if style.italic {
        text = format!("*{text}*");
    }
    if style.strikethrough {
        text = format!("~~{text}~~");
    }
    if style.underline && style.link.is_none() {
        text = format!("<u>{text}</u>");
    }
    if let Some(link) = &style.link {
        text = format!("[{text}]({})", link.url);
    }

    text.trim().to_string()
}

/// Render several runs of one paragraph element, concatenated without separator.
pub fn render_text_runs<'a>(runs: impl IntoIterator<Item = &'a TextRun>) -> String {
    runs.into_iter().map(render_text_run).collect()
}
