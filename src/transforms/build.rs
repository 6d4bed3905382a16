//! Transforms raw fields into a validated configuration document.

use tracing::debug;

use crate::data::document::{CursorSection, Document, FontSection, WindowSection};
use crate::data::fields::ConfigFields;
use crate::data::options::{CursorStyle, Decorations, StartupMode};
use crate::error::Result;
use crate::queries::validation::{
    font_requested, font_size, non_empty, optional_choice, window_opacity,
};

/// Build the configuration document.
///
/// All enumerated fields are validated before anything is returned, so a
/// bad value never produces a partial document.
pub fn build(fields: &ConfigFields) -> Result<Document> {
    let cursor_style: Option<CursorStyle> = optional_choice(&fields.cursor_style)?;
    let startup_mode: Option<StartupMode> = optional_choice(&fields.window_startup_mode)?;
    let decorations: Option<Decorations> = optional_choice(&fields.window_decorations)?;
    let opacity = window_opacity(fields.window_opacity)?;
    let size = font_size(fields.font_size)?;

    let font = font_requested(fields).then(|| FontSection {
        size,
        family: non_empty(&fields.font_family),
        bold_family: non_empty(&fields.font_bold_family),
        italic_family: non_empty(&fields.font_italic_family),
    });

    let cursor = (cursor_style.is_some() || fields.cursor_blink).then(|| CursorSection {
        style: cursor_style,
        blink: fields.cursor_blink.then_some(true),
    });

    let window = WindowSection {
        x: fields.window_x.filter(|v| *v != 0),
        y: fields.window_y.filter(|v| *v != 0),
        opacity,
        columns: fields.window_columns.filter(|v| *v != 0),
        lines: fields.window_lines.filter(|v| *v != 0),
        title: non_empty(&fields.window_title),
        startup_mode,
        decorations,
        dynamic_title: fields.window_dynamic_title.then_some(true),
    };

    debug!(?font, ?window, ?cursor, "built configuration document");

    Ok(Document {
        font,
        window: Some(window),
        cursor,
    })
}

/// Build the document and serialize it to TOML.
pub fn build_payload(fields: &ConfigFields) -> Result<String> {
    build(fields)?.to_toml()
}
