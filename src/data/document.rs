//! Types for the configuration document sent to Alacritty.
//!
//! Every field is optional and skipped when unset, so the serialized
//! document only overrides what the user asked for.

use serde::Serialize;

use super::options::{CursorStyle, Decorations, StartupMode};

/// Font overrides. Serialized as the `[font]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FontSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(rename = "bold", skip_serializing_if = "Option::is_none")]
    pub bold_family: Option<String>,
    #[serde(rename = "italic", skip_serializing_if = "Option::is_none")]
    pub italic_family: Option<String>,
}

/// Window overrides. Serialized as the `[window]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_mode: Option<StartupMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorations: Option<Decorations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_title: Option<bool>,
}

/// Cursor overrides. Serialized as the `[cursor]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CursorSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CursorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blink: Option<bool>,
}

/// Root of the configuration document. Absent sections are not emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorSection>,
}

impl Document {
    /// Serialize to the TOML text passed to `alacritty msg config`.
    pub fn to_toml(&self) -> crate::error::Result<String> {
        Ok(toml::to_string(self)?)
    }
}
