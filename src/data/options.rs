//! Closed sets of accepted values for the enumerated settings.
//!
//! Alacritty matches these names exactly, so parsing is case-sensitive.

use serde::Serialize;

use crate::error::{Error, Result};

pub const CURSOR_STYLES: &[&str] = &["Block", "Underline", "Beam"];
pub const WINDOW_STARTUP_MODES: &[&str] = &["Windowed", "Maximized", "Fullscreen", "SimpleFullscreen"];
pub const WINDOW_DECORATIONS: &[&str] = &["Full", "None", "Transparent", "Buttonless"];

/// An enumerated setting backed by a static table of names.
///
/// `VARIANTS` and `NAMES` are kept in the same order.
pub trait Choice: Sized + Copy + 'static {
    /// Flag name reported in validation errors.
    const FIELD: &'static str;
    const NAMES: &'static [&'static str];
    const VARIANTS: &'static [Self];

    /// Parse an exact member name.
    fn parse(value: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .position(|name| *name == value)
            .map(|i| Self::VARIANTS[i])
            .ok_or_else(|| Error::InvalidEnumValue {
                field: Self::FIELD,
                value: value.to_string(),
                allowed: Self::NAMES,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CursorStyle {
    Block,
    Underline,
    Beam,
}

impl Choice for CursorStyle {
    const FIELD: &'static str = "cursor-style";
    const NAMES: &'static [&'static str] = CURSOR_STYLES;
    const VARIANTS: &'static [Self] = &[Self::Block, Self::Underline, Self::Beam];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StartupMode {
    Windowed,
    Maximized,
    Fullscreen,
    SimpleFullscreen,
}

impl Choice for StartupMode {
    const FIELD: &'static str = "window-startup-mode";
    const NAMES: &'static [&'static str] = WINDOW_STARTUP_MODES;
    const VARIANTS: &'static [Self] = &[
        Self::Windowed,
        Self::Maximized,
        Self::Fullscreen,
        Self::SimpleFullscreen,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decorations {
    Full,
    None,
    Transparent,
    Buttonless,
}

impl Choice for Decorations {
    const FIELD: &'static str = "window-decorations";
    const NAMES: &'static [&'static str] = WINDOW_DECORATIONS;
    const VARIANTS: &'static [Self] = &[
        Self::Full,
        Self::None,
        Self::Transparent,
        Self::Buttonless,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_member() {
        for (name, variant) in CURSOR_STYLES.iter().zip(CursorStyle::VARIANTS) {
            assert_eq!(CursorStyle::parse(name).unwrap(), *variant);
        }
        for (name, variant) in WINDOW_STARTUP_MODES.iter().zip(StartupMode::VARIANTS) {
            assert_eq!(StartupMode::parse(name).unwrap(), *variant);
        }
        for (name, variant) in WINDOW_DECORATIONS.iter().zip(Decorations::VARIANTS) {
            assert_eq!(Decorations::parse(name).unwrap(), *variant);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(CursorStyle::parse("beam").is_err());
        assert!(StartupMode::parse("FULLSCREEN").is_err());
        assert!(Decorations::parse("none").is_err());
    }

    #[test]
    fn test_parse_error_names_field_and_members() {
        let err = Decorations::parse("Fancy").unwrap_err();
        match err {
            Error::InvalidEnumValue {
                field,
                value,
                allowed,
            } => {
                assert_eq!(field, "window-decorations");
                assert_eq!(value, "Fancy");
                assert_eq!(allowed, WINDOW_DECORATIONS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serializes_as_member_name() {
        #[derive(Serialize)]
        struct Wrapper {
            mode: StartupMode,
        }
        let out = toml::to_string(&Wrapper {
            mode: StartupMode::SimpleFullscreen,
        })
        .unwrap();
        assert_eq!(out.trim(), r#"mode = "SimpleFullscreen""#);
    }
}
