//! Raw field values collected from the caller, before validation.

/// Every setting the caller may supply. All fields are optional; empty
/// strings and non-positive font sizes count as not supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFields {
    pub font_size: f64,
    pub font_family: String,
    pub font_bold_family: String,
    pub font_italic_family: String,
    pub cursor_style: String,
    pub cursor_blink: bool,
    pub window_startup_mode: String,
    pub window_decorations: String,
    pub window_opacity: f64,
    pub window_x: Option<i64>,
    pub window_y: Option<i64>,
    pub window_columns: Option<i64>,
    pub window_lines: Option<i64>,
    pub window_title: String,
    pub window_dynamic_title: bool,
}

/// Opacity used when the caller does not pass one.
pub const DEFAULT_WINDOW_OPACITY: f64 = 1.0;

impl Default for ConfigFields {
    fn default() -> Self {
        Self {
            font_size: 0.0,
            font_family: String::new(),
            font_bold_family: String::new(),
            font_italic_family: String::new(),
            cursor_style: String::new(),
            cursor_blink: false,
            window_startup_mode: String::new(),
            window_decorations: String::new(),
            window_opacity: DEFAULT_WINDOW_OPACITY,
            window_x: None,
            window_y: None,
            window_columns: None,
            window_lines: None,
            window_title: String::new(),
            window_dynamic_title: false,
        }
    }
}
