//! Pure data types: the raw input fields, the option tables and the
//! document that gets serialized.

pub mod document;
pub mod fields;
pub mod options;
