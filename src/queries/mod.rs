//! Read-only checks over raw field values.

pub mod validation;
