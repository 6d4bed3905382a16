//! Pure transforms from caller input to a serialized document.

pub mod build;
