//! alaconf: change the settings of a running Alacritty from the command line.

pub mod actions;
pub mod data;
pub mod error;
pub mod queries;
pub mod transforms;
