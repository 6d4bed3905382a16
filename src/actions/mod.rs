//! Side-effecting operations.

pub mod dispatch;
