//! UI components.

pub mod explosion;
