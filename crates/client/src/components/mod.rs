//! Reusable UI components.

pub mod profile;
pub mod ui;
