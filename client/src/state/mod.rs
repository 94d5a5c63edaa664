//! Client-side state shared through Leptos context.

pub mod theme;
pub mod ui;
