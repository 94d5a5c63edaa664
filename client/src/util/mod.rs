//! Browser glue. Every helper here no-ops outside the `hydrate` build.

pub mod dom;
pub mod theme_storage;
