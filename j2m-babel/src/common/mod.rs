//! Helpers shared by the wiki and Markdown rewrite rules.

pub mod emphasis;
pub mod list_nesting;
pub mod tables;
