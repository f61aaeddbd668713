//! Template assets, embedded at compile time so the binary has no runtime file
//! dependencies.
//!
//! Both are minijinja templates. The registered name decides auto-escaping:
//! `export.html` gets HTML escaping, `text` gets none.
//!
//! The text template relies on `trim_blocks`: every line holding only a block
//! tag disappears from the output, so the visible lines in the file are
//! exactly the lines that get printed.

pub const TEXT_TEMPLATE_NAME: &str = "text";
pub const TEXT_TEMPLATE: &str = include_str!("templates/text.tmp");

pub const HTML_TEMPLATE_NAME: &str = "export.html";
pub const HTML_TEMPLATE: &str = include_str!("templates/export.html");
