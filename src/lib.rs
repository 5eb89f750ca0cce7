//! Game Script Generator: template-driven game design documents.
//!
//! Normalizes a handful of categorical inputs (game type, theme, length),
//! draws names, plots and titles from content tables with a seeded RNG, and
//! stitches them into fixed prose templates. The result is written as
//! Markdown with an optional JSON record.

pub mod core;
pub mod schema;
