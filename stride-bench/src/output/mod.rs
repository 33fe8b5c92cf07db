//! Output modules for rendering benchmark results.
//!
//! Table (comfy-table) and JSON reports go to stdout; the progress bar
//! (indicatif) goes to stderr.

pub mod json;
pub mod progress;
pub mod table;
