//! matcalc-cli: command-line front end for `matcalc-core`.
//!
//! Reads matrices from CSV/TSV/JSON files, applies the editor limits from
//! the configuration, runs one kernel operation per invocation and renders
//! the result. Kernel failures are translated into user-facing messages.
pub mod calculate;
pub mod config;
pub mod io;
pub mod render;
