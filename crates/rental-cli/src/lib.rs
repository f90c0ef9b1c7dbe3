//! CLI crate for rental-desk.
//!
//! Exposed as a library so the integration tests can drive the
//! interactive shell with scripted input.

pub mod cli;
pub mod commands;
pub mod output;
pub mod shell;
