//! Command line front end for fuzzy row matching.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
