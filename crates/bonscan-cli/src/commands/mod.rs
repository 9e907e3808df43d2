//! CLI subcommands.

pub mod batch;
pub mod scan;
