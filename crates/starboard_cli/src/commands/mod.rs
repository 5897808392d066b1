//! Subcommand implementations.

pub(crate) mod harvest;
pub(crate) mod serve;
