//! rsgene: reduce a dbSNP gene annotation table to the best gene for each requested rs identifier.

pub mod error;

pub mod cli;
pub mod config;
pub mod dbsnp;
pub mod emit;
pub mod identifier;
pub mod membership;
pub mod perf;
pub mod progress;
pub mod region;
