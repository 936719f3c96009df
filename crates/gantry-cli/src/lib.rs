//! gantry CLI library: command-line surface, logging, and command dispatch
//! over the `gantry-config` facade.

pub mod cli;
pub mod commands;
pub mod logger;
