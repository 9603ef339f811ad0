pub mod cli;
pub mod commands;
pub mod segment;
pub mod structure;
pub mod utils;
pub mod workflows;
pub mod writers;
