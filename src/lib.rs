pub mod chunk;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod output;
pub mod output_common;
pub mod process;
pub mod rule;
pub mod sink;
pub mod validate;
