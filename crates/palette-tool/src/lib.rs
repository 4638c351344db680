//! Front end for the palette generator: command-line configuration,
//! terminal swatches and the MCP server.

pub mod config;
pub mod display;
pub mod mcp;

pub use config::{ArgsError, Command, ToolConfig, parse_args};
