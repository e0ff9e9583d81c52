//! JSON-RPC stdio transport
//!
//! Exposes the advisor operations as MCP-style tools over line-delimited
//! JSON-RPC 2.0.

pub mod protocol;
mod server;
mod tools;

pub use protocol::{Request, Response, RpcError};
pub use server::{PROTOCOL_VERSION, RpcServer};
pub use tools::{Tool, ToolOutput, call_tool, tool_list};
