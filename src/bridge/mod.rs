//! JSON-RPC tool bridge
//!
//! Lets the conversational engine list tool schemas and invoke tools over a
//! newline-delimited stdio channel.

pub mod protocol;
pub mod server;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use server::ToolBridge;
