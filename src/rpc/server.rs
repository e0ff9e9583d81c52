//! Line-delimited JSON-RPC server
//!
//! Reads one request per line and writes one response per line. Stdout is
//! reserved for responses; diagnostics go through the logger.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use serde_json::{Value, json};

use super::protocol::{METHOD_NOT_FOUND, Request, Response, RpcError};
use super::tools::{Tool, call_tool, tool_list};
use crate::service::Advisor;
use crate::session::SessionStore;
use crate::wordlists::Dictionary;

/// MCP protocol revision reported by `initialize`
pub const PROTOCOL_VERSION: &str = "2025-06-18";

pub struct RpcServer<S, D> {
    advisor: Advisor<S, D>,
}

impl<S: SessionStore, D: Dictionary> RpcServer<S, D> {
    #[must_use]
    pub const fn new(advisor: Advisor<S, D>) -> Self {
        Self { advisor }
    }

    /// Serve until end of input
    ///
    /// Blank lines are skipped. Each response is flushed as soon as it is
    /// written.
    ///
    /// # Errors
    /// Only I/O failures on either stream end the loop.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        info!("serving JSON-RPC on stdio");
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line) {
                serde_json::to_writer(&mut output, &response)?;
                output.write_all(b"\n")?;
                output.flush()?;
            }
        }
        info!("input closed, shutting down");
        Ok(())
    }

    /// Answer one raw line; `None` for notifications
    #[must_use]
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(err) => {
                warn!("unparseable request: {err}");
                return Some(Response::failure(Value::Null, RpcError::parse_error()));
            }
        };

        let request = match Request::from_value(value) {
            Ok(request) => request,
            Err((id, error)) => return Some(Response::failure(id, error)),
        };

        debug!("{} {:?}", request.method, request.id);
        let notification = request.is_notification();
        let outcome = self.dispatch(&request.method, request.params);
        if let Err(err) = &outcome {
            debug!("{} failed: {} {}", request.method, err.code, err.message);
        }
        if notification {
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        Some(match outcome {
            Ok(result) => Response::success(id, result),
            Err(error) => Response::failure(id, error),
        })
    }

    fn dispatch(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "capabilities": {"tools": {}},
            })),
            "ping" | "notifications/initialized" => Ok(json!({})),
            "tools/list" => Ok(tool_list()),
            "tools/call" => {
                let (name, arguments) = tool_call_params(params)?;
                let tool = Tool::from_name(&name).ok_or_else(|| {
                    RpcError::new(METHOD_NOT_FOUND, format!("Tool not found: {name}"))
                })?;
                Ok(call_tool(&self.advisor, tool, arguments)?.into_content())
            }
            direct => {
                let tool =
                    Tool::from_name(direct).ok_or_else(|| RpcError::method_not_found(direct))?;
                Ok(call_tool(&self.advisor, tool, params)?.payload)
            }
        }
    }
}

fn tool_call_params(params: Value) -> Result<(String, Value), RpcError> {
    let Value::Object(mut fields) = params else {
        return Err(RpcError::invalid_params("tools/call expects an object"));
    };
    let Some(Value::String(name)) = fields.remove("name") else {
        return Err(RpcError::invalid_params("missing tool name"));
    };
    let arguments = fields.remove("arguments").unwrap_or(Value::Null);
    Ok((name, arguments))
}
