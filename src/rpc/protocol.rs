//! JSON-RPC 2.0 framing
//!
//! One request per line in, one response per line out. Requests without an
//! `id` are notifications and get no response.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AdvisorError;

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// A request that passed envelope validation
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// `None` for notifications
    pub id: Option<Value>,
    pub method: String,
    pub params: Value,
}

impl Request {
    /// Validate the envelope of a decoded message
    ///
    /// `params` defaults to an empty object.
    ///
    /// # Errors
    /// An `INVALID_REQUEST` error (carrying whatever `id` could be read) when
    /// the message is not an object with a string `method`.
    pub fn from_value(value: Value) -> Result<Self, (Value, RpcError)> {
        let Value::Object(mut fields) = value else {
            return Err((
                Value::Null,
                RpcError::invalid_request("expected a JSON object"),
            ));
        };

        let id = fields.remove("id");
        let Some(Value::String(method)) = fields.remove("method") else {
            return Err((
                id.unwrap_or(Value::Null),
                RpcError::invalid_request("missing string field 'method'"),
            ));
        };

        let params = match fields.remove("params") {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(params @ (Value::Object(_) | Value::Array(_))) => params,
            Some(_) => {
                return Err((
                    id.unwrap_or(Value::Null),
                    RpcError::invalid_request("'params' must be an object or array"),
                ));
            }
        };

        Ok(Self { id, method, params })
    }

    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR, "Parse error")
    }

    #[must_use]
    pub fn invalid_request(detail: &str) -> Self {
        Self::new(INVALID_REQUEST, format!("Invalid request: {detail}"))
    }

    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {method}"))
    }

    #[must_use]
    pub fn invalid_params(detail: impl std::fmt::Display) -> Self {
        Self::new(INVALID_PARAMS, format!("Invalid params: {detail}"))
    }

    #[must_use]
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self::new(INTERNAL_ERROR, format!("Internal error: {detail}"))
    }
}

impl From<AdvisorError> for RpcError {
    fn from(err: AdvisorError) -> Self {
        if err.is_validation() {
            Self::new(INVALID_PARAMS, err.to_string())
        } else {
            Self::internal(err)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl Response {
    #[must_use]
    pub const fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub const fn failure(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(error),
        }
    }
}
