//! Line-delimited JSON-RPC server
//!
//! A lightweight, synchronous JSON-RPC 2.0 front end over the same shell
//! boundary the console uses. No async runtime required - uses blocking
//! reads and writes.
//!
//! # Protocol
//! - JSON-RPC 2.0, one request per line, one response per line
//! - Methods: initialize, shutdown, resolve, query, planets, planet
//! - Requests without an id are notifications and get no reply
//!
//! # Usage
//! ```bash
//! echo '{"jsonrpc":"2.0","id":1,"method":"query","params":{"text":"mars"}}' | orrery --server
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

use crate::core::{resolve, CelestialBody};
use crate::shell::{Renderer, Response, Shell};

// ============================================================================
// JSON-RPC 2.0 Types
// ============================================================================

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError { code, message }),
        }
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error_code(&self) -> Option<i32> {
        self.error.as_ref().map(|e| e.code)
    }
}

// JSON-RPC error codes
const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

#[derive(Debug, Deserialize)]
struct ResolveParams {
    text: String,
    #[serde(default)]
    subjects: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct QueryParams {
    text: String,
    #[serde(default)]
    subject: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlanetParams {
    name: String,
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    serde_json::from_value(params.unwrap_or(Value::Null)).map_err(|e| format!("Invalid params: {}", e))
}

// ============================================================================
// Query Server
// ============================================================================

/// Server state
pub struct QueryServer {
    star: CelestialBody,
    renderer: Renderer,
}

impl QueryServer {
    /// Create a server over a loaded system
    pub fn new(star: CelestialBody, renderer: Renderer) -> Self {
        Self {
            star,
            renderer,
        }
    }

    /// Run the server loop over stdio (blocking)
    pub fn run(&self) -> io::Result<()> {
        let stdin = io::stdin();
        self.serve(stdin.lock(), io::stdout())
    }

    /// Serve requests from `input` until end of input
    pub fn serve<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_request(line),
                Err(e) => {
                    warn!(error = %e, "request line is not valid UTF-8");
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        PARSE_ERROR,
                        format!("Parse error: {}", e),
                    ))
                }
            };

            if let Some(response) = response {
                let response_str = serde_json::to_string(&response).unwrap_or_else(|e| {
                    format!(
                        r#"{{"jsonrpc":"2.0","id":null,"error":{{"code":{},"message":"Serialization error: {}"}}}}"#,
                        INTERNAL_ERROR, e
                    )
                });
                writeln!(output, "{}", response_str)?;
                output.flush()?;
            }
        }

        info!("server shutting down");
        Ok(())
    }

    /// Handle a JSON-RPC request. Returns None for notifications (no id).
    pub fn handle_request(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ));
        }

        let is_notification = request.id.is_none();
        let id = request.id.clone().unwrap_or(Value::Null);
        debug!(method = %request.method, "request");

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "initialized" => return None,
            "shutdown" => JsonRpcResponse::success(id, json!({})),
            "resolve" => self.handle_resolve(id, request.params),
            "query" => self.handle_query(id, request.params),
            "planets" => JsonRpcResponse::success(id, json!(self.star.orbiting_object_name_list())),
            "planet" => self.handle_planet(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            ),
        };

        if is_notification {
            None
        } else {
            Some(response)
        }
    }

    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        info!("server initialized");

        JsonRpcResponse::success(
            id,
            json!({
                "serverInfo": {
                    "name": "orrery",
                    "version": crate::version()
                },
                "star": self.star.name(),
                "methods": ["resolve", "query", "planets", "planet"]
            }),
        )
    }

    fn handle_resolve(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: ResolveParams = match parse_params(params) {
            Ok(p) => p,
            Err(message) => return JsonRpcResponse::error(id, INVALID_PARAMS, message),
        };

        let subjects: Vec<&str> = match &params.subjects {
            Some(subjects) => subjects.iter().map(String::as_str).collect(),
            None => self.star.orbiting_object_name_list(),
        };
        let resolution = resolve(&params.text, &subjects);
        JsonRpcResponse::success(id, json!(resolution))
    }

    fn handle_query(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: QueryParams = match parse_params(params) {
            Ok(p) => p,
            Err(message) => return JsonRpcResponse::error(id, INVALID_PARAMS, message),
        };

        let shell = Shell::new(&self.star);
        let mut response = shell.handle(&params.text);
        if let (Response::NeedsSubject(intent), Some(subject)) = (response, &params.subject) {
            response = shell.handle_subject(intent, subject);
        }

        let view = match response {
            Response::View(view) => Some(view.name()),
            _ => None,
        };
        let intent = match response {
            Response::NeedsSubject(intent) => Some(intent),
            _ => None,
        };

        JsonRpcResponse::success(
            id,
            json!({
                "kind": response.kind(),
                "view": view,
                "intent": intent,
                "text": self.renderer.render(&response),
            }),
        )
    }

    fn handle_planet(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: PlanetParams = match parse_params(params) {
            Ok(p) => p,
            Err(message) => return JsonRpcResponse::error(id, INVALID_PARAMS, message),
        };

        match self.star.find_orbiting_object(&params.name) {
            Some(planet) => match serde_json::to_value(planet) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
            },
            None => JsonRpcResponse::success(id, Value::Null),
        }
    }
}
