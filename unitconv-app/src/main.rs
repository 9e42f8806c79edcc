//! Unitconv MCP Server
//!
//! Line-delimited JSON-RPC over stdio: one request per line on stdin,
//! one response per line on stdout, logs on stderr.
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - list_categories: List the unit categories
//! - list_units: List a category's units in presentation order

use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use unitconv::{format_value, parse_value};
use unitconv_core::{convert, Category, UNITS};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "unitconv";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpResponse {
    fn ok(id: Option<JsonValue>, result: JsonValue) -> Self {
        McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

fn invalid_params(message: impl Into<String>) -> McpError {
    McpError {
        code: -32602,
        message: message.into(),
        data: None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Unitconv MCP Server v{} started", SERVER_VERSION);
    info!("Protocol: {}", PROTOCOL_VERSION);

    let stdin = io::stdin();
    let reader = io::BufReader::new(stdin.lock());

    info!("Server ready, waiting for requests...");

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!("Error parsing request: {}", e);
                let response = McpResponse::err(
                    None,
                    McpError {
                        code: -32700,
                        message: format!("Parse error: {}", e),
                        data: None,
                    },
                );
                if write_response(&response).is_err() {
                    break;
                }
                continue;
            }
        };

        info!("Processing: {}", request.method);
        let response = handle_request(&request);

        // Notifications (no id) do not receive a response
        if request.id.is_none() {
            continue;
        }

        if let Err(e) = write_response(&response) {
            error!("Error writing response: {}", e);
            break;
        }
    }

    info!("Server shutting down");
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

fn handle_request(request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(&request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse::ok(request.id.clone(), r),
        Err(e) => McpResponse::err(request.id.clone(), e),
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!("Client connected: {} (protocol: {})", client_info, client_protocol);

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion between length, weight, temperature and volume units"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories and list_units to discover the unit vocabulary, then convert to translate a value between two units of the same category."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a numeric value between two units of the same category. Returns the result rendered to 4 decimals.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": "string",
                            "description": "Numeric value to convert"
                        },
                        "category": {
                            "type": "string",
                            "description": "Unit category",
                            "enum": ["Length", "Weight", "Temperature", "Volume"]
                        },
                        "from": {
                            "type": "string",
                            "description": "Source unit label (e.g., \"miles\")"
                        },
                        "to": {
                            "type": "string",
                            "description": "Target unit label (e.g., \"meters\")"
                        }
                    },
                    "required": ["value", "category", "from", "to"]
                }
            },
            {
                "name": "list_categories",
                "description": "List the unit categories in presentation order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List a category's unit labels in presentation order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Unit category",
                            "enum": ["Length", "Weight", "Temperature", "Volume"]
                        }
                    },
                    "required": ["category"]
                }
            }
        ]
    }))
}

fn handle_tool_call(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params
        .as_ref()
        .ok_or_else(|| invalid_params("Missing params"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "convert" => tool_convert(args),
        "list_categories" => tool_list_categories(),
        "list_units" => tool_list_units(args),
        _ => Err(invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn str_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid_params(format!("Missing {} argument", name)))
}

/// Render a boundary or engine failure the way the window would: no
/// output text, one human-readable message line.
fn tool_failure(message: String) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": message }],
        "isError": true
    })
}

fn tool_convert(args: JsonValue) -> Result<JsonValue, McpError> {
    let category: Category = match str_arg(&args, "category")?.parse() {
        Ok(c) => c,
        Err(e) => return Ok(tool_failure(e.to_string())),
    };

    let from = match UNITS.resolve(category, str_arg(&args, "from")?) {
        Ok(u) => u,
        Err(e) => return Ok(tool_failure(e.to_string())),
    };

    let to = match UNITS.resolve(category, str_arg(&args, "to")?) {
        Ok(u) => u,
        Err(e) => return Ok(tool_failure(e.to_string())),
    };

    let value = match parse_value(str_arg(&args, "value")?) {
        // Empty input converts to an empty result, not an error
        Ok(None) => {
            return Ok(json!({
                "content": [{ "type": "text", "text": "" }],
                "isError": false
            }))
        }
        Ok(Some(v)) => v,
        Err(e) => return Ok(tool_failure(e.to_string())),
    };

    match convert(category, value, from, to) {
        Ok(result) => Ok(json!({
            "content": [{ "type": "text", "text": format_value(result) }],
            "value": result,
            "from": from.label(),
            "to": to.label(),
            "isError": false
        })),
        Err(e) => Ok(tool_failure(e.to_string())),
    }
}

fn tool_list_categories() -> Result<JsonValue, McpError> {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    Ok(json!({
        "content": [{ "type": "text", "text": categories.join(", ") }],
        "categories": categories,
        "isError": false
    }))
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    let category: Category = match str_arg(&args, "category")?.parse() {
        Ok(c) => c,
        Err(e) => return Ok(tool_failure(e.to_string())),
    };

    let labels = UNITS.labels(category);
    Ok(json!({
        "content": [{ "type": "text", "text": labels.join(", ") }],
        "category": category.name(),
        "units": labels,
        "isError": false
    }))
}
