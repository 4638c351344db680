//! MCP (Model Context Protocol) server for the palette generator.
//!
//! Exposes palette generation and swatch rendering as a JSON-RPC 2.0
//! server over stdin/stdout, one request per line. Rendered images come
//! back as base64 PNG, ready to be offered as a download.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use palette_core::{Color, Palette, Scheme, generate_palette};
use palette_swatch::capture::{self, PNG_MIME};
use palette_swatch::{CELL_SIZE, IMAGE_HEIGHT, RenderError, SwatchRenderer};

// ---------------------------------------------------------------------------
// JSON-RPC types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RpcRequest {
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: JsonValue,
    id: JsonValue,
}

#[derive(Serialize)]
struct RpcResponse {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
    id: JsonValue,
}

#[derive(Serialize)]
struct RpcError {
    code: i32,
    message: String,
}

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const SERVER_ERROR: i32 = -32000;

impl RpcResponse {
    fn success(id: JsonValue, result: JsonValue) -> Self {
        Self {
            jsonrpc: "2.0",
            result: Some(result),
            error: None,
            id,
        }
    }

    fn error(id: JsonValue, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0",
            result: None,
            error: Some(RpcError { code, message }),
            id,
        }
    }
}

// ---------------------------------------------------------------------------
// MCP Server
// ---------------------------------------------------------------------------

/// MCP server wrapping a swatch renderer.
pub struct McpServer {
    renderer: SwatchRenderer,
    output_dir: PathBuf,
}

impl McpServer {
    #[must_use]
    pub fn new(renderer: SwatchRenderer) -> Self {
        Self {
            renderer,
            output_dir: PathBuf::from("."),
        }
    }

    /// Directory `save_palette` writes to when the request names none.
    pub fn set_output_dir(&mut self, dir: PathBuf) {
        self.output_dir = dir;
    }

    /// Run the server loop: read JSON-RPC from stdin, write responses to stdout.
    pub fn run(&self) {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock());
    }

    /// Answer every request line from `input` on `output` until EOF.
    pub fn serve<R: BufRead, W: Write>(&self, input: R, mut output: W) {
        for line in input.split(b'\n') {
            let Ok(bytes) = line else {
                break;
            };

            // A line that is not UTF-8 gets an error reply; later lines still count
            let response = match String::from_utf8(bytes) {
                Ok(text) => {
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    self.handle_line(text)
                }
                Err(e) => RpcResponse::error(
                    JsonValue::Null,
                    PARSE_ERROR,
                    format!("Parse error: request is not UTF-8 ({e})"),
                ),
            };

            let _ = writeln!(
                output,
                "{}",
                serde_json::to_string(&response).unwrap_or_default()
            );
            let _ = output.flush();
        }
    }

    fn handle_line(&self, line: &str) -> RpcResponse {
        match serde_json::from_str::<RpcRequest>(line) {
            Ok(request) if request.jsonrpc != "2.0" => RpcResponse::error(
                request.id,
                INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ),
            Ok(request) => self.dispatch(&request.method, &request.params, request.id),
            Err(e) => RpcResponse::error(JsonValue::Null, PARSE_ERROR, format!("Parse error: {e}")),
        }
    }

    fn dispatch(&self, method: &str, params: &JsonValue, id: JsonValue) -> RpcResponse {
        log::debug!("mcp request: {method}");
        match method {
            "generate_palette" => Self::handle_generate_palette(params, id),
            "render_palette" => self.handle_render_palette(params, id),
            "save_palette" => self.handle_save_palette(params, id),
            "list_schemes" => Self::handle_list_schemes(id),
            "hex_to_rgb" => Self::handle_hex_to_rgb(params, id),
            "rgb_to_hex" => Self::handle_rgb_to_hex(params, id),
            _ => RpcResponse::error(id, METHOD_NOT_FOUND, format!("Unknown method: {method}")),
        }
    }

    // === Tool handlers ===

    fn handle_generate_palette(params: &JsonValue, id: JsonValue) -> RpcResponse {
        let palette = match palette_from_params(params) {
            Ok(p) => p,
            Err(msg) => return RpcResponse::error(id, INVALID_PARAMS, msg),
        };

        let mut result = match serde_json::to_value(&palette) {
            Ok(v) => v,
            Err(e) => return RpcResponse::error(id, SERVER_ERROR, format!("Serialize error: {e}")),
        };
        result["labels"] = serde_json::json!(palette.hex_codes());
        RpcResponse::success(id, result)
    }

    fn handle_render_palette(&self, params: &JsonValue, id: JsonValue) -> RpcResponse {
        // Either an explicit colour list or a colour + scheme to generate from
        let (colors, file_name) = if let Some(list) = params.get("colors") {
            match serde_json::from_value::<Vec<Color>>(list.clone()) {
                Ok(colors) => (colors, "palette.png".to_string()),
                Err(e) => {
                    return RpcResponse::error(id, INVALID_PARAMS, format!("Invalid colors: {e}"));
                }
            }
        } else {
            match palette_from_params(params) {
                Ok(p) => (p.colors().to_vec(), p.scheme().file_name()),
                Err(msg) => return RpcResponse::error(id, INVALID_PARAMS, msg),
            }
        };

        if colors.is_empty() {
            return RpcResponse::error(id, INVALID_PARAMS, "Provide at least one colour".to_string());
        }

        let png_buf = match self.renderer.render_png(&colors) {
            Ok(b) => b,
            Err(e @ (RenderError::EmptyPalette | RenderError::TooWide(_))) => {
                return RpcResponse::error(id, INVALID_PARAMS, e.to_string());
            }
            Err(e) => return RpcResponse::error(id, SERVER_ERROR, format!("Render failed: {e}")),
        };

        let b64 = base64::engine::general_purpose::STANDARD.encode(&png_buf);
        RpcResponse::success(
            id,
            serde_json::json!({
                "format": "png",
                "mime": PNG_MIME,
                "file_name": file_name,
                "width": CELL_SIZE as usize * colors.len(),
                "height": IMAGE_HEIGHT,
                "data": b64,
            }),
        )
    }

    fn handle_save_palette(&self, params: &JsonValue, id: JsonValue) -> RpcResponse {
        let palette = match palette_from_params(params) {
            Ok(p) => p,
            Err(msg) => return RpcResponse::error(id, INVALID_PARAMS, msg),
        };
        let dir = params
            .get("dir")
            .and_then(|v| v.as_str())
            .map_or_else(|| self.output_dir.clone(), PathBuf::from);

        match capture::save_palette_png(&self.renderer, &palette, &dir) {
            Ok(path) => RpcResponse::success(
                id,
                serde_json::json!({"path": path.display().to_string()}),
            ),
            Err(e) => RpcResponse::error(id, SERVER_ERROR, format!("Save failed: {e}")),
        }
    }

    fn handle_list_schemes(id: JsonValue) -> RpcResponse {
        let schemes: Vec<JsonValue> = Scheme::ALL
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s.name(),
                    "length": s.len(),
                    "offsets": s.offsets(),
                })
            })
            .collect();
        RpcResponse::success(id, JsonValue::Array(schemes))
    }

    fn handle_hex_to_rgb(params: &JsonValue, id: JsonValue) -> RpcResponse {
        let Some(hex) = params.get("hex").and_then(|v| v.as_str()) else {
            return RpcResponse::error(id, INVALID_PARAMS, "Missing 'hex'".to_string());
        };
        match Color::from_hex(hex) {
            Ok(c) => RpcResponse::success(id, serde_json::json!({"r": c.r, "g": c.g, "b": c.b})),
            Err(e) => RpcResponse::error(id, INVALID_PARAMS, e.to_string()),
        }
    }

    fn handle_rgb_to_hex(params: &JsonValue, id: JsonValue) -> RpcResponse {
        let channel = |name: &str| {
            params
                .get(name)
                .and_then(JsonValue::as_u64)
                .and_then(|v| u8::try_from(v).ok())
        };
        match (channel("r"), channel("g"), channel("b")) {
            (Some(r), Some(g), Some(b)) => RpcResponse::success(
                id,
                serde_json::json!({"hex": palette_core::rgb_to_hex(r, g, b)}),
            ),
            _ => RpcResponse::error(
                id,
                INVALID_PARAMS,
                "Provide 'r', 'g' and 'b' as integers 0-255".to_string(),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a palette from `color` and `scheme` params.
fn palette_from_params(params: &JsonValue) -> Result<Palette, String> {
    let hex = params
        .get("color")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing 'color'".to_string())?;
    let base = Color::from_hex(hex).map_err(|e| e.to_string())?;

    let scheme = match params.get("scheme").and_then(|v| v.as_str()) {
        Some(name) => name.parse::<Scheme>().map_err(|e| e.to_string())?,
        None => Scheme::Complementary,
    };

    Ok(generate_palette(base, scheme))
}
