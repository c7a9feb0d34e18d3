//! Shelfmark RPC Server — JSON-RPC over stdin/stdout for embedding in a host UI.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"name":"...","url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use serde_json::{json, Value};

use shelfmark::app::App;
use shelfmark::rpc_handler::handle_method;
use shelfmark::services::logging;
use shelfmark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn respond(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(std::env::args().nth(1));
    settings_engine.load()?;
    logging::init(&settings_engine.get_settings().logging);
    let app = Mutex::new(App::open(settings_engine)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    respond(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}))?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(&mut out, &json!({"id":null,"error":format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                tracing::debug!(method, error = %err, "rpc call failed");
                json!({"id": id, "error": err})
            }
        };
        respond(&mut out, &response)?;
    }

    Ok(())
}
