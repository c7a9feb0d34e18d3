//! RPC method handler for the Shelfmark JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested. Each method is
//! translated into an [`Action`]; answers to confirmations and tag prompts
//! travel inside the request and are replayed through a [`ScriptedPrompt`].

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::{Action, App};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::user_prompt::ScriptedPrompt;
use crate::types::bookmark::SortMode;

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn name_url(params: &Value) -> Result<(String, String), String> {
    Ok((
        str_param(params, "name")?.to_string(),
        str_param(params, "url")?.to_string(),
    ))
}

fn confirmed(params: &Value) -> bool {
    params.get("confirmed").and_then(|v| v.as_bool()).unwrap_or(false)
}

/// Runs `action` and serializes the resulting view.
fn run(app: &Mutex<App>, action: Action, mut prompt: ScriptedPrompt) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;
    let view = a.dispatch(action, &mut prompt).map_err(|e| e.to_string())?;
    serde_json::to_value(view).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── View ───
        "view.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let view = a.view().map_err(|e| e.to_string())?;
            serde_json::to_value(view).map_err(|e| e.to_string())
        }
        "view.set_sort" => {
            let mode: SortMode = str_param(params, "mode")?.parse()?;
            run(app, Action::SetSortMode(mode), ScriptedPrompt::new())
        }
        "view.set_filter" => {
            let text = params.get("text").and_then(|v| v.as_str()).unwrap_or("");
            run(app, Action::SetFilter(text.to_string()), ScriptedPrompt::new())
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
            let url = params.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let action = Action::Add {
                name: name.to_string(),
                url: url.to_string(),
            };
            run(app, action, ScriptedPrompt::new())
        }
        "bookmark.toggle_important" => {
            let (name, url) = name_url(params)?;
            run(app, Action::ToggleImportant { name, url }, ScriptedPrompt::new())
        }
        "bookmark.set_tag" => {
            let (name, url) = name_url(params)?;
            // A null or missing tag is a cancelled prompt.
            let tag = params.get("tag").and_then(|v| v.as_str());
            run(
                app,
                Action::EditTag { name, url },
                ScriptedPrompt::new().with_text(tag),
            )
        }
        "bookmark.archive" => {
            let (name, url) = name_url(params)?;
            run(app, Action::Archive { name, url }, ScriptedPrompt::new())
        }

        // ─── Archive ───
        "archive.restore" => {
            let (name, url) = name_url(params)?;
            run(app, Action::Restore { name, url }, ScriptedPrompt::new())
        }
        "archive.delete" => {
            let (name, url) = name_url(params)?;
            let tag = params.get("tag").and_then(|v| v.as_str()).unwrap_or("").to_string();
            run(
                app,
                Action::Delete { name, url, tag },
                ScriptedPrompt::new().with_confirmation(confirmed(params)),
            )
        }
        "archive.clear" => run(
            app,
            Action::ClearArchive,
            ScriptedPrompt::new().with_confirmation(confirmed(params)),
        ),
        "archive.toggle_visibility" => {
            run(app, Action::ToggleArchiveVisibility, ScriptedPrompt::new())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
