use medium_core::Reply;
use serde_json::Value;

/// Render a successful body; bare strings (markdown, html, ids) print raw
pub fn render(body: &Value, pretty: bool) -> String {
    match body {
        Value::String(text) => text.clone(),
        other if pretty => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        other => other.to_string(),
    }
}

/// Print a reply to stdout, or its failure to stderr. Returns whether it succeeded.
pub fn print_reply(reply: &Reply, pretty: bool) -> bool {
    match reply {
        Reply::Data(body) => {
            println!("{}", render(body, pretty));
            true
        }
        Reply::Failed(failure) => {
            eprintln!("{}", failure.message);
            if let Some(body) = &failure.body {
                eprintln!("{}", body);
            }
            false
        }
    }
}
