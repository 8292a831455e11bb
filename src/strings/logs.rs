pub const STARTING: &str = "Starting knowledge-base action server...";
pub const SHUTDOWN: &str = "Shutting down...";
pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn listening(addr: &str) -> String {
    format!("Action server listening on {addr}")
}

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn action_registered(name: &str) -> String {
    format!("Registered action '{name}'")
}

pub fn action_replaced(name: &str) -> String {
    format!("Action '{name}' was already registered; replacing it")
}

pub fn store_target(host: &str, port: u16, database: &str) -> String {
    format!("Knowledge base at {host}:{port}/{database}")
}

pub fn question_matched(id: i64, text: &str) -> String {
    format!("Matched predefined question {id}: {text}")
}

pub fn session_close_failed(err: &str) -> String {
    format!("Failed to close knowledge-base connection: {err}")
}
