// ABOUTME: Output formatting for resolved facts.
// ABOUTME: Supports normal, quiet (values only), and JSON output modes.

use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use crate::diagnostics::Warning;
use crate::types::FactName;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `name => value` lines
    Normal,
    /// Bare values, one per line, for shell pipelines
    Quiet,
    /// One JSON object keyed by fact name
    Json,
}

/// Shown for a fact that did not resolve.
pub const UNSET: &str = "(unset)";

/// Renders facts according to the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing the resolution.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Render the requested facts as the text this mode prints to stdout.
    pub fn render(&self, facts: &[(FactName, Option<Value>)]) -> String {
        match self.mode {
            OutputMode::Normal => facts
                .iter()
                .map(|(name, value)| format!("{name} => {}\n", display_value(value.as_ref())))
                .collect(),
            OutputMode::Quiet => facts
                .iter()
                .map(|(_, value)| match value {
                    Some(v) => format!("{}\n", plain_value(v)),
                    None => "\n".to_string(),
                })
                .collect(),
            OutputMode::Json => {
                let map: serde_json::Map<String, Value> = facts
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.clone().unwrap_or(Value::Null)))
                    .collect();
                serde_json::to_string_pretty(&Value::Object(map))
                    .map(|s| s + "\n")
                    .unwrap_or_default()
            }
        }
    }

    /// Print the requested facts to stdout.
    pub fn facts(&self, facts: &[(FactName, Option<Value>)]) {
        print!("{}", self.render(facts));
        if self.mode == OutputMode::Normal && self.start_time.is_some() {
            eprintln!("resolved {} fact(s) in {:.1}s", facts.len(), self.elapsed_secs());
        }
    }

    /// Print a non-fatal warning to stderr (suppressed in quiet mode).
    pub fn warning(&self, warning: &Warning) {
        match self.mode {
            OutputMode::Normal => eprintln!("warning: {}: {}", warning.stage, warning.message),
            OutputMode::Quiet => {}
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "warning",
                    stage: warning.stage.to_string(),
                    message: &warning.message,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => plain_value(v),
        None => UNSET.to_string(),
    }
}

/// Strings print bare; structures print as compact JSON.
fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    stage: String,
    message: &'a str,
}
