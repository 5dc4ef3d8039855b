//! Action scripts
//!
//! A script is a JSON-lines text: one action record per line, e.g.
//! `{"type": "ADD_COUNTER", "value": 10}`. Blank lines and lines starting
//! with `#` are skipped.

use std::io::BufRead;

use thiserror::Error;

use crate::actions::AppAction;

/// Built-in walkthrough replayed by `--basics`
pub const BASICS_SCRIPT: &str = r#"# counter walkthrough
{"type": "INC_COUNTER"}
{"type": "DO_NOTHING"}
{"type": "ADD_COUNTER", "value": 10}
# result list walkthrough
{"type": "STORE_RESULT", "result": 11}
{"type": "DELETE_RESULT", "id": 0}
"#;

/// Errors that can occur while reading a script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid action on line {line}: {source}")]
    InvalidAction {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse every action of a script
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<AppAction>, ScriptError> {
    let mut actions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action = serde_json::from_str(trimmed).map_err(|source| ScriptError::InvalidAction {
            line: index + 1,
            source,
        })?;
        actions.push(action);
    }

    log::debug!("Parsed {} actions", actions.len());
    Ok(actions)
}
