//! User-facing diagnostics for soft lookup failures.
//!
//! A name that cannot be resolved is not an error: the caller gets `None` and
//! the user gets a message. Messages go through an injected [`DiagnosticSink`]
//! so the binary can print them and tests can record them.

use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A message meant for the person running a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The search returned no candidate whose title matches the name exactly.
    GameNotFound { name: String, candidates: usize },
    /// A batch row was skipped.
    GameNotAdded { name: String },
}

impl Diagnostic {
    /// The game name the diagnostic refers to.
    pub fn name(&self) -> &str {
        match self {
            Diagnostic::GameNotFound { name, .. } | Diagnostic::GameNotAdded { name } => {
                name.as_str()
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::GameNotFound {
                name,
                candidates: 0,
            } => write!(
                f,
                "{} is either the wrong name or it is not on BoardGameGeek \
                 (no search results). \
                 Make sure it exactly matches the BoardGameGeek name",
                name
            ),
            Diagnostic::GameNotFound { name, candidates } => write!(
                f,
                "{} is either the wrong name or it is not on BoardGameGeek \
                 ({} search results, none an exact match). \
                 Make sure it exactly matches the BoardGameGeek name",
                name, candidates
            ),
            Diagnostic::GameNotAdded { name } => write!(f, "Could not add game: {}", name),
        }
    }
}

/// Destination for diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Writes diagnostics to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        debug!(name = diagnostic.name(), "Diagnostic emitted");
        eprintln!("{}", diagnostic);
    }
}

/// Keeps every emitted diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    recorded: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.recorded.lock() {
            Ok(recorded) => recorded.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Display text of everything emitted so far.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics().iter().map(ToString::to_string).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match self.recorded.lock() {
            Ok(mut recorded) => recorded.push(diagnostic.clone()),
            Err(poisoned) => poisoned.into_inner().push(diagnostic.clone()),
        }
    }
}
