//! Write-only diagnostics channel for non-fatal recoveries.

use std::fmt;

/// A single non-fatal event recorded during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Short machine-readable tag, e.g. `"depends"`, `"compressed"`.
    pub tag: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tag, self.message)
    }
}

/// Collects non-fatal diagnostics raised while a package loads or saves.
///
/// Parsing code only ever pushes to it, but the caller can read it back after `load()`/
/// `save()` returns. Every push is additionally emitted through the `log` crate at `warn!`
/// level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    events: Vec<DiagnosticEvent>,
}

impl Diagnostics {
    /// Create an empty diagnostics channel.
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Record a non-fatal event.
    pub fn push(&mut self, tag: &'static str, message: impl Into<String>) {
        let message = message.into();
        log::warn!("[{tag}] {message}");
        self.events.push(DiagnosticEvent { tag, message });
    }

    /// All events recorded so far, in order.
    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }

    /// `true` if no events were recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
