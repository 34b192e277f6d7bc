// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Events are sent through a bounded channel by cheap [`DiagnosticsHandle`]s
//! and drained into a [`CircularBuffer`] by the owning
//! [`DiagnosticsCollector`]. Warnings and errors are echoed to stderr as they
//! are logged.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    AppStateEvent, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction,
    WarningEvent,
};
use crate::domain::gallery::EventCapacity;

/// Pending events allowed in the channel before new ones are dropped.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Sending never blocks: events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    /// Logs a warning and prints it to stderr.
    pub fn log_warning(&self, event: WarningEvent) {
        eprintln!("[warning:{}] {}", event.warning_type, event.message);
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error and prints it to stderr.
    pub fn log_error(&self, event: ErrorEvent) {
        eprintln!("[error:{}] {}", event.error_type, event.message);
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Owner of the in-memory activity log.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer.
    ///
    /// Call once per update so the channel never fills up.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of buffered warnings and errors.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.buffer
            .iter()
            .filter(|event| {
                matches!(
                    event.kind,
                    DiagnosticEventKind::Warning { .. } | DiagnosticEventKind::Error { .. }
                )
            })
            .count()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("buffered", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}
