//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never talks to Zellij or the
//! worker directly; it returns `Action`s and the plugin shim executes them in
//! order.

use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hide the plugin pane.
    CloseFocus,

    /// Send a request to the background worker.
    PostToWorker(WorkerMessage),

    /// Arm a one-shot timer. It comes back as
    /// [`Event::Timer`](crate::app::Event::Timer) carrying the same duration.
    SetTimeout { millis: u64 },
}
