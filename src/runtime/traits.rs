//! Trait abstractions for runtime I/O
//!
//! These traits let the controller run against a real UI and real timers,
//! or against the recording doubles in `testing`.

use crate::state_machine::{Message, Timer};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Parts of the UI the widget cannot run without
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceElement {
    OpenButton,
    CloseButton,
    ClearButton,
    SendButton,
    InputField,
    MessageList,
    QuickReplies,
}

impl fmt::Display for SurfaceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceElement::OpenButton => "open button",
            SurfaceElement::CloseButton => "close button",
            SurfaceElement::ClearButton => "clear button",
            SurfaceElement::SendButton => "send button",
            SurfaceElement::InputField => "input field",
            SurfaceElement::MessageList => "message list",
            SurfaceElement::QuickReplies => "quick replies",
        };
        f.write_str(name)
    }
}

/// Rendering surface the widget draws into
pub trait ChatSurface {
    /// Required elements that are absent; checked once at mount
    fn missing_elements(&self) -> Vec<SurfaceElement> {
        Vec::new()
    }

    fn append_message(&mut self, message: &Message);

    fn show_typing_indicator(&mut self);

    fn hide_typing_indicator(&mut self);

    fn render_quick_replies(&mut self, replies: &[String]);

    fn clear_quick_replies(&mut self);

    fn clear_rendered_messages(&mut self);

    fn set_window_open(&mut self, open: bool);

    /// Text currently typed into the input field
    fn current_input_text(&self) -> String;

    fn clear_input_text(&mut self);
}

/// Clock and deferred callbacks
pub trait Scheduler {
    /// Wall-clock time used for message timestamps
    fn now(&self) -> DateTime<Local>;

    /// Deliver `timer` back to the controller after `delay`.
    ///
    /// Timers due at the same instant fire in the order they were armed.
    fn schedule(&self, delay: Duration, timer: Timer);
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Scheduler backed by the tokio timer wheel.
///
/// A single driver task owns every armed timer, keyed by deadline and arm
/// order, and forwards them on a channel the event loop selects on.
pub struct TokioScheduler {
    arm_tx: mpsc::UnboundedSender<(Instant, Timer)>,
}

impl TokioScheduler {
    /// Start the driver task. Must be called inside a tokio runtime.
    pub fn spawn() -> (Self, mpsc::UnboundedReceiver<Timer>) {
        let (arm_tx, mut arm_rx) = mpsc::unbounded_channel::<(Instant, Timer)>();
        let (fire_tx, fire_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut armed: BTreeMap<(Instant, u64), Timer> = BTreeMap::new();
            let mut seq = 0u64;

            loop {
                let next_deadline = armed.keys().next().map(|(deadline, _)| *deadline);
                tokio::select! {
                    request = arm_rx.recv() => {
                        let Some((deadline, timer)) = request else { break };
                        armed.insert((deadline, seq), timer);
                        seq += 1;
                    }
                    () = wait_until(next_deadline) => {
                        let now = Instant::now();
                        while let Some(entry) = armed.first_entry() {
                            if entry.key().0 > now {
                                break;
                            }
                            if fire_tx.send(entry.remove()).is_err() {
                                tracing::debug!("Timer receiver dropped, stopping scheduler");
                                return;
                            }
                        }
                    }
                }
            }
            tracing::debug!(dropped = armed.len(), "Scheduler stopped");
        });

        (Self { arm_tx }, fire_rx)
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn schedule(&self, delay: Duration, timer: Timer) {
        if self.arm_tx.send((Instant::now() + delay, timer)).is_err() {
            tracing::warn!("Scheduler task is gone; timer dropped");
        }
    }
}
