//! Test doubles for the runtime traits
//!
//! These let controller tests run synchronously against virtual time.

use super::controller::ConversationController;
use super::traits::{ChatSurface, Scheduler, SurfaceElement};
use crate::state_machine::{Message, Timer};
use chrono::{DateTime, Local, TimeZone};
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::time::Duration;

// ============================================================================
// Recording Surface
// ============================================================================

/// Every call the controller made on a surface, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Append(Message),
    ShowTyping,
    HideTyping,
    RenderQuickReplies(Vec<String>),
    ClearQuickReplies,
    ClearMessages,
    SetWindowOpen(bool),
    ClearInput,
}

/// Surface that keeps what it was told to render
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub messages: Vec<Message>,
    pub quick_replies: Vec<String>,
    pub typing_visible: bool,
    pub window_open: bool,
    pub input: String,
    pub missing: Vec<SurfaceElement>,
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend `element` is absent from the page
    pub fn without(mut self, element: SurfaceElement) -> Self {
        self.missing.push(element);
        self
    }
}

impl ChatSurface for RecordingSurface {
    fn missing_elements(&self) -> Vec<SurfaceElement> {
        self.missing.clone()
    }

    fn append_message(&mut self, message: &Message) {
        self.messages.push(message.clone());
        self.calls.push(SurfaceCall::Append(message.clone()));
    }

    fn show_typing_indicator(&mut self) {
        self.typing_visible = true;
        self.calls.push(SurfaceCall::ShowTyping);
    }

    fn hide_typing_indicator(&mut self) {
        self.typing_visible = false;
        self.calls.push(SurfaceCall::HideTyping);
    }

    fn render_quick_replies(&mut self, replies: &[String]) {
        self.quick_replies = replies.to_vec();
        self.calls.push(SurfaceCall::RenderQuickReplies(replies.to_vec()));
    }

    fn clear_quick_replies(&mut self) {
        self.quick_replies.clear();
        self.calls.push(SurfaceCall::ClearQuickReplies);
    }

    fn clear_rendered_messages(&mut self) {
        self.messages.clear();
        self.calls.push(SurfaceCall::ClearMessages);
    }

    fn set_window_open(&mut self, open: bool) {
        self.window_open = open;
        self.calls.push(SurfaceCall::SetWindowOpen(open));
    }

    fn current_input_text(&self) -> String {
        self.input.clone()
    }

    fn clear_input_text(&mut self) {
        self.input.clear();
        self.calls.push(SurfaceCall::ClearInput);
    }
}

// ============================================================================
// Manual Scheduler
// ============================================================================

/// Virtual clock starting at 09:00 local time. Nothing fires until the
/// test advances it.
pub struct ManualScheduler {
    base: DateTime<Local>,
    elapsed: Cell<Duration>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<(Duration, u64, Timer)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        let base = Local
            .with_ymd_and_hms(2024, 6, 3, 9, 0, 0)
            .single()
            .expect("unambiguous local time");
        Self {
            base,
            elapsed: Cell::new(Duration::ZERO),
            next_seq: Cell::new(0),
            queue: RefCell::new(Vec::new()),
        }
    }

    /// Timers not yet fired
    pub fn armed(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Remove the earliest timer due at or before `deadline` and move the
    /// clock to its due time
    fn pop_due(&self, deadline: Duration) -> Option<Timer> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= deadline)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(i, _)| i)?;
        let (due, _, timer) = queue.remove(index);
        self.elapsed.set(due);
        Some(timer)
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> DateTime<Local> {
        let elapsed = chrono::Duration::from_std(self.elapsed.get()).unwrap_or_default();
        self.base + elapsed
    }

    fn schedule(&self, delay: Duration, timer: Timer) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue
            .borrow_mut()
            .push((self.elapsed.get() + delay, seq, timer));
    }
}

impl<R: Rng> ConversationController<RecordingSurface, ManualScheduler, R> {
    /// Move virtual time forward, firing each timer at its own due time.
    /// Timers armed while firing run too if they fall inside the window.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler().elapsed.get() + by;
        while let Some(timer) = self.scheduler().pop_due(deadline) {
            self.fire(timer);
        }
        self.scheduler().elapsed.set(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_orders_by_due_then_arm_order() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(500), Timer::Greeting);
        scheduler.schedule(
            Duration::from_millis(100),
            Timer::Reply { turn: 0, text: "a".into() },
        );
        scheduler.schedule(
            Duration::from_millis(100),
            Timer::Reply { turn: 1, text: "b".into() },
        );

        let deadline = Duration::from_secs(1);
        let mut fired = Vec::new();
        while let Some(timer) = scheduler.pop_due(deadline) {
            fired.push(timer);
        }
        assert_eq!(
            fired,
            vec![
                Timer::Reply { turn: 0, text: "a".into() },
                Timer::Reply { turn: 1, text: "b".into() },
                Timer::Greeting,
            ]
        );
        assert_eq!(scheduler.elapsed.get(), Duration::from_millis(500));
    }

    #[test]
    fn manual_scheduler_holds_future_timers() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_secs(2), Timer::Greeting);
        assert!(scheduler.pop_due(Duration::from_secs(1)).is_none());
        assert_eq!(scheduler.armed(), 1);
    }
}
