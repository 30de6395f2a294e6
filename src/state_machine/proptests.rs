//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary sequences of
//! UI actions and timer firings.

use super::*;
use chrono::{DateTime, Local, TimeZone};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> ChatContext {
    ChatContext::builtin()
}

fn at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 2, 15, 4, 0).unwrap()
}

/// What a test driver can do next
#[derive(Debug, Clone)]
enum Action {
    Open,
    Close,
    Clear,
    Send(String),
    /// Fire the oldest outstanding timer, if any
    Tick,
}

/// Minimal driver: applies transitions and keeps armed timers in FIFO order
struct Driver {
    state: ConversationState,
    context: ChatContext,
    rng: StdRng,
    timers: VecDeque<Timer>,
}

impl Driver {
    fn new(seed: u64) -> Self {
        Self {
            state: ConversationState::default(),
            context: test_context(),
            rng: StdRng::seed_from_u64(seed),
            timers: VecDeque::new(),
        }
    }

    fn apply(&mut self, event: Event) -> Result<TransitionResult, TransitionError> {
        let result = transition(&self.state, &self.context, event, &mut self.rng)?;
        for effect in &result.effects {
            if let Effect::Schedule { timer, .. } = effect {
                self.timers.push_back(timer.clone());
            }
        }
        self.state = result.new_state.clone();
        Ok(result)
    }

    fn event_for(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::Open => Some(Event::Open),
            Action::Close => Some(Event::Close),
            Action::Clear => Some(Event::Clear),
            Action::Send(text) => Some(Event::UserMessage { text, at: at() }),
            Action::Tick => self.timers.pop_front().map(|t| t.into_event(at())),
        }
    }

    fn drain(&mut self) {
        while let Some(timer) = self.timers.pop_front() {
            let _ = self.apply(timer.into_event(at()));
        }
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("pune".to_string()),
        Just("pricing".to_string()),
        Just("What services do you offer?".to_string()),
        "[a-z ]{1,20}",
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Open),
        Just(Action::Close),
        Just(Action::Clear),
        arb_text().prop_map(Action::Send),
        Just(Action::Tick),
        Just(Action::Tick),
    ]
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(arb_action(), 0..30)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // History only grows, except on Clear
    #[test]
    fn prop_history_is_append_only(actions in arb_actions(), seed in any::<u64>()) {
        let mut driver = Driver::new(seed);
        for action in actions {
            let is_clear = matches!(action, Action::Clear);
            let Some(event) = driver.event_for(action) else { continue };
            let before = driver.state.history.clone();
            if driver.apply(event).is_ok() && !is_clear {
                let after = &driver.state.history;
                prop_assert!(after.len() >= before.len());
                prop_assert_eq!(&after[..before.len()], &before[..]);
                prop_assert!(after.len() - before.len() <= 1);
            }
        }
    }

    // Typing flag mirrors outstanding replies and is false at rest
    #[test]
    fn prop_typing_only_while_replies_pending(actions in arb_actions(), seed in any::<u64>()) {
        let mut driver = Driver::new(seed);
        for action in actions {
            if let Some(event) = driver.event_for(action) {
                let _ = driver.apply(event);
            }
            prop_assert_eq!(driver.state.is_typing, driver.state.pending_replies() > 0);
        }
        driver.drain();
        prop_assert!(!driver.state.is_typing);
        prop_assert_eq!(driver.state.phase, ReplyPhase::Idle);
    }

    // Each accepted submission yields one user message now and one bot message later
    #[test]
    fn prop_one_reply_per_submission(texts in proptest::collection::vec(arb_text(), 0..10)) {
        let mut driver = Driver::new(5);
        let mut accepted = 0usize;
        for text in texts {
            let before = driver.state.history.len();
            match driver.apply(Event::UserMessage { text: text.clone(), at: at() }) {
                Ok(_) => {
                    accepted += 1;
                    prop_assert_eq!(driver.state.history.len(), before + 1);
                    let last = driver.state.history.last().unwrap();
                    prop_assert_eq!(last.sender, Sender::User);
                    prop_assert_eq!(last.text.as_str(), text.trim());
                }
                Err(e) => {
                    prop_assert_eq!(e, TransitionError::EmptyMessage);
                    prop_assert!(text.trim().is_empty());
                    prop_assert_eq!(driver.state.history.len(), before);
                }
            }
        }
        driver.drain();
        let users = driver.state.history.iter().filter(|m| m.sender == Sender::User).count();
        let bots = driver.state.history.iter().filter(|m| m.sender == Sender::Bot).count();
        prop_assert_eq!(users, accepted);
        prop_assert_eq!(bots, accepted);
    }

    // Never more than one greeting timer outstanding
    #[test]
    fn prop_single_greeting_in_flight(actions in arb_actions(), seed in any::<u64>()) {
        let mut driver = Driver::new(seed);
        for action in actions {
            if let Some(event) = driver.event_for(action) {
                let _ = driver.apply(event);
            }
            let greetings = driver.timers.iter().filter(|t| matches!(t, Timer::Greeting)).count();
            prop_assert!(greetings <= 1);
            prop_assert_eq!(greetings == 1, driver.state.greeting_pending);
        }
    }

    // Clear followed by quiescence leaves exactly one welcome message
    #[test]
    fn prop_clear_greets_exactly_once(actions in arb_actions(), seed in any::<u64>()) {
        let mut driver = Driver::new(seed);
        for action in actions {
            if let Some(event) = driver.event_for(action) {
                let _ = driver.apply(event);
            }
        }
        driver.drain();

        driver.apply(Event::Clear).unwrap();
        prop_assert!(driver.state.history.is_empty());
        driver.drain();

        let welcome = &driver.context.config.welcome_message;
        prop_assert_eq!(driver.state.history.len(), 1);
        prop_assert_eq!(&driver.state.history[0].text, welcome);
        prop_assert!(driver.state.has_greeted);
    }

    // Open/close only toggle visibility
    #[test]
    fn prop_close_never_touches_history(actions in arb_actions(), seed in any::<u64>()) {
        let mut driver = Driver::new(seed);
        for action in actions {
            if let Some(event) = driver.event_for(action) {
                let _ = driver.apply(event);
            }
        }
        let before = driver.state.clone();
        let result = driver.apply(Event::Close).unwrap();
        prop_assert!(!driver.state.is_open);
        prop_assert_eq!(&driver.state.history, &before.history);
        prop_assert_eq!(driver.state.pending_replies(), before.pending_replies());
        prop_assert_eq!(result.effects, vec![Effect::SetWindowOpen(false)]);
    }
}
