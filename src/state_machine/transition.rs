//! Pure state transition function
//!
//! Given the same state, context, event and random source, a transition
//! always yields the same new state and effects. Rendering and timers are
//! left to the runtime through [`Effect`]s.

use super::state::{ChatContext, ConversationState, Message, ReplyPhase};
use super::{Effect, Event};
use crate::matching::find_best_match;
use crate::suggest::random_suggestions;
use rand::Rng;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConversationState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConversationState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Reply for turn {turn} arrived with no reply pending")]
    UnexpectedReply { turn: u64 },
}

/// Pure transition function
pub fn transition<R: Rng + ?Sized>(
    state: &ConversationState,
    context: &ChatContext,
    event: Event,
    rng: &mut R,
) -> Result<TransitionResult, TransitionError> {
    let mut next = state.clone();

    match event {
        // ============================================================
        // Lifecycle
        // ============================================================
        Event::Open => {
            next.is_open = true;
            let greeting = arm_greeting(&mut next, context);
            Ok(TransitionResult::new(next)
                .with_effect(Effect::SetWindowOpen(true))
                .with_effects(greeting))
        }

        // Pending replies and greetings are not cancelled
        Event::Close => {
            next.is_open = false;
            Ok(TransitionResult::new(next).with_effect(Effect::SetWindowOpen(false)))
        }

        Event::Clear => {
            next.history.clear();
            next.has_greeted = false;
            let greeting = arm_greeting(&mut next, context);
            let mut result = TransitionResult::new(next)
                .with_effect(Effect::ClearMessages)
                .with_effect(Effect::ClearQuickReplies);
            // The indicator lives among the rendered messages
            if state.is_busy() {
                result = result.with_effect(Effect::ShowTyping);
            }
            Ok(result.with_effects(greeting))
        }

        // ============================================================
        // User input
        // ============================================================
        Event::UserMessage { text, at } => {
            let text = text.trim();
            if text.is_empty() {
                return Err(TransitionError::EmptyMessage);
            }

            let message = Message::user(text, &at);
            next.history.push(message.clone());

            let turn = next.next_turn;
            next.next_turn += 1;
            next.phase = ReplyPhase::Typing {
                pending: state.pending_replies() + 1,
            };
            next.is_typing = true;

            let mut result = TransitionResult::new(next)
                .with_effect(Effect::AppendMessage(message))
                .with_effect(Effect::ClearInput)
                .with_effect(Effect::ClearQuickReplies);
            if !state.is_busy() {
                result = result.with_effect(Effect::ShowTyping);
            }
            Ok(result.with_effect(Effect::schedule_reply(
                context.config.typing_delay,
                turn,
                text,
            )))
        }

        // ============================================================
        // Timers
        // ============================================================
        Event::ReplyDue { turn, text, at } => {
            let pending = state.pending_replies();
            if pending == 0 {
                return Err(TransitionError::UnexpectedReply { turn });
            }

            let mut result = if pending == 1 {
                next.phase = ReplyPhase::Idle;
                next.is_typing = false;
                TransitionResult::new(next).with_effect(Effect::HideTyping)
            } else {
                next.phase = ReplyPhase::Typing {
                    pending: pending - 1,
                };
                TransitionResult::new(next)
            };

            let found = find_best_match(&text, context.knowledge.entries());
            tracing::debug!(
                turn,
                matched = found.is_some(),
                score = found.as_ref().map_or(0, |m| m.score),
                "Resolving reply"
            );

            if let Some(found) = found {
                let reply = Message::bot(found.entry.answer(), &at);
                result.new_state.history.push(reply.clone());
                result = result.with_effect(Effect::AppendMessage(reply));
            } else {
                let suggestions = random_suggestions(
                    &context.knowledge,
                    context.config.suggestion_count,
                    rng,
                );
                let reply = Message::bot(
                    fallback_text(&context.config.fallback_message, &suggestions),
                    &at,
                );
                result.new_state.history.push(reply.clone());
                result = result
                    .with_effect(Effect::AppendMessage(reply))
                    .with_effect(Effect::RenderQuickReplies(suggestions));
            }

            Ok(result)
        }

        Event::GreetingDue { at } => {
            next.greeting_pending = false;
            if state.has_greeted {
                return Ok(TransitionResult::new(next));
            }

            let welcome = Message::bot(context.config.welcome_message.as_str(), &at);
            next.history.push(welcome.clone());
            next.has_greeted = true;
            Ok(TransitionResult::new(next)
                .with_effect(Effect::AppendMessage(welcome))
                .with_effect(Effect::RenderQuickReplies(
                    context.config.quick_replies.clone(),
                )))
        }
    }
}

/// Schedule the greeting unless one is already owed or given
fn arm_greeting(state: &mut ConversationState, context: &ChatContext) -> Option<Effect> {
    if state.has_greeted || state.greeting_pending {
        return None;
    }
    state.greeting_pending = true;
    Some(Effect::schedule_greeting(context.config.greeting_delay))
}

/// Fallback reply: lead-in, blank line, then one bullet per suggestion
pub fn fallback_text(lead: &str, suggestions: &[String]) -> String {
    let mut text = format!("{lead}<br><br>");
    for suggestion in suggestions {
        text.push_str("• ");
        text.push_str(suggestion);
        text.push_str("<br>");
    }
    text
}
