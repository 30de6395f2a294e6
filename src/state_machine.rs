//! Core conversation state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::{Event, Timer};
pub use state::{format_timestamp, ChatContext, ConversationState, Message, ReplyPhase, Sender};
pub use transition::{fallback_text, transition, TransitionError, TransitionResult};
