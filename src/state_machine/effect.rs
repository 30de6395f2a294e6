//! Effects produced by state transitions

use super::event::Timer;
use super::state::Message;
use std::time::Duration;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Render a message that was appended to history
    AppendMessage(Message),

    /// Show or hide the chat window
    SetWindowOpen(bool),

    ShowTyping,
    HideTyping,

    /// Replace the visible quick replies
    RenderQuickReplies(Vec<String>),
    ClearQuickReplies,

    /// Drop every rendered message
    ClearMessages,

    /// Empty the input field
    ClearInput,

    /// Arm a timer; the runtime dispatches it back as an event
    Schedule { delay: Duration, timer: Timer },
}

impl Effect {
    pub fn schedule_reply(delay: Duration, turn: u64, text: impl Into<String>) -> Self {
        Effect::Schedule {
            delay,
            timer: Timer::Reply {
                turn,
                text: text.into(),
            },
        }
    }

    pub fn schedule_greeting(delay: Duration) -> Self {
        Effect::Schedule {
            delay,
            timer: Timer::Greeting,
        }
    }
}
