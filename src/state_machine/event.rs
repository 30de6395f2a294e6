//! Events that can occur in a conversation

use chrono::{DateTime, Local};

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Lifecycle events
    Open,
    Close,
    Clear,

    // User events
    UserMessage {
        text: String,
        at: DateTime<Local>,
    },

    // Timer events
    ReplyDue {
        turn: u64,
        text: String,
        at: DateTime<Local>,
    },
    GreetingDue {
        at: DateTime<Local>,
    },
}

/// Work deferred through the scheduler; fed back as an [`Event`] when due
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    Reply { turn: u64, text: String },
    Greeting,
}

impl Timer {
    /// Convert a fired timer into the event it stands for
    pub fn into_event(self, at: DateTime<Local>) -> Event {
        match self {
            Timer::Reply { turn, text } => Event::ReplyDue { turn, text, at },
            Timer::Greeting => Event::GreetingDue { at },
        }
    }
}
