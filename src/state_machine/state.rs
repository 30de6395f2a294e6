//! Conversation state types

use crate::config::WidgetConfig;
use crate::knowledge::KnowledgeBase;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Messages
// ============================================================================

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// One chat bubble. Bot text may carry `<br>`/`<strong>` markup; user text
/// is plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    /// Creation time as `hh:mm AM`
    pub timestamp: String,
}

impl Message {
    pub fn user<Tz: TimeZone>(text: impl Into<String>, at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: format_timestamp(at),
        }
    }

    pub fn bot<Tz: TimeZone>(text: impl Into<String>, at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: format_timestamp(at),
        }
    }
}

/// 12-hour clock with zero-padded hour, e.g. `09:05 PM`
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%I:%M %p").to_string()
}

// ============================================================================
// Conversation State
// ============================================================================

/// Reply pipeline phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyPhase {
    /// No reply outstanding
    #[default]
    Idle,
    /// Replies scheduled and not yet delivered
    Typing { pending: u32 },
}

/// Everything the presentation layer renders, plus bookkeeping for
/// outstanding timers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConversationState {
    pub is_open: bool,
    /// Append-only, chronological; emptied only by clear
    pub history: Vec<Message>,
    pub is_typing: bool,
    pub has_greeted: bool,
    pub phase: ReplyPhase,
    /// A greeting timer is outstanding
    #[serde(default)]
    pub greeting_pending: bool,
    /// Id handed to the next scheduled reply
    #[serde(default)]
    pub next_turn: u64,
}

impl ConversationState {
    pub fn pending_replies(&self) -> u32 {
        match self.phase {
            ReplyPhase::Idle => 0,
            ReplyPhase::Typing { pending } => pending,
        }
    }

    /// Check if a reply is still owed to the user
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, ReplyPhase::Typing { .. })
    }
}

/// Immutable inputs shared by every transition of one widget
#[derive(Debug, Clone)]
pub struct ChatContext {
    pub knowledge: Arc<KnowledgeBase>,
    pub config: WidgetConfig,
}

impl ChatContext {
    pub fn new(knowledge: Arc<KnowledgeBase>, config: WidgetConfig) -> Self {
        Self { knowledge, config }
    }

    /// Built-in catalog with default settings
    #[cfg(test)]
    pub fn builtin() -> Self {
        let knowledge = KnowledgeBase::builtin().expect("builtin catalog");
        Self::new(Arc::new(knowledge), WidgetConfig::default())
    }
}
