//! Runtime for driving a chat widget
//!
//! The controller feeds events through the state machine and executes the
//! effects it returns against a [`ChatSurface`] and a [`Scheduler`].

mod controller;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use controller::{ConversationController, UiEvent, WidgetError};
pub use traits::*;

use crate::terminal::TerminalSurface;
use rand::rngs::StdRng;

/// Controller wired to the terminal surface and tokio timers
pub type TerminalController<W> = ConversationController<TerminalSurface<W>, TokioScheduler, StdRng>;
