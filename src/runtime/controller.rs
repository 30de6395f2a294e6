//! Conversation controller
//!
//! Owns one conversation state, runs every event through the pure
//! transition function and executes the resulting effects against the
//! injected surface and scheduler.

use super::traits::{ChatSurface, Scheduler, SurfaceElement};
use crate::state_machine::{
    transition, ChatContext, ConversationState, Effect, Event, Timer, TransitionError,
};
use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;

/// Widget could not be mounted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("required UI elements not found: {}", list(.0))]
    MissingElements(Vec<SurfaceElement>),
}

fn list(elements: &[SurfaceElement]) -> String {
    elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Events raised by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Open,
    Close,
    /// Clear confirmed by the user
    ClearRequested,
    /// Send button or Enter; the text is read from the input field
    SendRequested,
    QuickReplySelected(String),
    /// Escape key: closes only when open
    Dismiss,
}

/// Single-widget controller, generic over its I/O
pub struct ConversationController<S, T, R = StdRng>
where
    S: ChatSurface,
    T: Scheduler,
    R: Rng,
{
    context: ChatContext,
    state: ConversationState,
    surface: S,
    scheduler: T,
    rng: R,
}

impl<S, T, R> ConversationController<S, T, R>
where
    S: ChatSurface,
    T: Scheduler,
    R: Rng,
{
    /// Attach to a surface, refusing one that lacks required elements
    pub fn mount(
        context: ChatContext,
        surface: S,
        scheduler: T,
        rng: R,
    ) -> Result<Self, WidgetError> {
        let missing = surface.missing_elements();
        if !missing.is_empty() {
            return Err(WidgetError::MissingElements(missing));
        }

        tracing::info!(
            bot = %context.config.bot_name,
            entries = context.knowledge.len(),
            "Chat widget initialized"
        );

        Ok(Self {
            context,
            state: ConversationState::default(),
            surface,
            scheduler,
            rng,
        })
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    #[cfg(test)]
    pub fn context(&self) -> &ChatContext {
        &self.context
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn open_conversation(&mut self) {
        self.dispatch_infallible(Event::Open);
    }

    pub fn close_conversation(&mut self) {
        self.dispatch_infallible(Event::Close);
    }

    pub fn clear_conversation(&mut self) {
        self.dispatch_infallible(Event::Clear);
    }

    /// Submit text as the user. Blank text is rejected without side effects.
    pub fn handle_user_message(&mut self, text: &str) -> Result<(), TransitionError> {
        let at = self.scheduler.now();
        self.dispatch(Event::UserMessage {
            text: text.to_string(),
            at,
        })
    }

    /// Translate a UI event into a controller call
    pub fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Open => self.open_conversation(),
            UiEvent::Close => self.close_conversation(),
            UiEvent::ClearRequested => self.clear_conversation(),
            UiEvent::SendRequested => {
                let text = self.surface.current_input_text();
                self.submit(&text);
            }
            UiEvent::QuickReplySelected(text) => self.submit(&text),
            UiEvent::Dismiss => {
                if self.state.is_open {
                    self.close_conversation();
                }
            }
        }
    }

    /// Deliver a timer armed through the scheduler
    pub fn fire(&mut self, timer: Timer) {
        let at = self.scheduler.now();
        if let Err(e) = self.dispatch(timer.into_event(at)) {
            tracing::warn!(error = %e, "Dropping timer");
        }
    }

    fn submit(&mut self, text: &str) {
        match self.handle_user_message(text) {
            Ok(()) => {}
            Err(TransitionError::EmptyMessage) => tracing::debug!("Ignoring empty submission"),
            Err(e) => tracing::warn!(error = %e, "Submission rejected"),
        }
    }

    fn dispatch_infallible(&mut self, event: Event) {
        if let Err(e) = self.dispatch(event) {
            tracing::error!(error = %e, "Lifecycle transition failed");
        }
    }

    fn dispatch(&mut self, event: Event) -> Result<(), TransitionError> {
        let result = transition(&self.state, &self.context, event, &mut self.rng)?;
        self.state = result.new_state;

        tracing::debug!(
            history = self.state.history.len(),
            pending = self.state.pending_replies(),
            open = self.state.is_open,
            "State updated"
        );

        for effect in result.effects {
            self.execute_effect(effect);
        }
        Ok(())
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AppendMessage(message) => self.surface.append_message(&message),
            Effect::SetWindowOpen(open) => self.surface.set_window_open(open),
            Effect::ShowTyping => self.surface.show_typing_indicator(),
            Effect::HideTyping => self.surface.hide_typing_indicator(),
            Effect::RenderQuickReplies(replies) => self.surface.render_quick_replies(&replies),
            Effect::ClearQuickReplies => self.surface.clear_quick_replies(),
            Effect::ClearMessages => self.surface.clear_rendered_messages(),
            Effect::ClearInput => self.surface.clear_input_text(),
            Effect::Schedule { delay, timer } => {
                if let Timer::Reply { turn, .. } = &timer {
                    tracing::info!(turn, delay = ?delay, "Reply scheduled");
                }
                self.scheduler.schedule(delay, timer);
            }
        }
    }
}
