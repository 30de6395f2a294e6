//! S&N Assistant - FAQ chat widget
//!
//! Keyword-scored FAQ matching behind a conversation state machine, served
//! through a terminal front end.

mod config;
mod knowledge;
mod matching;
mod runtime;
mod state_machine;
mod suggest;
mod terminal;

use config::WidgetConfig;
use knowledge::KnowledgeBase;
use rand::rngs::StdRng;
use rand::SeedableRng;
use runtime::{ConversationController, TerminalController, TokioScheduler, UiEvent};
use state_machine::ChatContext;
use std::io;
use std::sync::Arc;
use terminal::{confirms, Command, TerminalSurface};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they stay out of the transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faq_chat=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(io::stderr),
        )
        .init();

    let config = WidgetConfig::from_env();
    let rng = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded suggestion sampling");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let knowledge = Arc::new(KnowledgeBase::builtin()?);
    let surface = TerminalSurface::new(io::stdout(), &config);
    let context = ChatContext::new(knowledge, config);
    let (scheduler, mut timers) = TokioScheduler::spawn();

    let mut controller: TerminalController<io::Stdout> =
        match ConversationController::mount(context, surface, scheduler, rng) {
            Ok(controller) => controller,
            Err(e) => {
                tracing::error!(error = %e, "Chat widget not mounted");
                return Ok(());
            }
        };

    controller.surface_mut().print_help();
    controller.open_conversation();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut confirming_clear = false;

    loop {
        tokio::select! {
            Some(timer) = timers.recv() => controller.fire(timer),
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                if std::mem::take(&mut confirming_clear) {
                    if confirms(&line) {
                        controller.handle_ui_event(UiEvent::ClearRequested);
                    }
                    continue;
                }

                match controller.surface().parse(&line) {
                    Command::Ui(event) => controller.handle_ui_event(event),
                    Command::Type(text) => {
                        controller.surface_mut().set_input(text);
                        controller.handle_ui_event(UiEvent::SendRequested);
                    }
                    Command::Closed => controller
                        .surface_mut()
                        .notice("The chat is closed. Type /open to start chatting."),
                    Command::ConfirmClear => {
                        controller
                            .surface_mut()
                            .notice("Are you sure you want to clear the chat history? [y/N]");
                        confirming_clear = true;
                    }
                    Command::History => {
                        let json = serde_json::to_string_pretty(controller.state())?;
                        controller.surface_mut().notice(&json);
                    }
                    Command::Help => controller.surface_mut().print_help(),
                    Command::Quit => break,
                }
            }
        }
    }

    tracing::info!(
        messages = controller.state().history.len(),
        "Chat session ended"
    );
    Ok(())
}
