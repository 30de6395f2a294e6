//! Terminal presentation adapter
//!
//! Renders the conversation as plain text lines and turns typed input into
//! UI events. Bot markup is flattened: `<br>` becomes a newline and other
//! tags are dropped.

use crate::config::WidgetConfig;
use crate::runtime::{ChatSurface, UiEvent};
use crate::state_machine::{Message, Sender};
use regex::Regex;
use std::io::{self, Write};
use std::sync::OnceLock;

fn line_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("static regex: line break"))
}

fn any_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("static regex: tag"))
}

/// Flatten widget markup to terminal text
pub fn render_markup(text: &str) -> String {
    let with_breaks = line_break().replace_all(text, "\n");
    any_tag().replace_all(&with_breaks, "").into_owned()
}

/// What a typed line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    /// Plain text for the input field
    Type(String),
    /// `/clear`, pending a y/N answer
    ConfirmClear,
    /// Chat input while the window is closed
    Closed,
    History,
    Help,
    Quit,
}

/// Interpret one line of terminal input.
///
/// A bare number picks the matching quick reply currently on screen.
pub fn parse_command(line: &str, quick_replies: &[String]) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "/open" => return Command::Ui(UiEvent::Open),
        "/close" => return Command::Ui(UiEvent::Close),
        "/esc" => return Command::Ui(UiEvent::Dismiss),
        "/clear" => return Command::ConfirmClear,
        "/history" => return Command::History,
        "/help" => return Command::Help,
        "/quit" | "/exit" => return Command::Quit,
        _ => {}
    }

    if let Ok(n) = trimmed.parse::<usize>() {
        if let Some(question) = n.checked_sub(1).and_then(|i| quick_replies.get(i)) {
            return Command::Ui(UiEvent::QuickReplySelected(question.clone()));
        }
    }

    Command::Type(line.to_string())
}

/// Answer to the clear confirmation prompt; anything but yes declines
pub fn confirms(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Chat surface writing to any `Write` sink.
///
/// While the window is closed, messages and quick replies are kept and
/// shown on the next open, the way a hidden panel keeps its contents.
pub struct TerminalSurface<W: Write> {
    out: W,
    bot_name: String,
    bot_status: String,
    open: bool,
    unseen: Vec<Message>,
    quick_replies: Vec<String>,
    input: String,
    typing: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, config: &WidgetConfig) -> Self {
        Self {
            out,
            bot_name: config.bot_name.clone(),
            bot_status: config.bot_status.clone(),
            open: false,
            unseen: Vec::new(),
            quick_replies: Vec::new(),
            input: String::new(),
            typing: false,
        }
    }

    /// Put typed text into the input field
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Interpret a typed line against the quick replies on screen.
    ///
    /// Chat input is refused while the window is closed, as the input field
    /// is hidden along with it.
    pub fn parse(&self, line: &str) -> Command {
        match parse_command(line, &self.quick_replies) {
            Command::Type(_) | Command::Ui(UiEvent::QuickReplySelected(_)) if !self.open => {
                Command::Closed
            }
            command => command,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_help(&mut self) {
        let text = "Type a question and press Enter.\n\
            \x20 <n>        pick quick reply n\n\
            \x20 /open      open the chat\n\
            \x20 /close     close the chat\n\
            \x20 /esc       close the chat if it is open\n\
            \x20 /clear     clear the conversation\n\
            \x20 /history   dump the transcript as JSON\n\
            \x20 /quit      exit";
        self.emit(|out| writeln!(out, "{text}"));
    }

    /// Print a free-form line outside the transcript
    pub fn notice(&mut self, text: &str) {
        self.emit(|out| writeln!(out, "{text}"));
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        let result = write(&mut self.out).and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn print_message(&mut self, message: &Message) {
        let who = match message.sender {
            Sender::User => "You".to_string(),
            Sender::Bot => self.bot_name.clone(),
        };
        // User text is shown as typed; only bot replies carry markup
        let body = match message.sender {
            Sender::User => message.text.clone(),
            Sender::Bot => render_markup(&message.text),
        };
        let stamp = message.timestamp.clone();
        self.emit(|out| {
            let mut lines = body.lines();
            writeln!(out, "[{stamp}] {who}: {}", lines.next().unwrap_or_default())?;
            for line in lines {
                writeln!(out, "    {line}")?;
            }
            Ok(())
        });
    }

    fn print_typing(&mut self) {
        let name = self.bot_name.clone();
        self.emit(|out| writeln!(out, "{name} is typing..."));
    }

    fn print_quick_replies(&mut self) {
        if self.quick_replies.is_empty() {
            return;
        }
        let replies = self.quick_replies.clone();
        self.emit(|out| {
            for (i, reply) in replies.iter().enumerate() {
                writeln!(out, "  [{}] {reply}", i + 1)?;
            }
            Ok(())
        });
    }
}

impl<W: Write> ChatSurface for TerminalSurface<W> {
    fn append_message(&mut self, message: &Message) {
        if self.open {
            self.print_message(message);
        } else {
            self.unseen.push(message.clone());
        }
    }

    fn show_typing_indicator(&mut self) {
        self.typing = true;
        if self.open {
            self.print_typing();
        }
    }

    fn hide_typing_indicator(&mut self) {
        self.typing = false;
    }

    fn render_quick_replies(&mut self, replies: &[String]) {
        self.quick_replies = replies.to_vec();
        if self.open {
            self.print_quick_replies();
        }
    }

    fn clear_quick_replies(&mut self) {
        self.quick_replies.clear();
    }

    fn clear_rendered_messages(&mut self) {
        self.unseen.clear();
        if self.open {
            self.emit(|out| writeln!(out, "-- conversation cleared --"));
        }
    }

    fn set_window_open(&mut self, open: bool) {
        if open == self.open {
            return;
        }
        self.open = open;

        if !open {
            self.emit(|out| writeln!(out, "-- chat closed (/open to reopen) --"));
            return;
        }

        let (name, status) = (self.bot_name.clone(), self.bot_status.clone());
        self.emit(|out| writeln!(out, "== {name} | {status} =="));
        for message in std::mem::take(&mut self.unseen) {
            self.print_message(&message);
        }
        self.print_quick_replies();
        if self.typing {
            self.print_typing();
        }
    }

    fn current_input_text(&self) -> String {
        self.input.clone()
    }

    fn clear_input_text(&mut self) {
        self.input.clear();
    }
}
