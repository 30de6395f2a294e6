//! Widget configuration
//!
//! Defaults reproduce the production site; a few knobs can be overridden
//! from the environment for local runs and demos.

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(1000);
const DEFAULT_GREETING_DELAY: Duration = Duration::from_millis(500);
const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// An environment override that could not be parsed
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value {value:?} for {var}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Static presentation and timing settings for one widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub bot_name: String,
    pub bot_status: String,
    pub welcome_message: String,
    pub fallback_message: String,
    /// Simulated latency between a user message and the bot reply
    pub typing_delay: Duration,
    /// Delay before the greeting appears after opening
    pub greeting_delay: Duration,
    /// Quick replies offered with the greeting
    pub quick_replies: Vec<String>,
    /// Number of random questions offered on a fallback reply
    pub suggestion_count: usize,
    /// Seed for suggestion sampling; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            bot_name: "S&N Assistant".to_string(),
            bot_status: "Online • Ready to help".to_string(),
            welcome_message: "Hi! I'm your Systems & Networks virtual assistant. I can help you \
                learn about our IT services, answer technical questions, and guide you through \
                our website. How can I assist you today?"
                .to_string(),
            fallback_message:
                "I'm not sure I understand that question. Here are some topics I can help with:"
                    .to_string(),
            typing_delay: DEFAULT_TYPING_DELAY,
            greeting_delay: DEFAULT_GREETING_DELAY,
            quick_replies: [
                "What services do you offer?",
                "How can I contact you?",
                "About Systems & Networks",
                "IT Infrastructure",
                "Networking solutions",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            seed: None,
        }
    }
}

impl WidgetConfig {
    /// Defaults with environment overrides applied.
    ///
    /// Unparseable values are logged and skipped.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`WidgetConfig::from_env`] with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = override_var::<u64>(&lookup, "FAQ_CHAT_TYPING_DELAY_MS") {
            config.typing_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = override_var::<u64>(&lookup, "FAQ_CHAT_GREETING_DELAY_MS") {
            config.greeting_delay = Duration::from_millis(ms);
        }
        if let Some(count) = override_var::<usize>(&lookup, "FAQ_CHAT_SUGGESTIONS") {
            config.suggestion_count = count;
        }
        if let Some(seed) = override_var::<u64>(&lookup, "FAQ_CHAT_SEED") {
            config.seed = Some(seed);
        }

        config
    }
}

fn override_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Option<T> {
    match parse_var(lookup, var) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring configuration override");
            None
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { var, value: raw }),
    }
}
