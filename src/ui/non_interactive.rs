//! Non-interactive UI for scripted and headless orders.

use std::collections::HashMap;

use crate::error::{Result, ShowroomError};

use super::theme::ShowroomTheme;
use super::{parse_bool, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "SHOWROOM_PROMPT_";

/// Environment variable name that answers the prompt with `key`.
///
/// `fullName` becomes `SHOWROOM_PROMPT_FULLNAME`.
pub fn prompt_env_key(key: &str) -> String {
    format!("{}{}", PROMPT_ENV_PREFIX, key.to_uppercase())
}

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `SHOWROOM_PROMPT_*` variables, then from the
/// prompt default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self
            .env_overrides
            .get(&prompt_env_key(&prompt.key))
            .or(prompt.default.as_ref())
            .cloned();

        match (answer, &prompt.prompt_type) {
            (Some(value), PromptType::Confirm) => Ok(PromptResult::Bool(parse_bool(&value))),
            (Some(value), _) => Ok(PromptResult::String(value)),
            // An unanswered yes/no is a no.
            (None, PromptType::Confirm) => Ok(PromptResult::Bool(false)),
            (None, _) => Err(ShowroomError::InvalidInput {
                field: prompt.key.clone(),
                message: format!(
                    "cannot prompt in non-interactive mode; set {}",
                    prompt_env_key(&prompt.key)
                ),
            }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            println!("  {}", hint);
        }
    }

    fn show_summary(&mut self, title: &str, rows: &[(String, String)]) {
        if !self.mode.shows_status() {
            return;
        }

        let theme = ShowroomTheme::plain();
        let width = rows
            .iter()
            .map(|(label, _)| console::measure_text_width(label))
            .max()
            .unwrap_or(0);

        println!("{}", title);
        for (label, value) in rows {
            println!("  {}", theme.format_row(label, value, width));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints its final line.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{}", ShowroomTheme::plain().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", ShowroomTheme::plain().format_error(msg));
    }
}
