//! Engine-facing seams for the menu shell.
//!
//! The menu never talks to the engine directly. It asks a [`GameInfo`] which
//! content folder is loaded and hands console text to a [`CommandExecutor`].
//! [`CommandBuffer`] is the executor used by the reference host: it queues
//! text and parses it into [`ConsoleCommand`]s when the host drains it.

use std::str::FromStr;

use strum::{AsRefStr, EnumString};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while parsing console text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Command name not known to the shell
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command requires an argument that was not supplied
    #[error("Command '{0}' requires an argument")]
    MissingArgument(String),
}

// ============================================================================
// Collaborator traits
// ============================================================================

/// Read access to the engine's game configuration
pub trait GameInfo {
    /// Current content folder, which doubles as the active language code
    fn game_folder(&self) -> &str;
}

impl GameInfo for String {
    fn game_folder(&self) -> &str {
        self
    }
}

/// Sink for console command text
pub trait CommandExecutor {
    /// Queue `cmd` for execution; the text may hold several `;`-separated commands
    fn client_cmd(&mut self, cmd: &str);
}

/// Console text that switches the shell language and restarts the engine.
///
/// The language only takes effect after a restart, so `quit` is always
/// chained in the same buffer.
pub fn language_switch_command(code: &str) -> String {
    format!("ui_language \"{}\"; quit\n", code)
}

// ============================================================================
// Console commands
// ============================================================================

/// Command names understood by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CommandName {
    UiLanguage,
    Quit,
    MenuLanguage,
}

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Persist a new shell language
    UiLanguage(String),
    /// Leave the engine
    Quit,
    /// Open the Language screen
    MenuLanguage,
}

impl ConsoleCommand {
    /// Build a command from its tokens, name first
    pub fn from_tokens(tokens: &[String]) -> Result<Self, EngineError> {
        let Some((name, args)) = tokens.split_first() else {
            return Err(EngineError::UnknownCommand(String::new()));
        };

        let command = CommandName::from_str(name)
            .map_err(|_| EngineError::UnknownCommand(name.clone()))?;

        match command {
            CommandName::UiLanguage => args
                .first()
                .map(|code| ConsoleCommand::UiLanguage(code.clone()))
                .ok_or_else(|| EngineError::MissingArgument(command.as_ref().to_string())),
            CommandName::Quit => Ok(ConsoleCommand::Quit),
            CommandName::MenuLanguage => Ok(ConsoleCommand::MenuLanguage),
        }
    }
}

/// Split console text into statements of tokens.
///
/// Statements end at `;` or a newline outside quotes. Double quotes group a
/// token and are stripped. Empty statements are dropped.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut statements = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut token = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in text.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            ';' | '\n' if !in_quotes => {
                flush_token(&mut token, &mut quoted, &mut tokens);
                if !tokens.is_empty() {
                    statements.push(std::mem::take(&mut tokens));
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                flush_token(&mut token, &mut quoted, &mut tokens);
            }
            c => token.push(c),
        }
    }

    flush_token(&mut token, &mut quoted, &mut tokens);
    if !tokens.is_empty() {
        statements.push(tokens);
    }

    statements
}

fn flush_token(token: &mut String, quoted: &mut bool, tokens: &mut Vec<String>) {
    if !token.is_empty() || *quoted {
        tokens.push(std::mem::take(token));
    }
    *quoted = false;
}

/// Parse console text into commands, one result per statement
pub fn parse_commands(text: &str) -> Vec<Result<ConsoleCommand, EngineError>> {
    tokenize(text)
        .iter()
        .map(|tokens| ConsoleCommand::from_tokens(tokens))
        .collect()
}

// ============================================================================
// Command Buffer
// ============================================================================

/// Executor that queues console text until the host drains it
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pending: String,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text queued since the last drain
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Parse and clear the queued text
    pub fn drain(&mut self) -> Vec<Result<ConsoleCommand, EngineError>> {
        let text = std::mem::take(&mut self.pending);
        parse_commands(&text)
    }
}

impl CommandExecutor for CommandBuffer {
    fn client_cmd(&mut self, cmd: &str) {
        tracing::debug!("Console: {}", cmd.trim_end());
        self.pending.push_str(cmd);
        if !cmd.ends_with('\n') {
            self.pending.push('\n');
        }
    }
}
