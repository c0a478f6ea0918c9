//! Command parsing for the bot
//!
//! This module turns slash-command text into a [`Command`].

use crate::error::{BotError, Result};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the current shop stock
    Stock,
    /// Generate an image from a prompt
    Image { prompt: String },
    /// Show help
    Help,
    /// Exit the bot
    Exit,
}

impl Command {
    /// Parse a command from user input
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(BotError::CommandError("Empty input".to_string()));
        }

        let Some(body) = input.strip_prefix('/') else {
            return Err(BotError::CommandError(format!(
                "Commands start with '/', got: {input}"
            )));
        };

        let (cmd, rest) = match body.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (body, ""),
        };

        if cmd.is_empty() {
            return Err(BotError::CommandError("Empty command".to_string()));
        }

        match cmd.to_lowercase().as_str() {
            "stock" | "s" => Ok(Command::Stock),
            "image" | "img" | "imagine" => {
                if rest.is_empty() {
                    return Err(BotError::CommandError(
                        "Missing prompt for image command".to_string(),
                    ));
                }
                Ok(Command::Image {
                    prompt: rest.to_string(),
                })
            }
            "help" | "h" | "?" => Ok(Command::Help),
            "exit" | "quit" | "q" => Ok(Command::Exit),
            other => Err(BotError::CommandError(format!("Unknown command: {other}"))),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r"
Stockcard Commands
==================

  /stock             Show the current shop stock
  /image <prompt>    Generate an image from a prompt
  /help              Show help
  /exit              Exit

Command Aliases:
  /s = /stock      /img, /imagine = /image      /q = /exit
"
    }

    /// Get a short description of the command
    pub fn description(&self) -> &'static str {
        match self {
            Command::Stock => "Shop stock",
            Command::Image { .. } => "Image generation",
            Command::Help => "Show help",
            Command::Exit => "Exit the bot",
        }
    }
}
