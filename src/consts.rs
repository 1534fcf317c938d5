//! Project-wide constants.

/// Substrings that trigger a canned response. Matched against the
/// trimmed, lowercased input with a plain `contains`, so "bother" matches "bot".
pub const KEYWORDS: &[&str] = &["bot", "hi", "hello", "hey", "greetings"];

/// Responses the engine starts with.
pub const DEFAULT_RESPONSES: &[&str] = &[
    "Hello! How can I assist you today?",
    "Hi there! What can I help you with?",
    "Greetings! Feel free to ask me anything.",
    "I'm here to help! How can I assist you?",
];

/// Returned when no keyword matches.
pub const DEFAULT_FALLBACK: &str =
    "I’m sorry, I didn’t quite understand that. Could you please rephrase or provide more details?";

/// Returned by the engine when it fails to produce a reply.
pub const ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// Printed by the session when the loop body itself fails.
pub const UNEXPECTED_ERROR_NOTICE: &str = "An unexpected error occurred. Please try again.";

pub const GREETING: &str = "Hi! I'm your assistant. Type 'exit' to end the conversation.";
pub const FAREWELL: &str = "Goodbye! Have a great day.";

/// Ends the session (compared after trim + lowercase).
pub const EXIT_COMMAND: &str = "exit";

pub const BOT_PREFIX: &str = "Bot: ";
pub const USER_PROMPT: &str = "You: ";

/// Log location, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "bot_logs.log";
