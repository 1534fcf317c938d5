pub mod responder;

use crate::consts::KEYWORDS;

/// The outermost boundary. The session loop only knows this trait.
pub trait Responder {
    /// Produce the reply for one raw input line. Never fails.
    fn respond(&self, input: &str) -> String;
}

/// What an input line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A keyword matched; carries the chosen response.
    Matched(String),
    /// Nothing matched; carries the fallback.
    Fallback(String),
}

impl Reply {
    pub fn into_text(self) -> String {
        match self {
            Reply::Matched(text) | Reply::Fallback(text) => text,
        }
    }
}

/// Trim and lowercase. Only used for matching.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Plain substring test against [`KEYWORDS`], no word boundaries.
pub fn contains_keyword(normalized: &str) -> bool {
    KEYWORDS.iter().any(|keyword| normalized.contains(keyword))
}
