use super::{Reply, Responder, contains_keyword, normalize};
use crate::consts::{DEFAULT_FALLBACK, DEFAULT_RESPONSES, ERROR_MESSAGE};
use crate::error::ResponseError;
use crate::logging::EventLog;
use crate::picker::Picker;
use crate::responses::ResponseSet;

/// Initial responses and fallback.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    pub responses: Vec<String>,
    pub fallback: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            responses: DEFAULT_RESPONSES.iter().map(|r| r.to_string()).collect(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

/// Keyword-triggered reply selection. Wires together the response list,
/// a [`Picker`], and an [`EventLog`].
pub struct ResponderEngine {
    responses: ResponseSet,
    fallback: String,
    picker: Box<dyn Picker>,
    log: EventLog,
}

impl ResponderEngine {
    pub fn new(config: ResponderConfig, picker: Box<dyn Picker>, log: EventLog) -> Self {
        Self {
            responses: config.responses.into_iter().collect(),
            fallback: config.fallback,
            picker,
            log,
        }
    }

    /// Classify `input` and pick a reply, reporting failures instead of
    /// hiding them.
    pub fn try_respond(&self, input: &str) -> Result<Reply, ResponseError> {
        if !contains_keyword(&normalize(input)) {
            return Ok(Reply::Fallback(self.fallback.clone()));
        }

        let len = self.responses.len();
        if len == 0 {
            return Err(ResponseError::NoResponses);
        }
        let index = self
            .picker
            .pick(len)
            .map_err(|e| ResponseError::Picker(format!("{e:#}")))?;
        let response = self
            .responses
            .get(index)
            .ok_or(ResponseError::OutOfRange { index, len })?;
        Ok(Reply::Matched(response.to_string()))
    }

    /// Append `response` unless it is already present. Returns `true` if added.
    pub fn add_response(&mut self, response: impl Into<String>) -> bool {
        let response = response.into();
        let added = self.responses.insert(response.clone());
        if added {
            self.log.info(format_args!("Added new response: {response}"));
        }
        added
    }

    /// Replace the fallback. Not validated; an empty fallback is accepted.
    pub fn update_fallback(&mut self, fallback: impl Into<String>) {
        self.fallback = fallback.into();
        self.log
            .info(format_args!("Updated fallback response to: {}", self.fallback));
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Responder for ResponderEngine {
    fn respond(&self, input: &str) -> String {
        match self.try_respond(input) {
            Ok(reply) => reply.into_text(),
            Err(e) => {
                self.log.error(format_args!("Error generating response: {e}"));
                ERROR_MESSAGE.to_string()
            }
        }
    }
}
