//! The interactive loop: read a line, answer it, repeat until `exit`,
//! an interrupt, or the end of input.

use std::future::Future;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::consts::{
    BOT_PREFIX, EXIT_COMMAND, FAREWELL, GREETING, UNEXPECTED_ERROR_NOTICE, USER_PROMPT,
};
use crate::engine::Responder;
use crate::error::InteractionError;
use crate::logging::EventLog;

/// Consecutive read failures tolerated before the session gives up on the input.
pub const MAX_CONSECUTIVE_READ_FAILURES: usize = 5;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit command.
    Exit,
    /// The interrupt future resolved (Ctrl+C).
    Interrupted,
    /// The input stream closed or kept failing.
    EndOfInput,
}

/// What to do after handling one line.
enum Flow {
    Continue,
    Exit,
}

/// Drives a [`Responder`] from a line-oriented input.
pub struct Session<'a, R, W> {
    responder: &'a dyn Responder,
    log: &'a EventLog,
    input: R,
    output: W,
}

impl<'a, R, W> Session<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(responder: &'a dyn Responder, log: &'a EventLog, input: R, output: W) -> Self {
        Self {
            responder,
            log,
            input,
            output,
        }
    }

    /// Run until exit, interrupt, or end of input.
    pub async fn run<F>(&mut self, interrupt: F) -> SessionEnd
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);
        let greeted = self.say(GREETING);
        self.report(greeted);

        let mut read_failures = 0;
        let mut buf = Vec::new();

        loop {
            let prompted = self.prompt();
            self.report(prompted);
            buf.clear();

            let read = tokio::select! {
                result = self.input.read_until(b'\n', &mut buf) => Some(result),
                _ = &mut interrupt => None,
            };
            let Some(read) = read else {
                self.farewell_after_break();
                return SessionEnd::Interrupted;
            };

            match read {
                Ok(0) => {
                    self.farewell_after_break();
                    return SessionEnd::EndOfInput;
                }
                Ok(_) => {
                    read_failures = 0;
                    match self.handle_line(&buf) {
                        Ok(Flow::Exit) => return SessionEnd::Exit,
                        Ok(Flow::Continue) => {}
                        Err(e) => self.fail(e),
                    }
                }
                Err(e) => {
                    read_failures += 1;
                    self.fail(InteractionError::Read(e));
                    if read_failures >= MAX_CONSECUTIVE_READ_FAILURES {
                        self.farewell_after_break();
                        return SessionEnd::EndOfInput;
                    }
                }
            }
        }
    }

    fn handle_line(&mut self, raw: &[u8]) -> Result<Flow, InteractionError> {
        let line = String::from_utf8(strip_line_ending(raw).to_vec())?;

        if is_exit_command(&line) {
            let said = self.say(FAREWELL);
            self.report(said);
            return Ok(Flow::Exit);
        }

        let reply = self.responder.respond(&line);
        self.say(&reply)?;
        Ok(Flow::Continue)
    }

    fn say(&mut self, message: &str) -> Result<(), InteractionError> {
        writeln!(self.output, "{BOT_PREFIX}{message}").map_err(InteractionError::Write)
    }

    fn prompt(&mut self) -> Result<(), InteractionError> {
        write!(self.output, "{USER_PROMPT}").map_err(InteractionError::Write)?;
        self.output.flush().map_err(InteractionError::Write)
    }

    /// The prompt is still on screen, so break the line first.
    fn farewell_after_break(&mut self) {
        let result = match writeln!(self.output) {
            Ok(()) => self.say(FAREWELL),
            Err(e) => Err(InteractionError::Write(e)),
        };
        self.report(result);
    }

    fn fail(&mut self, error: InteractionError) {
        self.log
            .error(format_args!("Unexpected error during interaction: {error}"));
        // Nowhere left to report a failure to print the notice.
        let _ = self.say(UNEXPECTED_ERROR_NOTICE);
    }

    /// Log an output failure without interrupting the session.
    fn report(&mut self, result: Result<(), InteractionError>) {
        if let Err(e) = result {
            self.log
                .error(format_args!("Unexpected error during interaction: {e}"));
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Trimmed, case-insensitive comparison against the exit command.
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

fn strip_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}
