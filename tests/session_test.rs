use std::future::pending;
use std::io::{self, Write};
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, BufReader, ReadBuf};

use greetbot::consts::{DEFAULT_FALLBACK, DEFAULT_RESPONSES, ERROR_MESSAGE};
use greetbot::engine::responder::{ResponderConfig, ResponderEngine};
use greetbot::logging::{EventLog, MemorySink};
use greetbot::picker::mock::ScriptedPicker;
use greetbot::session::{MAX_CONSECUTIVE_READ_FAILURES, Session, SessionEnd};

const GREETING_LINE: &str = "Bot: Hi! I'm your assistant. Type 'exit' to end the conversation.\n";
const FAREWELL_LINE: &str = "Bot: Goodbye! Have a great day.\n";

fn build_engine(picks: Vec<usize>) -> (ResponderEngine, EventLog, MemorySink) {
    let (log, sink) = EventLog::in_memory();
    let engine = ResponderEngine::new(
        ResponderConfig::default(),
        Box::new(ScriptedPicker::new(picks)),
        log.clone(),
    );
    (engine, log, sink)
}

/// Run a whole session over `input`, returning how it ended and what was printed.
async fn run(engine: &ResponderEngine, log: &EventLog, input: &[u8]) -> (SessionEnd, String) {
    let mut session = Session::new(engine, log, BufReader::new(input), Vec::new());
    let end = session.run(pending()).await;
    let output = String::from_utf8(session.into_output()).unwrap();
    (end, output)
}

#[tokio::test]
async fn exit_ends_session_with_farewell() {
    let (engine, log, sink) = build_engine(vec![]);
    let (end, output) = run(&engine, &log, b"Exit\nhello\n").await;

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(output, format!("{GREETING_LINE}You: {FAREWELL_LINE}"));
    assert!(sink.lines().is_empty());
}

#[tokio::test]
async fn exit_is_trimmed_and_case_insensitive() {
    for line in ["exit\n", "EXIT\n", "  eXiT  \n", "exit\r\n", "exit"] {
        let (engine, log, _) = build_engine(vec![]);
        let (end, _) = run(&engine, &log, line.as_bytes()).await;
        assert_eq!(end, SessionEnd::Exit, "{line:?}");
    }
}

#[tokio::test]
async fn replies_are_prefixed_and_loop_continues() {
    let (engine, log, _) = build_engine(vec![2]);
    let (end, output) = run(&engine, &log, b"Hello there\nwhat time is it\nexit\n").await;

    assert_eq!(end, SessionEnd::Exit);
    let expected = format!(
        "{GREETING_LINE}You: Bot: {}\nYou: Bot: {}\nYou: {FAREWELL_LINE}",
        DEFAULT_RESPONSES[2], DEFAULT_FALLBACK
    );
    assert_eq!(output, expected);
}

#[tokio::test]
async fn end_of_input_says_goodbye() {
    let (engine, log, _) = build_engine(vec![]);
    let (end, output) = run(&engine, &log, b"xyz\n").await;

    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(output.ends_with(&format!("You: \n{FAREWELL_LINE}")));
}

#[tokio::test]
async fn interrupt_says_goodbye() {
    let (engine, log, sink) = build_engine(vec![]);
    let mut session = Session::new(&engine, &log, BufReader::new(PendingReader), Vec::new());

    let end = session.run(async {}).await;
    let output = String::from_utf8(session.into_output()).unwrap();

    assert_eq!(end, SessionEnd::Interrupted);
    assert_eq!(output, format!("{GREETING_LINE}You: \n{FAREWELL_LINE}"));
    assert!(sink.lines().is_empty());
}

#[tokio::test]
async fn engine_failure_is_shown_as_fixed_message() {
    let (engine, log, sink) = build_engine(vec![]);
    let (end, output) = run(&engine, &log, b"hi\nexit\n").await;

    assert_eq!(end, SessionEnd::Exit);
    assert!(output.contains(&format!("Bot: {ERROR_MESSAGE}\n")));
    assert_eq!(sink.lines().len(), 1);
}

#[tokio::test]
async fn invalid_utf8_is_recovered() {
    let (engine, log, sink) = build_engine(vec![]);
    let (end, output) = run(&engine, &log, b"\xff\xfe\nxyz\nexit\n").await;

    assert_eq!(end, SessionEnd::Exit);
    assert!(output.contains("Bot: An unexpected error occurred. Please try again.\n"));
    assert!(output.contains(&format!("Bot: {DEFAULT_FALLBACK}\n")));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - ERROR - Unexpected error during interaction: input is not valid UTF-8"));
}

#[tokio::test]
async fn persistent_read_errors_end_session() {
    let (engine, log, sink) = build_engine(vec![]);
    let mut session = Session::new(&engine, &log, BufReader::new(BrokenReader), Vec::new());

    let end = session.run(pending()).await;
    let output = String::from_utf8(session.into_output()).unwrap();

    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(sink.lines().len(), MAX_CONSECUTIVE_READ_FAILURES);
    assert_eq!(
        output.matches("Bot: An unexpected error occurred").count(),
        MAX_CONSECUTIVE_READ_FAILURES
    );
    assert!(output.ends_with(FAREWELL_LINE));
}

#[tokio::test]
async fn write_failures_are_logged_not_fatal() {
    let (engine, log, sink) = build_engine(vec![]);
    let mut session = Session::new(&engine, &log, BufReader::new(&b"xyz\nexit\n"[..]), BrokenWriter);

    let end = session.run(pending()).await;

    assert_eq!(end, SessionEnd::Exit);
    assert!(!sink.lines().is_empty());
    assert!(
        sink.lines()
            .iter()
            .all(|l| l.contains(" - ERROR - Unexpected error during interaction: failed to write output"))
    );
}

/// Never yields data, so only the interrupt can end the session.
struct PendingReader;

impl AsyncRead for PendingReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Pending
    }
}

/// Fails every read.
struct BrokenReader;

impl AsyncRead for BrokenReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Ready(Err(io::Error::other("device gone")))
    }
}

/// Fails every write.
struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("pipe closed"))
    }
}
