//! Driver runtime - turns request lines into reply lines
//!
//! [`Driver::handle_line`] is synchronous and usable from any thread; [`run`]
//! pumps it over an async line stream (stdin/stdout in the binary).

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::config::AdapterConfig;
use crate::core::{ConfigError, EngineError, GameEngine};
use crate::protocol::*;
use crate::sessions::SessionRegistry;

/// Request handler over a [`SessionRegistry`]
#[derive(Debug)]
pub struct Driver {
    sessions: SessionRegistry,
    seq: AtomicU64,
}

impl Driver {
    pub fn new(config: AdapterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sessions: SessionRegistry::new(config.engine, config.seed)?,
            seq: AtomicU64::new(0),
        })
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Handle one raw request line. `None` for blank lines.
    pub fn handle_line(&self, line: &str) -> Option<ServerMessage> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let reply = match parse_message(trimmed) {
            Ok(msg) => self.handle_message(&msg),
            Err(e) => {
                warn!(error = %e, "malformed request");
                ServerMessage::Error(create_error(
                    self.next_seq(),
                    ErrorCode::InvalidCommand,
                    &e.to_string(),
                ))
            }
        };
        Some(reply)
    }

    /// Apply one parsed request and build the reply
    pub fn handle_message(&self, msg: &ClientMessage) -> ServerMessage {
        let session = msg.session();
        match msg {
            ClientMessage::Start(_) => match self.sessions.get_or_create(session) {
                Ok(_) => self.observe_after(session, |g| Ok(g.start())),
                Err(e) => self.error(ErrorCode::InvalidCommand, &e.to_string()),
            },
            ClientMessage::Tap(c) => self.observe_after(session, |g| g.tap(c.index)),
            ClientMessage::Select(c) => self.observe_after(session, |g| g.select(c.index)),
            ClientMessage::Target(c) => self.observe_after(session, |g| g.target_tap(c.index)),
            ClientMessage::Observe(_) => self.observe_after(session, |g| Ok(g.phase())),
            ClientMessage::Close(_) => {
                if self.sessions.close(session) {
                    ServerMessage::Closed(create_closed(self.next_seq(), session))
                } else {
                    self.unknown_session(session)
                }
            }
        }
    }

    /// Run `op` under the session lock and reply with the resulting state
    fn observe_after<T, F>(&self, session: &str, op: F) -> ServerMessage
    where
        T: std::fmt::Debug,
        F: FnOnce(&mut GameEngine) -> Result<T, EngineError>,
    {
        let result = self.sessions.with_session(session, |game| {
            op(game).map(|value| {
                debug!(session, ?value, score = game.score(), "request applied");
                game.snapshot()
            })
        });
        match result {
            None => self.unknown_session(session),
            Some(Ok(snap)) => {
                ServerMessage::Observation(build_observation(self.next_seq(), session, &snap))
            }
            Some(Err(EngineError::OutOfRange { index, len })) => self.error(
                ErrorCode::OutOfRange,
                &format!("cell index {} is outside 0..{}", index, len),
            ),
            Some(Err(e)) => self.error(ErrorCode::InvalidCommand, &e.to_string()),
        }
    }

    fn unknown_session(&self, session: &str) -> ServerMessage {
        self.error(
            ErrorCode::UnknownSession,
            &format!("no session named {:?}; send start first", session),
        )
    }

    fn error(&self, code: ErrorCode, message: &str) -> ServerMessage {
        ServerMessage::Error(create_error(self.next_seq(), code, message))
    }
}

/// Serialize a reply as one protocol line (without the newline)
pub fn encode(msg: &ServerMessage) -> anyhow::Result<String> {
    Ok(serde_json::to_string(msg)?)
}

/// Serve requests from `reader` until end of input, one reply line per request
pub async fn run<R, W>(driver: &Driver, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            break;
        }

        if let Some(reply) = driver.handle_line(&line) {
            let mut out = encode(&reply)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    debug!(sessions = driver.sessions().len(), "input closed");
    Ok(())
}

/// Serve the protocol over the process's stdin/stdout
pub async fn run_stdio(config: AdapterConfig) -> anyhow::Result<()> {
    let driver = Driver::new(config)?;
    run(&driver, tokio::io::stdin(), tokio::io::stdout()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Driver {
        Driver::new(AdapterConfig::default()).unwrap()
    }

    fn observation(msg: Option<ServerMessage>) -> ObservationMessage {
        match msg {
            Some(ServerMessage::Observation(obs)) => obs,
            other => panic!("expected observation, got {:?}", other),
        }
    }

    fn error_code(msg: Option<ServerMessage>) -> ErrorCode {
        match msg {
            Some(ServerMessage::Error(err)) => err.code,
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert!(driver().handle_line("   \n").is_none());
    }

    #[test]
    fn test_start_then_observe() {
        let d = driver();
        let obs = observation(d.handle_line(r#"{"type":"start","session":"a"}"#));
        assert_eq!(obs.seq, 1);
        assert_eq!(obs.outcome.as_deref(), Some("started"));
        assert_eq!(obs.cells.iter().filter(|c| **c != 0).count(), 3);

        let again = observation(d.handle_line(r#"{"type":"observe","session":"a"}"#));
        assert_eq!(again.seq, 2);
        assert_eq!(again.cells, obs.cells);
    }

    #[test]
    fn test_error_codes() {
        let d = driver();
        assert_eq!(error_code(d.handle_line("{")), ErrorCode::InvalidCommand);
        assert_eq!(
            error_code(d.handle_line(r#"{"type":"tap","session":"nope","index":0}"#)),
            ErrorCode::UnknownSession
        );
        d.handle_line(r#"{"type":"start","session":"a"}"#);
        assert_eq!(
            error_code(d.handle_line(r#"{"type":"tap","session":"a","index":64}"#)),
            ErrorCode::OutOfRange
        );
        assert_eq!(
            error_code(d.handle_line(r#"{"type":"close","session":"b"}"#)),
            ErrorCode::UnknownSession
        );
    }

    #[test]
    fn test_close_removes_session() {
        let d = driver();
        d.handle_line(r#"{"type":"start","session":"a"}"#);
        match d.handle_line(r#"{"type":"close","session":"a"}"#) {
            Some(ServerMessage::Closed(c)) => assert_eq!(c.session, "a"),
            other => panic!("expected closed, got {:?}", other),
        }
        assert!(d.sessions().is_empty());
    }

    #[test]
    fn test_select_piece_over_protocol() {
        let d = driver();
        let obs = observation(d.handle_line(r#"{"type":"start","session":"a"}"#));
        let piece = obs.cells.iter().position(|c| *c != 0).unwrap();
        let line = format!(r#"{{"type":"select","session":"a","index":{}}}"#, piece);
        let obs = observation(d.handle_line(&line));
        assert_eq!(obs.selection, Some(piece));
        assert_eq!(obs.phase, "piece_selected");
        assert_eq!(obs.outcome.as_deref(), Some("selected"));
    }

    #[tokio::test]
    async fn test_run_over_streams() {
        let d = driver();
        let input: &[u8] =
            b"{\"type\":\"start\",\"session\":\"a\"}\n\n{\"type\":\"observe\",\"session\":\"x\"}\n";
        let mut output = Vec::new();
        run(&d, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "observation");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["code"], "unknown_session");
    }
}
