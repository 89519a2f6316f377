//! Protocol module - JSON message types for the headless driver
//!
//! Line-delimited JSON: one message per line in each direction. Every client
//! message carries `type` and `session`; every reply carries `type` and a
//! driver-assigned `seq`.

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;

// ============== Client -> Driver Messages ==============

/// Command addressing a whole session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCommand {
    pub session: String,
}

/// Command addressing one cell of a session's grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCommand {
    pub session: String,
    pub index: usize,
}

/// Parsed incoming message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Start (or restart) a game, creating the session if needed
    Start(SessionCommand),
    /// Phase-dispatched tap
    Tap(CellCommand),
    Select(CellCommand),
    Target(CellCommand),
    Observe(SessionCommand),
    Close(SessionCommand),
}

impl ClientMessage {
    pub fn session(&self) -> &str {
        match self {
            ClientMessage::Start(c) | ClientMessage::Observe(c) | ClientMessage::Close(c) => {
                &c.session
            }
            ClientMessage::Tap(c) | ClientMessage::Select(c) | ClientMessage::Target(c) => {
                &c.session
            }
        }
    }
}

/// Parse a JSON message from a string
pub fn parse_message(json: &str) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_str(json)
}

// ============== Driver -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClosedType {
    #[serde(rename = "closed")]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "invalid_command")]
    InvalidCommand,
    #[serde(rename = "out_of_range")]
    OutOfRange,
    #[serde(rename = "unknown_session")]
    UnknownSession,
}

/// Full session state after a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub session: String,
    pub episode_id: u32,
    pub side: usize,
    /// Row-major color codes, 0 = empty
    pub cells: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<usize>,
    pub next_block: Vec<u8>,
    pub score: u32,
    pub phase: String,
    pub started: bool,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub status: String,
}

/// Reply to `close`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedMessage {
    #[serde(rename = "type")]
    pub msg_type: ClosedType,
    pub seq: u64,
    pub session: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// Any outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Observation(ObservationMessage),
    Closed(ClosedMessage),
    Error(ErrorMessage),
}

// ============== Message Builders ==============

pub fn build_observation(seq: u64, session: &str, snap: &GameSnapshot) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        session: session.to_string(),
        episode_id: snap.episode_id,
        side: snap.side,
        cells: snap.cell_codes(),
        selection: snap.selection,
        next_block: snap.next_block.iter().map(|c| c.code()).collect(),
        score: snap.score,
        phase: snap.phase.as_str().to_string(),
        started: snap.started(),
        game_over: snap.game_over(),
        outcome: snap.last_outcome.map(|o| o.as_str().to_string()),
        status: snap.status.clone(),
    }
}

pub fn create_closed(seq: u64, session: &str) -> ClosedMessage {
    ClosedMessage {
        msg_type: ClosedType::Closed,
        seq,
        session: session.to_string(),
    }
}

/// Create an error message
pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        code,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, GameEngine};

    #[test]
    fn test_parse_start() {
        let msg = parse_message(r#"{"type":"start","session":"a"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Start(SessionCommand {
                session: "a".to_string()
            })
        );
        assert_eq!(msg.session(), "a");
    }

    #[test]
    fn test_parse_cell_commands() {
        for (kind, expect_tap) in [("tap", true), ("select", false), ("target", false)] {
            let json = format!(r#"{{"type":"{}","session":"s1","index":12}}"#, kind);
            let msg = parse_message(&json).unwrap();
            assert_eq!(matches!(msg, ClientMessage::Tap(_)), expect_tap);
            assert_eq!(msg.session(), "s1");
        }
        let msg = parse_message(r#"{"type":"target","session":"s1","index":3}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Target(CellCommand {
                session: "s1".to_string(),
                index: 3
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_message("not json").is_err());
        assert!(parse_message(r#"{"type":"jump","session":"a"}"#).is_err());
        assert!(parse_message(r#"{"type":"tap","session":"a"}"#).is_err());
        assert!(parse_message(r#"{"type":"tap","session":"a","index":-1}"#).is_err());
    }

    #[test]
    fn test_error_serialization() {
        let err = create_error(4, ErrorCode::UnknownSession, "no session \"x\"");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["seq"], 4);
        assert_eq!(json["code"], "unknown_session");
    }

    #[test]
    fn test_observation_fields() {
        let mut game = GameEngine::new(EngineConfig::classic(), 9).unwrap();
        game.start();
        let obs = build_observation(1, "a", &game.snapshot());
        assert_eq!(obs.cells.len(), 64);
        assert_eq!(obs.cells.iter().filter(|c| **c != 0).count(), 3);
        assert_eq!(obs.next_block.len(), 3);
        assert!(obs.started);
        assert!(!obs.game_over);
        assert_eq!(obs.phase, "awaiting_selection");
        assert_eq!(obs.status, "Go!");

        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["type"], "observation");
        assert!(json.get("selection").is_none());
    }
}
