//! Notification payloads published after an operation commits.

use serde::{Deserialize, Serialize};

/// Type tag of a published event.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    NewGameCreated,
    MovePlayed,
    GameRejected,
    GameForfeited,
}

/// Attribute keys shared by the event builders and consumers.
pub mod keys {
    pub const CREATOR: &str = "creator";
    pub const GAME_INDEX: &str = "game-index";
    pub const BLACK: &str = "black";
    pub const RED: &str = "red";
    pub const WAGER: &str = "wager";
    pub const DENOM: &str = "denom";
    pub const CAPTURED_X: &str = "captured-x";
    pub const CAPTURED_Y: &str = "captured-y";
    pub const WINNER: &str = "winner";
    pub const BOARD: &str = "board";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// Structured event: a type tag plus ordered key/value attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub attributes: Vec<Attribute>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.push(Attribute {
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// First value recorded under `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value.as_str())
    }

    /// Renders the event as `{"type": ..., "attributes": [{"key", "value"}]}`.
    pub fn to_json(&self) -> serde_json::Value {
        let attributes: Vec<serde_json::Value> = self
            .attributes
            .iter()
            .map(|attribute| serde_json::json!({ "key": attribute.key, "value": attribute.value }))
            .collect();
        serde_json::json!({
            "type": self.kind.as_ref(),
            "attributes": attributes,
        })
    }
}
