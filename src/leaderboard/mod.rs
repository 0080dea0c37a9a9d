//! Leaderboard client: request/response contract for the remote score
//! service, the composite ranking key, and local name validation.
//!
//! Network failures are never fatal: a failed fetch renders as an empty
//! list and a failed submit as an inline status message.

use crate::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod client;
pub use client::*;

pub const API_URL: &str = "https://mann.cool/api/leaderboard";
pub const GAME_SLUG: &str = "tumblox";
pub const NAME_MAX_LEN: usize = 20;

pub fn plugin(app: &mut App) {
    app.add_plugins(client::plugin);
}

/// Composite ranking key: higher level always outranks more throws at a
/// lower level; within the same level fewer throws ranks better. The
/// service sorts ascending, so lower is better.
pub fn ranking_key(level: u32, throws: u32) -> i64 {
    -(level as i64 * 10_000) + throws as i64
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("please enter your name")]
    Empty,
    #[error("name must be 1-{NAME_MAX_LEN} characters")]
    TooLong,
}

/// Local validation before any network call: trimmed length in `[1, 20]`.
pub fn validate_name(raw: &str) -> Result<&str, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > NAME_MAX_LEN {
        return Err(NameError::TooLong);
    }
    Ok(name)
}

/// One row of the remote board, pre-sorted by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub score: i64,
    #[serde(default)]
    pub throws: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitPayload {
    pub game: String,
    pub name: String,
    pub score: i64,
    pub throws: u32,
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SubmitPayload {
    /// Builds the payload for the current run. `level` is the level the
    /// run ended on (the full campaign length on victory).
    pub fn for_run(name: &str, level: u32, throws: u32, address: Option<String>) -> Self {
        Self {
            game: GAME_SLUG.into(),
            name: name.into(),
            score: ranking_key(level, throws),
            throws,
            level,
            address,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchResponse {
    pub success: bool,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Submission lifecycle shown inline in the end-game panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Accepted {
        rank: Option<u32>,
    },
    Rejected(String),
}

/// Client-side copy of the board plus submission state.
#[derive(Resource, Debug, Default)]
pub struct Leaderboard {
    pub entries: Vec<Entry>,
    pub fetching: bool,
    pub status: SubmitStatus,
}

/// `0x1234...abcd` style display form of a wallet address.
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Brag line for the end-game panel.
pub fn share_text(score: u64, throws: u32, level: u32, victory: bool) -> String {
    if victory {
        format!(
            "I beat all {level} levels of TUMBLOX with {score} points using {throws} throws! Can you beat my score?"
        )
    } else {
        format!(
            "I scored {score} points in TUMBLOX, reaching level {level} with {throws} throws! Can you beat me?"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_level_beats_fewer_throws() {
        // Level 6 with 999 throws still outranks level 5 with 20.
        assert!(ranking_key(6, 999) < ranking_key(5, 20));
    }

    #[test]
    fn fewer_throws_win_within_a_level() {
        assert!(ranking_key(20, 50) < ranking_key(20, 100));
    }

    #[test]
    fn name_validation_bounds() {
        assert_eq!(validate_name("  Ada  "), Ok("Ada"));
        assert_eq!(validate_name(""), Err(NameError::Empty));
        assert_eq!(validate_name("   "), Err(NameError::Empty));
        assert_eq!(validate_name(&"x".repeat(21)), Err(NameError::TooLong));
        assert!(validate_name(&"x".repeat(20)).is_ok());
    }

    #[test]
    fn payload_omits_missing_address() {
        let payload = SubmitPayload::for_run("Ada", 5, 32, None);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("address").is_none());
        assert_eq!(value["score"], serde_json::json!(-49_968));
        assert_eq!(value["game"], serde_json::json!(GAME_SLUG));

        let payload = SubmitPayload::for_run("Ada", 5, 32, Some("0xabc".into()));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["address"], serde_json::json!("0xabc"));
    }

    #[test]
    fn addresses_shorten_for_display() {
        assert_eq!(
            shorten_address("0x1234567890abcdef1234"),
            "0x1234...1234"
        );
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }

    #[test]
    fn fetch_response_tolerates_sparse_entries() {
        let parsed: FetchResponse = serde_json::from_str(
            r#"{"success": true, "entries": [{"name": "Ada", "score": -199950}]}"#,
        )
        .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].throws, 0);
        assert!(parsed.entries[0].address.is_none());
    }
}
