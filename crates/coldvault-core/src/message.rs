//! Lifecycle messages delivered over the inter-process channel.
//!
//! Producers send a JSON object whose `type` field names the sync phase.
//! Decoding narrows that free-form string to [`LifecycleMessage`], so code
//! past this boundary only ever matches the three known phases.

use serde::Deserialize;

use crate::Result;

const SYNC_PROGRESS: &str = "accounts.sync.progress";
const SYNC_FAIL: &str = "accounts.sync.fail";
const SYNC_SUCCESS: &str = "accounts.sync.success";

/// A phase of account synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleMessage {
    /// A sync run started or is still running
    SyncProgress,
    /// The last sync run failed
    SyncFail,
    /// The last sync run completed
    SyncSuccess,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
}

impl LifecycleMessage {
    /// Map a wire `type` value to a message, `None` when it is not a sync phase.
    #[must_use]
    pub fn from_type(kind: &str) -> Option<Self> {
        match kind {
            SYNC_PROGRESS => Some(Self::SyncProgress),
            SYNC_FAIL => Some(Self::SyncFail),
            SYNC_SUCCESS => Some(Self::SyncSuccess),
            _ => None,
        }
    }

    /// The wire `type` value for this message
    #[must_use]
    pub const fn as_type(self) -> &'static str {
        match self {
            Self::SyncProgress => SYNC_PROGRESS,
            Self::SyncFail => SYNC_FAIL,
            Self::SyncSuccess => SYNC_SUCCESS,
        }
    }

    /// Decode a raw channel payload.
    ///
    /// Returns `Ok(None)` for well-formed payloads of another kind and an
    /// error when the payload is not an object with a string `type` field.
    /// Fields other than `type` are ignored.
    pub fn decode(payload: &str) -> Result<Option<Self>> {
        let envelope: Envelope = serde_json::from_str(payload)?;
        Ok(Self::from_type(&envelope.kind))
    }

    /// Encode this message as a channel payload
    #[must_use]
    pub fn encode(self) -> String {
        serde_json::json!({ "type": self.as_type() }).to_string()
    }
}
