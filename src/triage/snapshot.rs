use serde::{Deserialize, Serialize};

use super::types::{AssessmentState, TriageError};

/// Bump when AssessmentState changes shape incompatibly.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    state: AssessmentState,
}

/// Encode the session for transient persistence at the boundary.
/// Round-trips losslessly through `from_json`.
pub fn to_json(state: &AssessmentState) -> Result<String, TriageError> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        state: state.clone(),
    };
    serde_json::to_string(&envelope).map_err(|e| TriageError::SnapshotEncode(e.to_string()))
}

/// Restore a session snapshot. A version mismatch is an error so callers
/// can discard stale snapshots instead of resuming them half-read.
pub fn from_json(raw: &str) -> Result<AssessmentState, TriageError> {
    let envelope: Envelope =
        serde_json::from_str(raw).map_err(|e| TriageError::SnapshotDecode(e.to_string()))?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(TriageError::SnapshotVersion(envelope.version));
    }
    Ok(envelope.state)
}
