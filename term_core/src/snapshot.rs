//! Session snapshot for deterministic parity testing

use challenges::ChallengeStatus;
use serde::{Deserialize, Serialize};

/// Complete session state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cwd: String,
    pub buffer: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: usize,
    pub output: Vec<String>,
    pub challenge_status: ChallengeStatus,
    pub ended: bool,
}

impl SessionSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update(self.cwd.as_bytes());
        hasher.update(b"\n");

        hasher.update(self.buffer.as_bytes());
        hasher.update(&self.cursor.to_le_bytes());

        for entry in &self.history {
            hasher.update(entry.as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(&self.history_index.to_le_bytes());

        for line in &self.output {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        hasher.update([self.challenge_status as u8]);
        hasher.update([self.ended as u8]);

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
