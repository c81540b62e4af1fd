//! Upload quota model.

use serde::{Deserialize, Serialize};

/// Response body of `GET /upload/stats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadStats {
    pub upload_count: u32,
    pub limit: u32,
}

impl UploadStats {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.upload_count)
    }
}
