use serde::{Deserialize, Serialize};

/// Acknowledgement body returned by delete and bulk operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
