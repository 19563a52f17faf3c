//! Response bodies shared by the CRUD endpoints.

use serde::{Deserialize, Serialize};

/// `{"id": n}` — returned by create endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: i64,
}

/// `{"success": true}` — returned by update and delete endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
