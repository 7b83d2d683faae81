//! models/command_model.rs
//! Requests/responses de comandos de voz ("call 9876543210", etc.)

use serde::{Deserialize, Serialize};

fn default_ai_voice() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandRequest {
    pub command: String,

    #[serde(default = "default_ai_voice")]
    pub ai_voice: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub message: String,
    pub status: String,
    pub command_processed: String,
}
