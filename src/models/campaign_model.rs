//! models/campaign_model.rs
//! Estructuras de requests/responses de campañas y el estado compartido.

use serde::{Deserialize, Serialize};

fn default_ai_voice() -> bool {
    true
}

/// Request para arrancar una campaña de llamadas.
#[derive(Debug, Clone, Deserialize)]
pub struct StartCampaignRequest {
    /// Números crudos tal como los escribió el usuario;
    /// se normalizan antes de entrar al ciclo.
    pub numbers: Vec<String>,

    /// Usar voz sintetizada (TTS) en la llamada.
    #[serde(default = "default_ai_voice")]
    pub ai_voice: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartCampaignResponse {
    pub message: String,
    pub total: usize,
}

/// Estado de la campaña en curso. Una sola instancia por proceso,
/// detrás de un RwLock: el ciclo de marcado es el único escritor.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignStatus {
    pub running: bool,
    pub progress: u8, // 0-100
    pub current_target: String,
    pub total: usize,
}

impl Default for CampaignStatus {
    fn default() -> Self {
        CampaignStatus {
            running: false,
            progress: 0,
            current_target: String::new(),
            total: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
