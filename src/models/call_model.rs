//! models/call_model.rs
//! Resultado de un intento de llamada y filas del log persistido.

use serde::Serialize;
use sqlx::FromRow;

/// Clasificación explícita del resultado de una llamada.
/// Se deriva una sola vez del texto de estado y se usa tanto para
/// el sufijo de voz IA como para los conteos del log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDisposition {
    Connected,
    Failed,
}

impl CallDisposition {
    pub fn classify(status: &str) -> Self {
        if status.contains("connected") {
            CallDisposition::Connected
        } else {
            CallDisposition::Failed
        }
    }
}

/// Lo que retorna el proveedor por cada intento. Nunca es un error:
/// un fallo del proveedor real cae de forma transparente al simulado,
/// y `simulated` deja ese camino visible en el tipo.
#[derive(Debug, Clone)]
pub struct CallOutcome {
    pub call_id: String,
    pub status: String,
    /// mm:ss para llamadas simuladas; el proveedor real no conoce
    /// la duración al momento de crear la llamada.
    pub duration: Option<String>,
    pub simulated: bool,
}

impl CallOutcome {
    pub fn disposition(&self) -> CallDisposition {
        CallDisposition::classify(&self.status)
    }
}

/// Fila de la tabla `calls` (append-only, nunca se muta).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CallLogRecord {
    pub id: i64,
    pub phone_number: String,
    pub status: String,
    pub call_duration: Option<String>,
    pub created_at: String,
}

/// Registros recientes más conteos derivados, para el dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct CallLogsResponse {
    pub total_calls: usize,
    pub connected_calls: usize,
    pub failed_calls: usize,
    pub items: Vec<CallLogRecord>,
}
