//! errors.rs
//! Errores visibles para el caller: rechazos por exclusividad y
//! fallos de validación. Los mensajes son los que retorna la API.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialerError {
    #[error("Calling already in progress")]
    CampaignInProgress,

    #[error("No phone numbers provided")]
    NoNumbers,

    #[error("No valid phone numbers found")]
    NoValidNumbers,

    #[error("No command provided")]
    NoCommand,

    #[error("No phone number found in command")]
    NoNumberInCommand,

    /// Fallo inesperado dentro de un intento de llamada; el
    /// orquestador ya volvió a reposo cuando se retorna.
    #[error("Call failed unexpectedly")]
    CallFault,
}
