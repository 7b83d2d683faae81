//! services/command_service.rs
//! Extrae un número telefónico de una instrucción en texto libre.

use regex::Regex;

use crate::config::dialer_config::DialerConfig;
use crate::services::number_service;

#[derive(Debug, Clone)]
pub struct CommandService {
    patterns: Vec<Regex>,
}

impl CommandService {
    pub fn new() -> Self {
        // El orden importa: gana el primer patrón que coincide.
        let patterns = [
            r"call\s+(\+?[\d\s\-]+)",
            r"call\s+to\s+(\+?[\d\s\-]+)",
            r"dial\s+(\+?[\d\s\-]+)",
            r"make\s+a\s+call\s+to\s+(\+?[\d\s\-]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("patrón de comando inválido"))
        .collect();

        CommandService { patterns }
    }

    /// Busca el primer patrón que coincida contra el comando en
    /// minúsculas y retorna el número capturado, ya normalizado.
    /// None si ningún patrón coincide.
    pub fn extract_number(&self, command: &str, config: &DialerConfig) -> Option<String> {
        let lowered = command.to_lowercase();

        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(&lowered) {
                if let Some(m) = caps.get(1) {
                    let captured = m.as_str().trim();
                    return Some(number_service::normalize_command_capture(captured, config));
                }
            }
        }

        None
    }
}

impl Default for CommandService {
    fn default() -> Self {
        Self::new()
    }
}
