//! tests/command_tests.rs
//! Pruebas del parser de comandos de texto.

#[cfg(test)]
mod tests {
    use crate::config::dialer_config::DialerConfig;
    use crate::services::command_service::CommandService;

    fn cfg() -> DialerConfig {
        DialerConfig::default()
    }

    #[test]
    fn test_call_phrase() {
        let svc = CommandService::new();
        assert_eq!(
            svc.extract_number("call 9876543210", &cfg()),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let svc = CommandService::new();
        assert_eq!(
            svc.extract_number("CALL 9876543210", &cfg()),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn test_dial_phrase_with_hyphens() {
        let svc = CommandService::new();
        assert_eq!(
            svc.extract_number("please dial 98765-43210", &cfg()),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn test_call_to_phrase() {
        let svc = CommandService::new();
        assert_eq!(
            svc.extract_number("call to 919876543210", &cfg()),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn test_make_a_call_to_with_plus_capture() {
        let svc = CommandService::new();
        // 11 dígitos: ninguna regla de conteo aplica, el capturado
        // pasa sin cambios.
        assert_eq!(
            svc.extract_number("make a call to +14155552671", &cfg()),
            Some("+14155552671".to_string())
        );
    }

    #[test]
    fn test_capture_is_trimmed() {
        let svc = CommandService::new();
        assert_eq!(
            svc.extract_number("call 9876543210 please", &cfg()),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn test_no_pattern_match() {
        let svc = CommandService::new();
        assert_eq!(svc.extract_number("hello there", &cfg()), None);
        assert_eq!(svc.extract_number("", &cfg()), None);
        assert_eq!(svc.extract_number("call me maybe", &cfg()), None);
    }
}
