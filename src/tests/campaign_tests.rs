//! tests/campaign_tests.rs
//! Pruebas del orquestador: ciclo completo, exclusividad,
//! llamadas sueltas y cancelación.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_rt::test;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::config::dialer_config::DialerConfig;
    use crate::errors::DialerError;
    use crate::services::call_log_service::CallLogService;
    use crate::services::campaign_service::CampaignService;
    use crate::services::command_service::CommandService;
    use crate::services::provider_service::ProviderService;

    fn fast_config() -> DialerConfig {
        DialerConfig {
            intercall_min_delay_secs: 0.0,
            intercall_max_delay_secs: 0.0,
            ..DialerConfig::default()
        }
    }

    fn slow_config() -> DialerConfig {
        DialerConfig {
            intercall_min_delay_secs: 0.2,
            intercall_max_delay_secs: 0.2,
            ..DialerConfig::default()
        }
    }

    async fn create_test_service_with_provider(
        config: DialerConfig,
        provider: ProviderService,
    ) -> (CampaignService, CallLogService) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("No se pudo crear el pool en memoria");
        let call_logs = CallLogService::new(pool);
        call_logs
            .init_schema()
            .await
            .expect("Fallo el bootstrap del esquema");

        let campaigns = CampaignService::new(provider, call_logs.clone(), config);
        (campaigns, call_logs)
    }

    async fn create_test_service(config: DialerConfig) -> (CampaignService, CallLogService) {
        // Sin credenciales y con delays simulados en cero.
        let provider = ProviderService::new_test(None, "http://127.0.0.1:9");
        create_test_service_with_provider(config, provider).await
    }

    async fn wait_until_idle(svc: &CampaignService) {
        for _ in 0..400 {
            if !svc.status().await.running {
                return;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        panic!("La campaña no volvió a reposo a tiempo");
    }

    #[test]
    async fn test_full_campaign_run() {
        let (campaigns, call_logs) = create_test_service(fast_config()).await;

        let targets = vec![
            "+919876543210".to_string(),
            "+919812345678".to_string(),
            "+919811111111".to_string(),
        ];
        let total = campaigns
            .start_campaign(targets, false)
            .await
            .expect("La campaña debió arrancar");
        assert_eq!(total, 3);

        wait_until_idle(&campaigns).await;

        let status = campaigns.status().await;
        assert!(!status.running);
        assert_eq!(status.progress, 100);
        assert_eq!(status.total, 3);
        assert_eq!(status.current_target, "Calling 3/3: +919811111111");

        // Exactamente un registro por objetivo, en orden de marcado
        // (el log retorna cronológico inverso).
        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert_eq!(logs.total_calls, 3);
        assert_eq!(logs.items[2].phone_number, "+919876543210");
        assert_eq!(logs.items[1].phone_number, "+919812345678");
        assert_eq!(logs.items[0].phone_number, "+919811111111");
    }

    #[test]
    async fn test_progress_is_monotone() {
        let (campaigns, _call_logs) = create_test_service(slow_config()).await;

        let targets: Vec<String> = (0..4).map(|i| format!("+9198765432{:02}", i)).collect();
        campaigns
            .start_campaign(targets, false)
            .await
            .expect("La campaña debió arrancar");

        let mut observed = vec![0u8];
        for _ in 0..400 {
            let status = campaigns.status().await;
            observed.push(status.progress);
            if !status.running {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(observed.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*observed.last().unwrap(), 100);
    }

    #[test]
    async fn test_second_start_is_rejected() {
        let (campaigns, call_logs) = create_test_service(slow_config()).await;

        let targets: Vec<String> = (0..5).map(|i| format!("+9198765432{:02}", i)).collect();
        campaigns
            .start_campaign(targets, false)
            .await
            .expect("La primera campaña debió arrancar");

        // Segundo start y llamada suelta: rechazados sin tocar estado.
        let err = campaigns
            .start_campaign(vec!["+919812345678".to_string()], false)
            .await
            .expect_err("Debió rechazarse con campaña en curso");
        assert_eq!(err, DialerError::CampaignInProgress);

        let err = campaigns
            .place_single_call("+919812345678", false)
            .await
            .expect_err("Debió rechazarse con campaña en curso");
        assert_eq!(err, DialerError::CampaignInProgress);

        let status = campaigns.status().await;
        assert!(status.running);
        assert_eq!(status.total, 5);

        wait_until_idle(&campaigns).await;

        // Solo la campaña original escribió registros.
        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert_eq!(logs.total_calls, 5);
        assert!(logs
            .items
            .iter()
            .all(|r| r.phone_number != "+919812345678"));
    }

    #[test]
    async fn test_single_call_does_not_touch_campaign_fields() {
        let (campaigns, call_logs) = create_test_service(fast_config()).await;

        let outcome = campaigns
            .place_single_call("+919876543210", false)
            .await
            .expect("La llamada suelta debió aceptarse");
        assert!(outcome.simulated);

        let status = campaigns.status().await;
        assert!(!status.running);
        assert_eq!(status.progress, 0);
        assert_eq!(status.total, 0);
        assert_eq!(status.current_target, "");

        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert_eq!(logs.total_calls, 1);
        assert_eq!(logs.items[0].phone_number, "+919876543210");
    }

    #[test]
    async fn test_command_to_single_call_end_to_end() {
        let (campaigns, call_logs) = create_test_service(fast_config()).await;
        let commands = CommandService::new();
        let config = DialerConfig::default();

        // "call 9876543210" → +919876543210 → exactamente un registro.
        let number = commands
            .extract_number("call 9876543210", &config)
            .expect("El comando debió producir un número");
        assert_eq!(number, "+919876543210");

        campaigns
            .place_single_call(&number, true)
            .await
            .expect("La llamada debió aceptarse");

        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert_eq!(logs.total_calls, 1);
        assert_eq!(logs.items[0].phone_number, "+919876543210");

        // Un comando sin número no escribe nada.
        assert_eq!(commands.extract_number("hello there", &config), None);
        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert_eq!(logs.total_calls, 1);
    }

    #[test]
    async fn test_dropped_single_call_returns_to_idle() {
        // Llamada simulada larga, y un caller que abandona el await
        // a mitad de la llamada (actix descarta el future del
        // handler cuando el cliente se desconecta).
        let provider = ProviderService::new_test_with_delay(None, "http://127.0.0.1:9", 0.5);
        let (campaigns, call_logs) =
            create_test_service_with_provider(fast_config(), provider).await;

        let dropped = tokio::time::timeout(
            Duration::from_millis(50),
            campaigns.place_single_call("+919876543210", false),
        )
        .await;
        assert!(dropped.is_err(), "El timeout debió descartar el future");

        // La llamada sigue en una tarea propia: termina, escribe su
        // registro y el orquestador vuelve a reposo.
        wait_until_idle(&campaigns).await;

        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert_eq!(logs.total_calls, 1);
        assert_eq!(logs.items[0].phone_number, "+919876543210");

        // El flag no quedó colgado: se aceptan pedidos nuevos.
        campaigns
            .place_single_call("+919812345678", false)
            .await
            .expect("Debió aceptar una llamada nueva");
        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert_eq!(logs.total_calls, 2);
    }

    #[test]
    async fn test_cancel_stops_loop_early() {
        let (campaigns, call_logs) = create_test_service(slow_config()).await;

        let targets: Vec<String> = (0..10).map(|i| format!("+9198765432{:02}", i)).collect();
        campaigns
            .start_campaign(targets, false)
            .await
            .expect("La campaña debió arrancar");

        tokio::time::sleep(Duration::from_millis(300)).await;
        campaigns.request_cancel();

        wait_until_idle(&campaigns).await;

        let logs = call_logs.recent_logs(100).await.expect("recent_logs");
        assert!(logs.total_calls >= 1);
        assert!(logs.total_calls < 10);

        // Cancelada la anterior, el orquestador acepta otra campaña.
        campaigns
            .start_campaign(vec!["+919876543210".to_string()], false)
            .await
            .expect("Debió aceptar una campaña nueva");
        wait_until_idle(&campaigns).await;
    }
}
