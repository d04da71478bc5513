//! Configuration Loader Tests
//!
//! Uses `figment::Jail` so environment and working directory changes are
//! isolated and serialized.

use figment::Jail;
use kvs_domain::value_objects::BackendKind;
use kvs_infrastructure::config::{AppConfig, ConfigLoader};

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.storage.backend, BackendKind::Memory);
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn test_default_config_file_in_working_dir() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "kvs.toml",
            r#"
                [storage]
                backend = "expiring"
                default_ttl_secs = 120
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.storage.backend, BackendKind::Expiring);
        assert_eq!(config.storage.default_ttl_secs, 120);
        assert_eq!(config.storage.sweep_interval_secs, 0);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
                [logging]
                level = "warn"

                [storage]
                backend = "memory"
            "#,
        )?;
        jail.set_env("KVS__STORAGE__BACKEND", "expiring");
        jail.set_env("KVS__STORAGE__SWEEP_INTERVAL_SECS", "15");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.storage.backend, BackendKind::Expiring);
        assert_eq!(config.storage.sweep_interval_secs, 15);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("SESSIONS__STORAGE__DEFAULT_TTL_SECS", "900");

        let config = ConfigLoader::new()
            .with_env_prefix("SESSIONS")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.storage.default_ttl_secs, 900);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("absent.toml");
        let config = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(config.storage.backend, BackendKind::Memory);
        assert_eq!(
            loader.config_path().map(|p| p.to_string_lossy().into_owned()),
            Some("absent.toml".to_string())
        );
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_fails_fast() {
    Jail::expect_with(|jail| {
        jail.set_env("KVS__LOGGING__LEVEL", "chatty");

        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_unknown_backend_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("KVS__STORAGE__BACKEND", "floppy");

        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.storage.backend = BackendKind::Expiring;
    config.storage.default_ttl_secs = 30;

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("KVS_SAVE_TEST");
    loader.save_to_file(&config, &path).unwrap();
    let reloaded = loader.reload().unwrap();

    assert_eq!(reloaded.storage.backend, BackendKind::Expiring);
    assert_eq!(reloaded.storage.default_ttl_secs, 30);
}

#[test]
fn test_remote_backend_loads_but_is_not_local() {
    Jail::expect_with(|jail| {
        jail.set_env("KVS__STORAGE__BACKEND", "redis");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.storage.backend, BackendKind::Redis);
        assert!(!config.storage.backend.is_local());
        Ok(())
    });
}
