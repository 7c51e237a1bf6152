#[cfg(test)]
mod tests {
    use std::fs;
    use taskboard::libs::config::{Config, ServerConfig, API_URL_ENV, CONFIG_FILE_NAME, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
    use taskboard::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the config at a fresh temporary data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
                api_url: "https://tasks.example.com/api".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.server.is_none());

        let server = ServerConfig::default();
        assert_eq!(server.api_url, DEFAULT_API_URL);
        assert_eq!(server.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                timeout_secs: 30,
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        let read_config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_timeout_uses_default(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, format!(r#"{{"server": {{"api_url": "{}"}}}}"#, ctx.api_url)).unwrap();

        let server = Config::read_from(&ctx.storage).unwrap().server.unwrap();
        assert_eq!(server.api_url, ctx.api_url);
        assert_eq!(server.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides_api_url(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                timeout_secs: 5,
            }),
        };
        std::env::set_var(API_URL_ENV, "http://127.0.0.1:9999/api");
        let server = config.server_or_default();
        std::env::remove_var(API_URL_ENV);

        assert_eq!(server.api_url, "http://127.0.0.1:9999/api");
        assert_eq!(server.timeout_secs, 5);
    }
}
