use buoysense_config::AppConfig;

// 环境变量是进程级状态，顺序放在同一个测试里避免并行干扰。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("BUOYSENSE_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("BUOYSENSE_SESSION_TTL_SECONDS", "3600");
        std::env::remove_var("BUOYSENSE_OPENWEATHER_API_KEY");
        std::env::set_var("BUOYSENSE_MAPBOX_TOKEN", "pk.test");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.session_ttl_seconds, 3600);
    assert!(config.openweather_api_key.is_none());
    assert_eq!(config.map_tile_token.as_deref(), Some("pk.test"));

    unsafe {
        std::env::set_var("BUOYSENSE_SESSION_TTL_SECONDS", "not-a-number");
    }
    let err = AppConfig::from_env().expect_err("invalid ttl");
    assert!(err.to_string().contains("BUOYSENSE_SESSION_TTL_SECONDS"));

    unsafe {
        std::env::remove_var("BUOYSENSE_SESSION_TTL_SECONDS");
    }
    let config = AppConfig::from_env().expect("defaults");
    assert_eq!(config.session_ttl_seconds, 86_400);
}
