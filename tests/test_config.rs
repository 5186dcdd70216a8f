mod common;

use common::TempRoot;
use docroot::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.port, 9980);
    assert_eq!(cfg.not_found_body, "The requested page not found");
    assert_eq!(cfg.max_line_length, 8192);
    assert_eq!(cfg.max_connections, None);
}

#[test]
fn test_config_listen_addr() {
    assert_eq!(Config::default().listen_addr(), "localhost:9980");
}

#[test]
fn test_config_from_yaml_partial_override() {
    let cfg = Config::from_yaml("port: 8080\nmax_connections: 16\n").unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.max_connections, Some(16));
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.not_found_body, "The requested page not found");
}

#[test]
fn test_config_from_yaml_empty_document() {
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
}

#[test]
fn test_config_from_yaml_invalid() {
    assert!(Config::from_yaml("port: not-a-number").is_err());
}

#[test]
fn test_config_load_without_file() {
    assert_eq!(Config::load(None).unwrap(), Config::default());
}

#[test]
fn test_config_load_from_file() {
    let tmp = TempRoot::new("config");
    let path = tmp.write(
        "server.yaml",
        b"host: 0.0.0.0\nnot_found_body: gone\nmax_line_length: 1024\n",
    );

    let cfg = Config::load(Some(path.as_path())).unwrap();

    assert_eq!(cfg.listen_addr(), "0.0.0.0:9980");
    assert_eq!(cfg.not_found_body, "gone");
    assert_eq!(cfg.max_line_length, 1024);
}

#[test]
fn test_config_load_missing_file() {
    let tmp = TempRoot::new("config-missing");
    assert!(Config::load(Some(tmp.path().join("absent.yaml").as_path())).is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}

#[test]
fn test_config_rejects_zero_max_connections() {
    assert!(Config::from_yaml("max_connections: 0").is_err());
}

#[test]
fn test_config_rejects_max_connections_beyond_semaphore_limit() {
    let yaml = format!("max_connections: {}", tokio::sync::Semaphore::MAX_PERMITS + 1);
    assert!(Config::from_yaml(&yaml).is_err());

    let yaml = format!("max_connections: {}", tokio::sync::Semaphore::MAX_PERMITS);
    assert!(Config::from_yaml(&yaml).is_ok());
}

#[test]
fn test_config_accepts_huge_max_line_length() {
    let cfg = Config::from_yaml("max_line_length: 18446744073709551615").unwrap();
    assert_eq!(cfg.max_line_length, usize::MAX);
}
