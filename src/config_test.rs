use super::*;

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn explicit_host_and_port_are_used() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_values(Some("::1"), None).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "[::1]:3000");
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_values(None, Some("http")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
    assert_eq!(err.to_string(), "invalid PORT 'http': expected an integer in 1..=65535");
}

#[test]
fn zero_and_overflowing_ports_are_rejected() {
    assert!(matches!(ServerConfig::from_values(None, Some("0")), Err(ConfigError::InvalidPort(_))));
    assert!(matches!(ServerConfig::from_values(None, Some("70000")), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn hostname_is_rejected() {
    let err = ServerConfig::from_values(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".into()));
}
