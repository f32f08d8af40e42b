use crate::config::{Config, ConfigError, ProxyEntry, ResolvedProxy};
use std::collections::HashMap;

fn base_config() -> Config {
    Config {
        defaults: ProxyEntry {
            socks_server: "proxy.local".to_string(),
            port: 1080,
        },
        environments: HashMap::new(),
    }
}

#[test]
fn resolves_defaults_when_no_environment_requested() {
    let config = base_config();
    let expected = ResolvedProxy {
        server: "proxy.local".to_string(),
        port: 1080,
    };

    assert_eq!(config.resolve(None).expect("defaults should resolve"), expected);
    assert_eq!(
        config.resolve(Some("")).expect("empty name should mean defaults"),
        expected
    );
}

#[test]
fn port_only_override_keeps_default_server() {
    let mut config = base_config();
    config.environments.insert(
        "lab".to_string(),
        ProxyEntry {
            socks_server: String::new(),
            port: 9050,
        },
    );

    let resolved = config.resolve(Some("lab")).expect("override should resolve");
    assert_eq!(resolved.server, "proxy.local");
    assert_eq!(resolved.port, 9050);
}

#[test]
fn server_only_override_keeps_default_port() {
    let mut config = base_config();
    config.environments.insert(
        "prod".to_string(),
        ProxyEntry {
            socks_server: "proxy.prod.internal".to_string(),
            port: 0,
        },
    );

    let resolved = config.resolve(Some("prod")).expect("override should resolve");
    assert_eq!(resolved.server, "proxy.prod.internal");
    assert_eq!(resolved.port, 1080);
}

#[test]
fn empty_override_entry_inherits_all_defaults() {
    let mut config = base_config();
    config.environments.insert("noop".to_string(), ProxyEntry::default());

    let resolved = config.resolve(Some("noop")).expect("empty override should resolve");
    assert_eq!(resolved.server, "proxy.local");
    assert_eq!(resolved.port, 1080);
}

#[test]
fn unknown_environment_fails_with_its_name_in_the_message() {
    let config = base_config();
    let err = config.resolve(Some("staging")).expect_err("unknown environment should fail");

    assert!(matches!(&err, ConfigError::EnvironmentNotFound(name) if name == "staging"));
    assert_eq!(err.to_string(), "environment 'staging' not found in config");
}

#[test]
fn fails_when_resolved_server_is_empty() {
    let mut config = base_config();
    config.defaults.socks_server = String::new();
    config.environments.insert(
        "lab".to_string(),
        ProxyEntry {
            socks_server: String::new(),
            port: 9050,
        },
    );

    assert!(matches!(config.resolve(None), Err(ConfigError::SocksServerMissing)));
    assert!(matches!(config.resolve(Some("lab")), Err(ConfigError::SocksServerMissing)));
}
