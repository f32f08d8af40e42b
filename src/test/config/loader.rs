use crate::config::Config;

#[test]
fn parses_defaults_and_environment_overrides() {
    let yaml = r#"
defaults:
  socks_server: proxy.local
  port: 1080
environments:
  prod:
    socks_server: proxy.prod.internal
    port: 1081
  lab:
    port: 9050
"#;

    let config = serde_yaml::from_str::<Config>(yaml).expect("document should parse");
    assert_eq!(config.defaults.socks_server, "proxy.local");
    assert_eq!(config.defaults.port, 1080);
    assert_eq!(config.environments.len(), 2);
    assert_eq!(config.environments["prod"].socks_server, "proxy.prod.internal");
    assert_eq!(config.environments["lab"].socks_server, "");
    assert_eq!(config.environments["lab"].port, 9050);
}

#[test]
fn missing_sections_default_to_empty() {
    let config = serde_yaml::from_str::<Config>("defaults:\n  socks_server: proxy.local\n").expect("partial document should parse");
    assert_eq!(config.defaults.port, 0);
    assert!(config.environments.is_empty());
}

#[test]
fn rejects_unknown_top_level_fields() {
    let yaml = r#"
defaults:
  socks_server: proxy.local
  port: 1080
enviroments:
  prod:
    port: 1081
"#;

    let err = serde_yaml::from_str::<Config>(yaml).expect_err("misspelled section should fail schema validation");
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn rejects_unknown_entry_fields() {
    let yaml = r#"
defaults:
  socks_server: proxy.local
  prot: 1080
"#;

    let err = serde_yaml::from_str::<Config>(yaml).expect_err("misspelled entry field should fail schema validation");
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn rejects_malformed_document_structure() {
    assert!(serde_yaml::from_str::<Config>("defaults: [proxy.local, 1080]").is_err());
    assert!(serde_yaml::from_str::<Config>("defaults:\n  port: not-a-number\n").is_err());
}
