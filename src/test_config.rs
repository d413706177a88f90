use crate::config::config::Config;

#[test]
fn defaults_point_at_the_local_service() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:4000");
    assert!(config.output.pretty);
}

#[test]
fn config_round_trips_through_toml() {
    let config = Config::default();

    let serialized = toml::to_string_pretty(&config).unwrap();
    let reloaded: Config = toml::from_str(&serialized).unwrap();

    assert_eq!(reloaded.api.base_url, config.api.base_url);
    assert_eq!(reloaded.output.pretty, config.output.pretty);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    // Only [api] present; [output] should fill in from defaults
    let config: Config = toml::from_str(
        r#"
[api]
base_url = "http://localhost:3000"
"#,
    )
    .unwrap();

    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert!(config.output.pretty);
}

#[test]
fn empty_file_parses_as_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.api.base_url, "http://localhost:4000");
    assert!(config.output.pretty);
}

#[test]
fn load_from_reads_an_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[api]
base_url = "http://localhost:3000"

[output]
pretty = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert!(!config.output.pretty);
}

#[test]
fn commented_template_parses_to_the_defaults() {
    let template = Config::create_default_with_comments();
    let config: Config = toml::from_str(&template).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:4000");
    assert!(config.output.pretty);
}
