use std::io::Write;

use ingest_relay::config::{parse_file, resolve, Overrides, PartialConfig, Resolver, DEFAULT_PORT};
use ingest_relay::{ConfigError, ServerConfig};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("config-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn no_file_and_no_overrides_yields_defaults() {
    let config = resolve("", &Overrides::default()).unwrap();
    assert_eq!(config, ServerConfig::defaults());
}

#[test]
fn verbose_only_file_keeps_default_port() {
    for verbose in [true, false] {
        let file = config_file(".yaml", &format!("verbose: {verbose}"));
        let config = resolve(file.path(), &Overrides::default()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.verbose, verbose);
    }
}

#[test]
fn override_wins_for_its_field_only() {
    let file = config_file(".yaml", "port: 8081\nverbose: true");
    let config = resolve(file.path(), &Overrides::default().with_port(9999)).unwrap();
    assert_eq!(
        config,
        ServerConfig {
            port: 9999,
            verbose: true
        }
    );

    let config = resolve(file.path(), &Overrides::default().with_verbose(false)).unwrap();
    assert_eq!(
        config,
        ServerConfig {
            port: 8081,
            verbose: false
        }
    );
}

#[test]
fn empty_file_matches_no_file() {
    let file = config_file(".yaml", "");
    assert_eq!(parse_file(file.path()).unwrap(), parse_file("").unwrap());
    assert_eq!(
        resolve(file.path(), &Overrides::default()).unwrap(),
        ServerConfig::defaults()
    );
}

#[test]
fn type_mismatch_is_never_defaulted() {
    let file = config_file(".yaml", "port: abc");
    let err = resolve(file.path(), &Overrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::TypeError { .. }), "{err}");
}

#[test]
fn missing_file_is_read_error() {
    let err = Resolver::new()
        .with_file("-invalid filepath-")
        .resolve()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }), "{err}");
}

#[test]
fn scenario_file_only() {
    let file = config_file(".yaml", "port: 8081\nverbose: true");
    let config = Resolver::new().with_file(file.path()).resolve().unwrap();
    assert_eq!(
        config,
        ServerConfig {
            port: 8081,
            verbose: true
        }
    );
}

#[test]
fn scenario_file_port_with_verbose_flag() {
    let file = config_file(".yaml", "port: 8081");
    let config = resolve(file.path(), &PartialConfig::default().with_verbose(true)).unwrap();
    assert_eq!(
        config,
        ServerConfig {
            port: 8081,
            verbose: true
        }
    );
}

#[test]
fn scenario_port_flag_without_file() {
    let config = resolve("", &Overrides::default().with_port(9090)).unwrap();
    assert_eq!(
        config,
        ServerConfig {
            port: 9090,
            verbose: false
        }
    );
}

#[test]
fn toml_and_yaml_resolve_alike() {
    let yaml = config_file(".yml", "port: 8081\nverbose: true\n");
    let toml = config_file(".toml", "port = 8081\nverbose = true\n");
    assert_eq!(
        resolve(yaml.path(), &Overrides::default()).unwrap(),
        resolve(toml.path(), &Overrides::default()).unwrap()
    );
}

#[test]
fn verbose_flag_overrides_file_false() {
    let file = config_file(".yaml", "verbose: false");
    let config = resolve(file.path(), &Overrides::default().with_verbose(true)).unwrap();
    assert!(config.verbose);
}
