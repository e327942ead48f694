//! Tests for profile loading, saving, and CLI override merging.

use clap::Parser;
use dnsvet::{Config, Profile};
use std::fs;

#[test]
fn test_profile_load_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dnsvet.toml");
    fs::write(
        &path,
        r#"
server_prod = "1.2.3.4"
server_test = "1.2.3.5"
default_domain = ".example.com"
have_reverse_dns = true
ignore_ttl = false
sleep = 0.0
"#,
    )
    .unwrap();

    let profile = Profile::load(&path).unwrap();
    assert_eq!(profile.server_prod, "1.2.3.4");
    assert_eq!(profile.server_test, "1.2.3.5");
    assert_eq!(profile.default_domain, ".example.com");
    assert!(profile.have_reverse_dns);
    assert!(!profile.ignore_ttl);
    assert_eq!(profile.sleep, 0.0);
}

#[test]
fn test_profile_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dnsvet.toml");
    let profile = Profile {
        server_test: "10.0.0.2".to_string(),
        server_prod: "10.0.0.1".to_string(),
        default_domain: ".internal.example.org".to_string(),
        have_reverse_dns: false,
        ignore_ttl: true,
        sleep: 1.5,
    };
    profile.save(&path).unwrap();
    assert_eq!(Profile::load(&path).unwrap(), profile);
}

#[test]
fn test_resolve_merges_cli_overrides_onto_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dnsvet.toml");
    fs::write(
        &path,
        "server_prod = \"1.2.3.4\"\nserver_test = \"1.2.3.5\"\ndefault_domain = \".example.com\"\n",
    )
    .unwrap();

    let config = Config::try_parse_from([
        "dnsvet",
        "changes.txt",
        "--config",
        path.to_str().unwrap(),
        "--server-test",
        "9.9.9.9",
        "--no-reverse-dns",
        "--sleep",
        "2",
    ])
    .unwrap();

    let profile = Profile::resolve(&config).unwrap();
    assert_eq!(profile.server_test, "9.9.9.9");
    assert_eq!(profile.server_prod, "1.2.3.4");
    assert_eq!(profile.default_domain, ".example.com");
    assert!(!profile.have_reverse_dns);
    assert_eq!(profile.sleep, 2.0);
}

#[test]
fn test_resolve_fails_without_servers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dnsvet.toml");
    fs::write(&path, "default_domain = \".example.com\"\n").unwrap();

    let config =
        Config::try_parse_from(["dnsvet", "changes.txt", "--config", path.to_str().unwrap()])
            .unwrap();
    assert!(Profile::resolve(&config).is_err());
}

#[test]
fn test_resolve_with_missing_explicit_config_is_an_error() {
    let config =
        Config::try_parse_from(["dnsvet", "changes.txt", "--config", "/nonexistent/dnsvet.toml"])
            .unwrap();
    assert!(Profile::resolve(&config).is_err());
}

#[test]
fn test_resolve_normalizes_cli_domain_without_dot() {
    let config = Config::try_parse_from([
        "dnsvet",
        "changes.txt",
        "--config",
        "/dev/null",
        "--server-test",
        "1.2.3.5",
        "--server-prod",
        "1.2.3.4",
        "--default-domain",
        "example.com",
    ])
    .unwrap();
    let profile = Profile::resolve(&config).unwrap();
    assert_eq!(profile.default_domain, ".example.com");
}
