use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, 3000);
    assert!(cfg.public_dir.ends_with("public"));
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("FLOATCHAT_HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("FLOATCHAT_PUBLIC_DIR", "/srv/floatchat"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/floatchat"));
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup(&[("FLOATCHAT_HOST", "::1")])).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "[::1]:3000");
}

#[test]
fn bad_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "70000".into() });
}

#[test]
fn bad_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("FLOATCHAT_HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
    assert!(err.to_string().contains("FLOATCHAT_HOST"));
}
