use super::*;

#[test]
fn test_cfg_deserialize_full() {
    let yaml = r#"
uid: 546195
page_size: 30
delay: 1.5
endpoint: "http://127.0.0.1:8080/x/space/arc/search"
timeout: 10
"#;

    let cfg: Cfg = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.uid, Some(546195));
    assert_eq!(cfg.page_size, Some(30));
    assert_eq!(cfg.delay, Some(1.5));
    assert_eq!(
        cfg.endpoint.as_deref(),
        Some("http://127.0.0.1:8080/x/space/arc/search")
    );

    let fetch = cfg.into_fetch_config().unwrap();
    assert_eq!(fetch.owner_id, 546195);
    assert_eq!(fetch.page_size, 30);
    assert_eq!(fetch.delay(), Duration::from_millis(1500));
    assert_eq!(fetch.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_cfg_defaults_apply() {
    let cfg: Cfg = serde_yaml::from_str("uid: 7").unwrap();
    let fetch = cfg.into_fetch_config().unwrap();
    assert_eq!(fetch, FetchConfig::new(7));
}

#[test]
fn test_cfg_unknown_key_rejected() {
    let yaml = r#"
uid: 7
pagesize: 10
"#;
    assert!(serde_yaml::from_str::<Cfg>(yaml).is_err());
}

#[test]
fn test_cfg_merge_prefers_overrides() {
    let file: Cfg = serde_yaml::from_str("{uid: 1, page_size: 10, delay: 2.0}").unwrap();
    let flags = Cfg {
        uid: Some(2),
        delay: Some(0.0),
        ..Default::default()
    };

    let merged = file.merge(flags);
    assert_eq!(merged.uid, Some(2));
    assert_eq!(merged.page_size, Some(10));
    assert_eq!(merged.delay, Some(0.0));
    assert_eq!(merged.endpoint, None);
}

#[test]
fn test_cfg_missing_uid() {
    let cfg = Cfg::default();
    assert!(matches!(cfg.into_fetch_config(), Err(Error::Config(_))));
}

#[test]
fn test_cfg_negative_timeout() {
    let cfg = Cfg {
        uid: Some(1),
        timeout: Some(-1.0),
        ..Default::default()
    };
    assert!(matches!(cfg.into_fetch_config(), Err(Error::Config(_))));
}

#[test]
fn test_parse_yaml_missing_file() {
    let err = Parser::parse_yaml("/nonexistent/bili-catalog.yaml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
