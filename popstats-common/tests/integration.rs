//! Integration tests for popstats-common library.

use chrono::NaiveDate;
use popstats_common::{
    BucketRecord, CalendarAnchor, Error, ExportType, Format, Locale, PanelConfig,
    StatisticsSnapshot, TimeRange, decode_auto, encode, export_to_dir, parse_config,
    read_snapshot,
};

#[test]
fn test_snapshot_file_workflow() {
    let snapshot = StatisticsSnapshot {
        today: (0..24)
            .map(|h| BucketRecord::new().with_count("totalBlocked", h))
            .collect(),
        last_year: vec![BucketRecord::new().with_count("totalRequests", 1000); 12],
        ..Default::default()
    };

    let dir = tempfile::tempdir().expect("tempdir");

    // JSON on disk
    let json_path = dir.path().join("stats.json");
    std::fs::write(&json_path, encode(&snapshot, Format::Json).unwrap()).unwrap();
    let from_json = read_snapshot(&json_path).expect("JSON snapshot");
    assert_eq!(from_json, snapshot);

    // CBOR on disk
    let cbor_path = dir.path().join("stats.cbor");
    std::fs::write(&cbor_path, encode(&snapshot, Format::Cbor).unwrap()).unwrap();
    let from_cbor = read_snapshot(&cbor_path).expect("CBOR snapshot");
    assert_eq!(from_cbor.buckets(TimeRange::Day).len(), 24);
    assert_eq!(
        from_cbor.buckets(TimeRange::Day)[23].count(&"totalBlocked".into()),
        23
    );
}

#[test]
fn test_background_page_payload() {
    // Shape produced by the background page, with sparse counters.
    let payload = br#"{
        "today": [{"totalRequests": 10, "totalBlocked": 2}, {}],
        "lastWeek": [],
        "lastMonth": [],
        "lastYear": []
    }"#;

    let snapshot: StatisticsSnapshot = decode_auto(payload).unwrap();
    let blocked: Vec<u64> = snapshot
        .today
        .iter()
        .map(|b| b.count(&"totalBlocked".into()))
        .collect();
    assert_eq!(blocked, vec![2, 0]);
}

#[test]
fn test_unknown_range_key() {
    for key in ["day", "week", "month", "year"] {
        assert!(key.parse::<TimeRange>().is_ok());
    }
    assert!(matches!(
        "quarter".parse::<TimeRange>(),
        Err(Error::UnsupportedRange(_))
    ));
}

#[test]
fn test_config_drives_catalog_and_export() {
    let config: PanelConfig = parse_config(
        r#"{
            locale: { messages: { popup_statistics_week_days_sun: "So" } },
            export: { app_version: "5.2.1" },
        }"#,
    )
    .unwrap();

    let catalog = config.catalog();
    assert_eq!(catalog.weekday_name(6), "So");
    assert_eq!(catalog.weekday_name(0), "Mon");

    let at = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = export_to_dir(
        dir.path(),
        ExportType::Settings,
        &config.export.app_version,
        b"{}",
        &at,
    )
    .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "adg_ext_settings_5.2.1_311224-235959.json"
    );
}

#[test]
fn test_anchor_at_year_boundary() {
    let at = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let anchor = CalendarAnchor::from_datetime(&at);

    assert_eq!(anchor.month, 0);
    assert_eq!(anchor.day_of_month, 1);
    assert_eq!(anchor.days_in_previous_month, 31);
    // 2025-01-01 is a Wednesday.
    assert_eq!(anchor.weekday, 2);
}
