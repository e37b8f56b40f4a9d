use crate::engine::types::{Content, ContentKind};
use crate::test_helpers::factories::ContentFactory;

#[test]
fn test_content_factory_defaults() {
    let content = ContentFactory::new().create();
    assert_eq!(content.kind(), ContentKind::Rows);
    assert_eq!(content.len(), 20);

    let Content::Rows(rows) = content else {
        panic!("expected rows");
    };
    assert_eq!(rows[0], vec!["station-00", "1000", "calibrating"]);
    assert_eq!(rows[1], vec!["station-01", "1005", "ok"]);
}

#[test]
fn test_content_factory_with_overrides() {
    let content = ContentFactory::new()
        .with("rows", 4)
        .with("start", 7)
        .with("step", 0)
        .with("stations", 1)
        .create();

    let Content::Rows(rows) = content else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r[0] == "station-00" && r[1] == "7"));
}

#[test]
fn test_content_factory_literals() {
    assert_eq!(
        ContentFactory::lines(&["a", "b"]),
        Content::Lines(vec!["a".into(), "b".into()])
    );
    assert_eq!(
        ContentFactory::numeric_series(&[1, -2]),
        Content::Rows(vec![vec!["1".into()], vec!["-2".into()]])
    );
}
