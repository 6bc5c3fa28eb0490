use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use slugsync_extract::{
    ElementKind, FieldHost, FixedClock, HostError, MemoryElement, MemoryHost, extract_field,
    get_processed_field_value, normalize_text,
};
use slugsync_types::FieldName;

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap(),
    )
}

// ── normalize_text ───────────────────────────────────────────────

#[test]
fn normalize_trims_and_drops_blank() {
    assert_eq!(normalize_text(Some("  a b ".into())), Some("a b".into()));
    assert_eq!(normalize_text(Some("   ".into())), None);
    assert_eq!(normalize_text(None), None);
}

// ── Extraction ───────────────────────────────────────────────────

#[tokio::test]
async fn plain_field_value_is_returned_trimmed() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("title", "  Hello World "));

    let value = get_processed_field_value(&host, &FieldName::from("title"), &clock())
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("Hello World"));
}

#[tokio::test]
async fn missing_field_yields_none() {
    let host = MemoryHost::new();
    let value = get_processed_field_value(&host, &FieldName::from("title"), &clock())
        .await
        .unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn blank_field_yields_none() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::of_kind("body", ElementKind::ContentEditable, Some("  ".into())));
    let extracted = extract_field(&host, &FieldName::from("body")).await.unwrap();
    assert_eq!(extracted.raw, None);
}

#[tokio::test]
async fn date_named_field_is_reformatted() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("publish_date", "2025-02-03"));

    let extracted = extract_field(&host, &FieldName::from("publish_date")).await.unwrap();
    assert!(extracted.classified_as_date);
    assert_eq!(extracted.processed(&clock()).as_deref(), Some("03022025-0930"));
}

#[tokio::test]
async fn date_marked_element_is_reformatted() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("published", "February 28th, 2025").with_input_type("date"));

    let value = get_processed_field_value(&host, &FieldName::from("published"), &clock())
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("28022025-093000"));
}

#[tokio::test]
async fn unparseable_date_text_is_returned_raw() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("event_date", "sometime soon"));

    let value = get_processed_field_value(&host, &FieldName::from("event_date"), &clock())
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("sometime soon"));
}

#[tokio::test]
async fn non_date_field_keeps_date_text() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("title", "2025-02-03"));

    let value = get_processed_field_value(&host, &FieldName::from("title"), &clock())
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("2025-02-03"));
}

#[tokio::test]
async fn alias_lookup_is_classified_by_logical_name() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("meta", "2024/05/12").with_alias("release_date"));

    let extracted = extract_field(&host, &FieldName::from("release_date")).await.unwrap();
    assert!(extracted.classified_as_date);
    assert_eq!(extracted.processed(&clock()).as_deref(), Some("12052024-0930"));
}

// ── MemoryHost ───────────────────────────────────────────────────

#[tokio::test]
async fn exact_field_beats_alias() {
    let host = MemoryHost::new();
    let alias_id = host.insert(MemoryElement::input("other", "from alias").with_alias("title"));
    let exact_id = host.insert(MemoryElement::input("title", "from field"));
    assert!(alias_id < exact_id);

    let handle = host.resolve_field(&FieldName::from("title")).await.unwrap();
    assert_eq!(handle.id, exact_id);
}

#[tokio::test]
async fn write_records_notification() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("slug", ""));
    let field = FieldName::from("slug");
    let handle = host.resolve_field(&field).await.unwrap();

    host.write_value(&handle, "hello-world").await.unwrap();

    assert_eq!(host.write_count(), 1);
    assert_eq!(host.value(&field).as_deref(), Some("hello-world"));
    let notes = host.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].field, field);
    assert_eq!(notes[0].value, "hello-world");
}

#[tokio::test]
async fn user_edit_does_not_notify() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("title", "a"));
    assert!(host.set_value(&FieldName::from("title"), Some("b")));
    assert!(!host.set_value(&FieldName::from("missing"), Some("b")));
    assert_eq!(host.write_count(), 0);
    assert!(host.notifications().is_empty());
}

#[tokio::test]
async fn failed_write_leaves_value_and_count() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("slug", "keep"));
    let field = FieldName::from("slug");
    let handle = host.resolve_field(&field).await.unwrap();

    host.fail_writes(true);
    let err = host.write_value(&handle, "new").await.unwrap_err();
    assert!(matches!(err, HostError::WriteRejected(_)));
    assert_eq!(host.write_count(), 0);
    assert_eq!(host.value(&field).as_deref(), Some("keep"));
}

#[tokio::test]
async fn removed_element_is_detached() {
    let host = MemoryHost::new();
    host.insert(MemoryElement::input("slug", "x"));
    let field = FieldName::from("slug");
    let handle = host.resolve_field(&field).await.unwrap();

    host.remove(&field);
    assert!(matches!(
        host.read_value(&handle).await,
        Err(HostError::Detached(_))
    ));
    assert!(host.resolve_field(&field).await.is_none());
}

#[tokio::test]
async fn status_value_roundtrip() {
    let host = MemoryHost::new();
    let status = FieldName::from("status");
    assert_eq!(host.current_status_value(&status).await, None);
    host.set_status(&status, "draft");
    assert_eq!(host.current_status_value(&status).await.as_deref(), Some("draft"));
}
