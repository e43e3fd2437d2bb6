// End-to-end scenario: a leaderboard card built from a raw record,
// bulk-loaded, and dumped for the renderer.

use relaydoc::{Buffer, BufferDump, Document, Value};
use serde_json::json;

#[test]
fn test_leaderboard_scenario() {
    let mut doc = Document::from_json(json!({
        "#scores": "3 name points",
        "title": "Leaderboard",
    }));

    // classification: indexed buffer of capacity 3, plain string title
    let buf = doc.buffer("scores").expect("scores should be a buffer");
    match buf {
        Buffer::Fixed(fixed) => {
            assert_eq!(fixed.capacity(), 3);
            assert_eq!(
                fixed.schema().fields(),
                ["name".to_string(), "points".to_string()]
            );
        }
        other => panic!("expected fixed buffer, got {other:?}"),
    }
    assert!(doc.buffer("title").is_none());

    // bulk overwrite through the top-level path
    doc.set(
        &["scores"],
        json!([["Ann", 10], ["Bo", 7], ["Cy", 3]]).into(),
    )
    .unwrap();

    let dump = doc.dump();
    assert_eq!(
        dump["title"].as_value(),
        Some(&Value::Str("Leaderboard".into()))
    );
    let BufferDump::Fixed { schema, tuples } = dump["#scores"]
        .as_buffer()
        .expect("buffer dumps under the sigil-tagged key")
    else {
        panic!("expected a fixed buffer dump");
    };
    assert_eq!(schema.fields(), ["name".to_string(), "points".to_string()]);
    assert_eq!(tuples.len(), 3);
    let names: Vec<_> = tuples
        .iter()
        .map(|t| t.as_ref().unwrap()[0].clone())
        .collect();
    assert_eq!(
        names,
        vec![
            Value::Str("Ann".into()),
            Value::Str("Bo".into()),
            Value::Str("Cy".into()),
        ]
    );
}

#[test]
fn test_leaderboard_incremental_updates() {
    let mut doc = Document::from_json(json!({
        "#scores": "3 name points",
    }));
    doc.set(
        &["scores"],
        json!([["Ann", 10], ["Bo", 7], ["Cy", 3]]).into(),
    )
    .unwrap();

    // single-slot update, then a field-level bump through a cursor path
    doc.set(&["scores", "2"], json!(["Dee", 5]).into()).unwrap();
    doc.set(&["scores", "0", "points"], Value::Int(12)).unwrap();

    let recs = doc.buffer("scores").unwrap().records();
    assert_eq!(recs[0]["points"], Value::Int(12));
    assert_eq!(recs[2]["name"], Value::Str("Dee".into()));

    // malformed incremental updates degrade to no-ops
    doc.set(&["scores", "1"], json!(["TooShort"]).into()).unwrap();
    let recs = doc.buffer("scores").unwrap().records();
    assert_eq!(recs[1]["name"], Value::Str("Bo".into()));
}
