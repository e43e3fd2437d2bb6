// Buffer contract tests across the three variants

use relaydoc::{Buffer, BufferDump, Value};

fn buffer(decl: &str) -> Buffer {
    Buffer::from_declaration(&Value::Str(decl.to_string()))
        .expect("declaration should parse")
}

fn row(name: &str, points: i64) -> Value {
    Value::Seq(vec![name.into(), Value::Int(points)])
}

#[test]
fn test_fixed_put_wrong_length_leaves_all_slots_unchanged() {
    let mut buf = buffer("3 name points");
    buf.set("0", row("Ann", 10));
    let before = buf.dump();

    buf.put(Value::Seq(vec![row("Bo", 7)])); // length 1 != capacity 3
    buf.put(Value::Seq(vec![row("Bo", 7); 4])); // length 4 != capacity 3
    buf.put(Value::Int(5)); // not even a sequence

    assert_eq!(buf.dump(), before, "wrong-shape put must be a no-op");
}

#[test]
fn test_fixed_put_exact_length_follows_match_or_clear() {
    let mut buf = buffer("3 name points");
    buf.put(Value::Seq(vec![
        row("Ann", 10),
        Value::Str("garbage".into()),
        row("Cy", 3),
    ]));

    let BufferDump::Fixed { tuples, .. } = buf.dump() else {
        panic!("fixed buffer must dump as fixed");
    };
    assert_eq!(tuples[0].as_ref().unwrap()[0], Value::Str("Ann".into()));
    assert!(tuples[1].is_none(), "unmatched element must leave slot clear");
    assert_eq!(tuples[2].as_ref().unwrap()[0], Value::Str("Cy".into()));
}

#[test]
fn test_clear_one_slot_touches_nothing_else() {
    // the same law holds per variant: clearing is slot-local
    let mut fixed = buffer("2 name points");
    fixed.set("0", row("Ann", 10));
    fixed.set("1", row("Bo", 7));
    fixed.set("0", Value::Null);
    let recs = fixed.records();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["name"], Value::Str("Bo".into()));

    let mut keyed = buffer("0 name points");
    keyed.set("ann", row("Ann", 10));
    keyed.set("bo", row("Bo", 7));
    keyed.set("ann", Value::Null);
    assert!(keyed.get("ann").is_none());
    let cur = keyed.get("bo").expect("untouched key must survive");
    assert_eq!(cur.get("points"), Some(&Value::Int(7)));
}

#[test]
fn test_cleared_fixed_slot_reads_absent_through_cursor() {
    let mut buf = buffer("2 name points");
    buf.set("0", row("Ann", 10));
    buf.set("0", Value::Null);
    let cur = buf.get("0").expect("in-range fixed index is always found");
    assert!(!cur.is_present());
    assert_eq!(cur.get("name"), None);
}

#[test]
fn test_cyclic_keeps_last_n_in_append_order() {
    let mut buf = buffer("-3 name points");
    for i in 0..4 {
        buf.set("", Value::Seq(vec![format!("p{i}").into(), Value::Int(i)]));
    }

    let BufferDump::Cyclic { tuples, .. } = buf.dump() else {
        panic!("cyclic buffer must dump as cyclic");
    };
    assert_eq!(tuples.len(), 3, "N+1 appends into a ring of N keep N tuples");
    let names: Vec<_> = tuples.iter().map(|t| t[0].clone()).collect();
    assert_eq!(
        names,
        vec![
            Value::Str("p1".into()),
            Value::Str("p2".into()),
            Value::Str("p3".into()),
        ],
        "oldest tuple is gone and order reflects appends"
    );
}

#[test]
fn test_keyed_round_trips_matched_tuple_exactly() {
    let mut buf = buffer("0 name points");
    buf.set("ann", row("Ann", 10));
    let cur = buf.get("ann").expect("stored key must be found");
    assert_eq!(cur.get("name"), Some(&Value::Str("Ann".into())));
    assert_eq!(cur.get("points"), Some(&Value::Int(10)));
    assert!(buf.get("nope").is_none(), "unknown keys are never found");
}

#[test]
fn test_schema_mismatch_set_leaves_slot_unchanged() {
    let mut buf = buffer("2 name points");
    buf.set("0", row("Ann", 10));
    buf.set("0", Value::Seq(vec![Value::Int(1)])); // wrong arity
    buf.set("0", Value::Str("junk".into()));
    let recs = buf.records();
    assert_eq!(recs[0]["name"], Value::Str("Ann".into()));
    assert_eq!(recs[0]["points"], Value::Int(10));
}

#[test]
fn test_cursor_field_writes_by_name_and_position() {
    let mut buf = buffer("0 name points");
    buf.set("ann", row("Ann", 10));
    {
        let mut cur = buf.get("ann").unwrap();
        cur.set("points", Value::Int(11));
        cur.set("0", "Anne".into());
        cur.set("nope", Value::Int(99)); // unknown field: ignored
    }
    let recs = buf.records();
    assert_eq!(recs[0]["name"], Value::Str("Anne".into()));
    assert_eq!(recs[0]["points"], Value::Int(11));
}
