use strata::CompositionTable;

#[test]
fn exploded_view_fixture_validates() {
    let s = include_str!("data/exploded_view.json");
    let table: CompositionTable = serde_json::from_str(s).unwrap();
    table.validate().unwrap();
    assert_eq!(table.channels.len(), 17);
}

#[test]
fn degenerate_window_fixture_is_rejected() {
    let s = include_str!("data/degenerate_window.json");
    let table: CompositionTable = serde_json::from_str(s).unwrap();
    let err = table.validate().unwrap_err();
    assert!(err.to_string().contains("window"));
}

#[test]
fn visibility_gap_fixture_is_rejected() {
    let s = include_str!("data/visibility_gap.json");
    let table: CompositionTable = serde_json::from_str(s).unwrap();
    let err = table.validate().unwrap_err();
    assert!(err.to_string().contains("no visible layer"));
}

#[test]
fn label_before_line_fixture_is_rejected() {
    let s = include_str!("data/label_before_line.json");
    let table: CompositionTable = serde_json::from_str(s).unwrap();
    let err = table.validate().unwrap_err();
    assert!(err.to_string().contains("line"));
}

#[test]
fn fixture_matches_the_default_authored_config() {
    let s = include_str!("data/exploded_view.json");
    let fixture: CompositionTable = serde_json::from_str(s).unwrap();
    let authored = strata::ExplodedViewConfig::default().build().unwrap();

    assert_eq!(fixture.channels.len(), authored.channels.len());
    for (a, b) in fixture.channels.iter().zip(&authored.channels) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.role, b.role);
        assert_eq!(a.window.start, b.window.start);
        assert_eq!(a.range.v0, b.range.v0);
        assert_eq!(a.range.v1, b.range.v1);
    }
}
