use super::*;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("grid_game_{}_{}.json", name, std::process::id()))
}

#[test]
fn test_record_appends_in_order() {
    let mut stats = SearchStats::new();
    assert!(stats.is_empty());

    stats.record(120);
    stats.record(0);
    stats.record(45);

    assert_eq!(stats.node_counts(), &[120, 0, 45]);
    assert_eq!(stats.len(), 3);
    assert_eq!(stats.total_nodes(), 165);
}

#[test]
fn test_clear_empties_the_sequence() {
    let mut stats = SearchStats::new();
    stats.record(7);
    stats.record(0);
    stats.clear();

    assert!(stats.is_empty());
    assert_eq!(stats.total_nodes(), 0);
    assert_eq!(stats, SearchStats::new());
}

#[test]
fn test_report_lists_every_move() {
    let mut stats = SearchStats::new();
    stats.record(256);
    stats.record(0);

    let report = stats.generate_report();
    let rows: Vec<&str> = report.lines().collect();
    assert!(rows[0].contains("Node Evaluations"));
    assert!(rows.iter().any(|r| r.trim_start().starts_with("1 ") && r.ends_with("256")));
    assert!(rows.iter().any(|r| r.trim_start().starts_with("2 ") && r.ends_with('0')));
    assert!(rows.last().is_some_and(|r| r.contains("Total") && r.ends_with("256")));
}

#[test]
fn test_empty_report_has_header_only() {
    let report = SearchStats::new().generate_report();
    assert_eq!(report.lines().count(), 3);
    assert!(!report.contains("Total"));
}

#[test]
fn test_save_and_load() {
    let path = temp_path("save_load");
    let mut stats = SearchStats::new();
    stats.record(10);
    stats.record(0);

    stats.save(&path).unwrap();
    let loaded = SearchStats::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, stats);
}

#[test]
fn test_load_missing_file_fails() {
    let err = SearchStats::load(&temp_path("missing")).unwrap_err();
    assert!(matches!(err, GameError::Io { .. }));
}
