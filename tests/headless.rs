use elementary_data::{BoundaryMode, InitialState, RuleCode};
use elementary_lib::app::{App, OutputFormat, ShutdownManager};
use elementary_lib::model::config::AppConfig;

fn config(rule: u8, size: usize, generations: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.automaton.rule = RuleCode::new(rule);
    config.automaton.size = size;
    config.automaton.boundary = BoundaryMode::Periodic;
    config.seed.initial = InitialState::Single;
    config.display.generations = generations;
    config.display.delay_ms = 0;
    config
}

async fn run(config: AppConfig, format: OutputFormat, show_rule: bool) -> String {
    let mut app = App::new(config).unwrap();
    let mut out = Vec::new();
    app.run_headless(&mut out, format, show_rule, &ShutdownManager::new())
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_headless_text_rows() {
    let output = run(config(30, 7, 3), OutputFormat::Text, false).await;
    assert_eq!(output, "   *   \n  ***  \n **  * \n");
}

#[tokio::test]
async fn test_headless_custom_glyphs_and_rule_dump() {
    let mut config = config(90, 5, 2);
    config.display.alive_glyph = '#';
    config.display.dead_glyph = '.';
    let output = run(config, OutputFormat::Text, true).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Rule 90:");
    assert_eq!(lines.len(), 9 + 2);
    assert_eq!(lines[9], "..#..");
    assert_eq!(lines[10], ".#.#.");
}

#[tokio::test]
async fn test_headless_json_lines() {
    let output = run(config(90, 5, 2), OutputFormat::Json, false).await;
    let snapshots: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0]["generation"], 0);
    assert_eq!(snapshots[1]["cells"], "01010");
    assert_eq!(snapshots[1]["boundary"], "periodic");
}

#[tokio::test]
async fn test_headless_stops_on_shutdown() {
    let mut app = App::new(config(110, 16, 0)).unwrap();
    let shutdown = ShutdownManager::new();
    shutdown.request_shutdown();
    let mut out = Vec::new();
    app.run_headless(&mut out, OutputFormat::Text, false, &shutdown)
        .await
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_app_rejects_invalid_config() {
    assert!(App::new(config(30, 2, 1)).is_err());
}

#[test]
fn test_restart_reapplies_initial_state() {
    let mut app = App::new(config(30, 9, 0)).unwrap();
    let initial = app.automaton.cells().to_vec();
    app.step();
    app.step();
    assert_eq!(app.metrics.generations(), 2);
    app.restart();
    assert_eq!(app.automaton.cells(), initial.as_slice());
    assert_eq!(app.automaton.generation(), 0);
    assert_eq!(app.metrics.generations(), 0);
}

#[test]
fn test_tick_stops_when_canvas_full() {
    let mut app = App::new(config(30, 9, 0)).unwrap();
    app.spacetime.resize(App::canvas_rows(6));
    for _ in 0..3 {
        app.tick();
    }
    assert!(!app.finished);
    assert_eq!(app.spacetime.rows().len(), 3);
    app.tick();
    assert!(app.finished);
    assert_eq!(app.automaton.generation(), 3);
}
