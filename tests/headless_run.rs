use tempfile::tempdir;
use tokio::task::LocalSet;
use turtlekit::{run_headless, session_request, Color, Config, ReplayState};

fn fast_config(svg_path: std::path::PathBuf) -> Config {
    let mut config = Config::default();
    config.session.length = 80.0;
    config.session.sides = 5;
    config.session.speed = 10;
    config.canvas.background = Color::YELLOW;
    config.output.svg_path = svg_path;
    config
}

#[tokio::test(start_paused = true)]
async fn test_headless_run_writes_svg() {
    let dir = tempdir().unwrap();
    let config = fast_config(dir.path().join("out").join("drawing.svg"));

    let summary = LocalSet::new().run_until(run_headless(&config)).await.unwrap();

    assert_eq!(summary.state, ReplayState::Exhausted);
    assert_eq!(summary.stats.command_errors, 0);
    assert_eq!(summary.stats.render_errors, 0);
    assert!(summary.stats.drawn > 0);

    let svg = std::fs::read_to_string(&summary.svg_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("5-sided polygon"));
    assert!(svg.contains(r##"fill="#ffff00""##));
    assert!(svg.contains(r##"stroke="#a020f0""##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[tokio::test(start_paused = true)]
async fn test_invalid_config_is_rejected_before_replay() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drawing.svg");
    let mut config = fast_config(path.clone());
    config.session.sides = 2;

    let result = LocalSet::new().run_until(run_headless(&config)).await;
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_session_request_from_config() {
    let config = Config::default();
    let request = session_request(&config);
    assert_eq!(request.length, Some(100.0));
    assert_eq!(request.sides, Some(4));
    assert_eq!(request.speed, Some(5));
}
