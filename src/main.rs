use std::path::PathBuf;
use tokio::task::LocalSet;
use tracing::info;
use turtlekit::{init_logging, run_headless, Config, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("TurtleKit {} (built {})", VERSION, BUILD_DATE);

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::load_or_default()?,
    };

    // Replay runs single-threaded; ticks never overlap.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let summary = LocalSet::new().block_on(&runtime, run_headless(&config))?;

    info!(
        "Done: {} commands replayed into {}",
        summary.stats.ticks,
        summary.svg_path.display()
    );
    Ok(())
}
