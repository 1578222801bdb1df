use tracing::{error, info};
use tuido::app::{tui, App, Tui};
use tuido::config::UiConfig;
use tuido::simple::run_simple;
use tuido::{logging, Result};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", tuido::error::user_friendly_message(&e));
        error!("exiting with error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = UiConfig::load()?;
    let log_path = logging::init(&config)?;
    info!(log = %log_path.display(), "tuido starting");

    if std::env::args().skip(1).any(|arg| arg == "--simple") {
        return run_simple().await;
    }

    let mut app = App::new(&config)?;
    let mut tui = Tui::new(config.tick_rate()?)?;
    tui.init()?;
    let result = app.run(&mut tui);
    // Restore before anything is printed to the normal screen
    let restored = tui.restore();
    tui::finish(result, restored)
}
