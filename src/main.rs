use anyhow::{Context, Result};
use tabframe::config::Config;
use tabframe::logger;
use tabframe::ui::components::TextPage;
use tabframe::ui::{run_app, Engine};
use tokio::time::{interval, Duration};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(&path);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let mut engine = Engine::new(&config).context("Failed to create engine")?;
    let commander = engine.commander();

    // Add tabs (pages)
    engine.add_page(
        "first",
        "First Tab",
        TextPage::new("First").with_size().with_status(commander.clone(), "page", "first"),
    );
    engine.add_page(
        "second",
        "Second Tab",
        TextPage::new("Second").with_size().with_status(commander.clone(), "page", "second"),
    );
    engine.add_page(
        "third",
        "Third Tab",
        TextPage::new("Third").with_size().with_status(commander.clone(), "page", "third"),
    );

    // Battery level is hardcoded for the demo
    commander.add_widget("battery", "Battery %92");
    commander.add_widget("time", chrono::Local::now().format("%H:%M:%S").to_string());

    // Refresh the clock from a background task
    let clock = commander.clone();
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            clock.upsert_widget("time", chrono::Local::now().format("%H:%M:%S").to_string());
        }
    });

    run_app(engine).await
}
