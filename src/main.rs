use anyhow::Context;
use clap::Parser;
use gridworld_viz::{
    api::HttpService,
    config::Cli,
    viz::{tui, App},
};
use log::info;
use tokio::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve().context("invalid dashboard configuration")?;

    tui_logger::init_logger(cli.log_level).context("failed to install logger")?;
    tui_logger::set_default_level(cli.log_level);

    let runtime = Runtime::new().context("failed to start async runtime")?;
    let service = HttpService::new(config.base_url.clone())
        .with_context(|| format!("failed to build client for {}", config.base_url))?;
    info!("using grid-world service at {}", service.base_url());

    let mut app = App::new(&config, service, runtime.handle().clone());

    let mut terminal = tui::init().context("failed to initialize terminal")?;
    let result = app.run(&mut terminal);
    tui::restore().context("failed to restore terminal")?;

    result.context("dashboard exited with an error")
}
