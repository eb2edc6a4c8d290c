use backdrop_config::Config;
use log::{info, warn};
use ratatui::DefaultTerminal;

mod app;
mod logging;
mod stats;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logging::init()?;
    let config = Config::load()?;
    info!("starting, logging to {}", log_path.display());

    let terminal = ratatui::init();
    let result = run(config, terminal);
    ratatui::restore();

    let config = result?;
    if let Err(err) = config.save() {
        warn!("could not save config: {err:#}");
    }
    Ok(())
}

fn run(config: Config, terminal: DefaultTerminal) -> color_eyre::Result<Config> {
    let size = terminal.size()?;
    App::new(config, size.width, size.height).run(terminal)
}
