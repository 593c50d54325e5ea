#![windows_subsystem = "windows"]

use anyhow::Context;
use basket::kernel::config::load_basket_config;
use basket_desktop::DesktopApp;
use basket_logger::{Logger, parse_level};

fn main() -> anyhow::Result<()> {
    let config = load_basket_config(std::env::args_os().nth(1))
        .context("Critical: Configuration is malformed")?;

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&config.log.level)?)
        .console(true);
    let _log = match &config.log.directory {
        Some(dir) => builder.path(dir).json(config.log.json).init()?,
        None => builder.init()?,
    };

    let session = basket::init(&config).context("Failed to open the cart")?;

    DesktopApp::from_config(&config.window).launch(session);
    Ok(())
}
