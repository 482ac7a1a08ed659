//! Logger init and the banner presentation flow.

use log::debug;
use thiserror::Error;

use crate::cli::Args;
use crate::core::banner::Banner;
use crate::core::terminal::Screen;

/// Errors from presenting the banner.
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Failed to write to the terminal: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Initialize env_logger from the -v/-q flags. `RUST_LOG` overrides.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Render and display the banner: clear the screen, set the window title,
/// write the block to stdout.
pub fn present() -> Result<(), PresentError> {
    let banner = Banner::resolve();
    debug!("resolved host platform: {}", banner.platform);

    let mut screen = Screen::stdout();
    debug!("interactive terminal: {}", screen.is_interactive());

    screen.clear()?;
    screen.set_title(&banner.title())?;
    screen.print_block(&banner.render())?;
    Ok(())
}
