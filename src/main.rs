use anyhow::{bail, Result};
use log::info;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::SetTitle,
};
use std::{io::stdout, path::PathBuf};

mod actions;
mod app;
mod components;
mod config;
mod content;
mod error;
mod logging;
mod media;
mod theme;
mod utils;

use app::{App, Page};

const HELP: &str = "\
portfolui - a personal portfolio in the terminal

USAGE:
  portfolui [OPTIONS]

OPTIONS:
  --config <PATH>    Read settings from PATH instead of the default config file
  --content <PATH>   Load portfolio content from PATH
  --page <ID>        Start on page ID: home, experience, education, skills,
                     projects, contact or project-detail
  --set-title        Set the terminal window title
  --no-mouse         Disable mouse support
  -h, --help         Print this help
";

struct Args {
    config: Option<PathBuf>,
    content: Option<PathBuf>,
    page: Option<String>,
    set_title: bool,
    no_mouse: bool,
}

fn parse_args() -> Result<Option<Args>> {
    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }
    let args = Args {
        config: pargs.opt_value_from_str("--config")?,
        content: pargs.opt_value_from_str("--content")?,
        page: pargs.opt_value_from_str("--page")?,
        set_title: pargs.contains("--set-title"),
        no_mouse: pargs.contains("--no-mouse"),
    };
    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }
    Ok(Some(args))
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };
    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let _logger = logging::init(&config.log_level, &logging::log_dir())?;
    let content = content::load(args.content.as_deref())?;
    let start = args.page.as_deref().map(Page::from_id).unwrap_or_default();
    let mouse = config.mouse && !args.no_mouse;
    let set_title = config.set_title || args.set_title;

    let mut terminal = ratatui::init();
    let result = (|| -> Result<()> {
        if set_title {
            execute!(stdout(), SetTitle(config::APP_NAME))?;
        }
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        terminal.clear()?;
        App::new(content, &config, start)
            .mouse(mouse)
            .run(&mut terminal)
    })();
    if mouse {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    info!("event=app_exit status={}", if result.is_ok() { "ok" } else { "error" });
    result
}
