use std::{
    fs::File,
    path::{Path, PathBuf},
    time::Duration,
};

use log::info;
use structopt::StructOpt;

use logic::{error::Result, roster::Roster};
use visuals::{score_display::ScoreDisplay, sprite_store, tui, tui_app::TuiApp};

pub mod logic;
pub mod visuals;

#[derive(Debug, structopt::StructOpt)]
struct Opt {
    /// The number of players.
    #[structopt(short = "p", long, default_value = "2")]
    players: usize,

    /// Milliseconds between frames, above zero; also the death animation frame delay.
    #[structopt(short = "t", long, default_value = "100")]
    tick_ms: u64,

    /// Write log output to this file instead of stderr.
    #[structopt(short = "l", long, parse(from_os_str))]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let Opt { players, tick_ms, log_file } = Opt::from_args();
    init_logging(log_file.as_deref())?;

    let tick = Duration::from_millis(tick_ms);
    let players = (0..players)
        .map(|_| sprite_store::new_player(tick))
        .collect::<Result<Vec<_>>>()?;
    let roster = Roster::new(players)?;
    let score_display = ScoreDisplay::new(&roster)?;
    let active = roster.first_id();

    info!("starting with {} players, {}ms tick", roster.len(), tick_ms);

    let mut terminal = tui::init()?;
    let mut tui_app = TuiApp::builder()
        .roster(roster)
        .score_display(score_display)
        .active(active)
        .tick(tick)
        .exit(false)
        .build();

    let app_result = tui_app.run(&mut terminal);
    tui::restore()?;

    app_result
}
