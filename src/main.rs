use crossterm::{
    cursor::{Hide, Show},
    execute,
};
use life_engine::{Config, Game, Result};
use log::error;
use std::io::stdout;
use std::path::Path;
use std::process;

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(Path::new(&path))?,
        None => Config::default(),
    };

    let mut game = Game::new(config)?;
    let mut stdout = stdout();

    execute!(stdout, Hide)?;
    let result = game.run(&mut stdout);
    execute!(stdout, Show)?;

    result
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
