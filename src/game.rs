use crate::config::Config;
use crate::error::{LifeError, Result};
use crate::render;
use crate::universe::Universe;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Drives a universe through its generations.
///
/// Each next generation is computed on a background task while the current one is displayed.
/// Only one such task is in flight at a time.
pub struct Game {
    config: Config,
    universe: Arc<Universe>,
    generation: usize,
    started: bool,
    finished: bool,
    rng: StdRng,
    runtime: Runtime,
}

impl Game {
    /// Creates a new game.
    ///
    /// # Arguments
    /// * `config` - The settings for the run. Rejected if invalid.
    pub fn new(config: Config) -> Result<Game> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Game {
            universe: Arc::new(Universe::new(config.rows, config.cols)),
            config,
            generation: 0,
            started: false,
            finished: false,
            rng,
            runtime: Runtime::new()?,
        })
    }

    /// Starts the game by seeding the first generation.
    ///
    /// Must be called once before updating the game.
    pub fn start(&mut self) -> Result<&Universe> {
        let universe = match &self.config.pattern_file {
            Some(path) => {
                info!("Loading pattern from {}", path.display());
                Universe::parse(&fs::read_to_string(path)?)?
            }
            None => {
                let mut universe = Universe::new(self.config.rows, self.config.cols);
                universe.populate(self.config.threshold, &mut self.rng);
                universe
            }
        };

        info!(
            "Starting a {}x{} universe with {} cells alive for {} generations",
            universe.rows(),
            universe.cols(),
            universe.alive_count(),
            self.config.generations
        );

        self.universe = Arc::new(universe);
        self.generation = 0;
        self.started = true;
        self.finished = self.config.generations == 0;

        Ok(&*self.universe)
    }

    /// Advances the game by one generation and returns the new universe.
    pub fn update(&mut self) -> Result<&Universe> {
        self.check_can_advance();

        let task = self.spawn_next_generation();
        self.receive_next_generation(task)?;

        Ok(&*self.universe)
    }

    /// Runs the game to completion, drawing every generation to `out`.
    ///
    /// While a frame is shown for the configured delay, the next generation is being computed.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.start()?;
        self.draw(out)?;

        while !self.finished {
            let task = self.spawn_next_generation();
            thread::sleep(self.config.delay());
            self.receive_next_generation(task)?;
            self.draw(out)?;
        }

        info!(
            "Finished after {} generations with {} cells alive",
            self.generation,
            self.universe.alive_count()
        );

        Ok(())
    }

    /// Draws the current generation.
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        render::draw(out, &self.universe, self.generation)?;
        Ok(())
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn finished(&self) -> bool {
        self.finished
    }
}

impl Game {
    fn check_can_advance(&self) {
        if !self.started {
            panic!("Game has not started! Call `start` to start the game.");
        }

        if self.finished {
            panic!("Game is finished! Call `start` to start a new game.");
        }
    }

    fn spawn_next_generation(&self) -> JoinHandle<Universe> {
        let current = Arc::clone(&self.universe);
        self.runtime
            .spawn_blocking(move || current.next_generation())
    }

    fn receive_next_generation(&mut self, task: JoinHandle<Universe>) -> Result<()> {
        let next = self
            .runtime
            .block_on(task)
            .map_err(|e| LifeError::Task(e.to_string()))?;

        self.universe = Arc::new(next);
        self.generation += 1;
        self.finished = self.generation >= self.config.generations;

        debug!(
            "Generation {}: {} cells alive",
            self.generation,
            self.universe.alive_count()
        );

        Ok(())
    }
}
