//! # life_engine
//!
//! Conway's Game of Life on a toroidal grid, rendered to the terminal.

pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod universe;

pub use config::Config;
pub use error::{LifeError, Result};
pub use game::Game;
pub use universe::{Cell, Universe};
