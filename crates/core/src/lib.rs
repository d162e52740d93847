//! Simulation core - pure, deterministic, and testable
//!
//! This crate contains all the falling-block game rules and state. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: same seed and tick interval replay the same game
//! - **Portable**: runs in any environment (terminal, headless, tests)
//! - **Fast**: zero-allocation hot paths for gravity and line clears
//!
//! # Module Structure
//!
//! - [`grid`]: 9x16 playfield with occupancy queries and line-clear compaction
//! - [`shapes`]: the 7-piece catalog and the pivot-formula rotation
//! - [`piece`]: the active tetromino and the validity check
//! - [`clock`]: fixed-step gravity tick accumulation
//! - [`rng`]: seedable LCG behind the uniform piece randomizer
//! - [`simulation`]: the owning context that orchestrates a frame
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::Simulation;
//! use blockfall_types::InputAction;
//!
//! let mut sim = Simulation::new(12345);
//! sim.start();
//!
//! // One frame: input first, then gravity catch-up.
//! sim.frame(&[InputAction::MoveRight], Duration::from_millis(500));
//!
//! assert!(sim.active().is_some() || sim.game_over());
//! ```

pub mod clock;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod simulation;

pub use blockfall_types as types;

// Re-export commonly used items for convenience
pub use clock::GravityClock;
pub use grid::Grid;
pub use piece::{Tetromino, SPAWN_POSITION};
pub use rng::SimpleRng;
pub use shapes::{base_offsets, rotate_offset, shape_cells};
pub use simulation::{LockEvent, Simulation};
