//! Simulation: the single owner of all game state.
//!
//! Ties together the grid, the active piece, the gravity clock, and the
//! piece randomizer. One instance is owned by the loop orchestrator and
//! passed by reference to every operation; there are no globals.
//!
//! Frame contract: player input resolves before gravity catch-up, and
//! gravity resolves before the renderer reads the state. Both input and
//! gravity go through the same attempt-transform operation: build a
//! candidate, validate it once, commit it whole or drop it whole.

use std::time::Duration;

use blockfall_types::{InputAction, PieceKind};

use crate::clock::GravityClock;
use crate::grid::Grid;
use crate::piece::Tetromino;
use crate::rng::SimpleRng;

/// Published when a piece locks (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that was baked into the grid.
    pub kind: PieceKind,
    /// Rows cleared by this lock (0..=4).
    pub rows_cleared: usize,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    active: Option<Tetromino>,
    clock: GravityClock,
    rng: SimpleRng,
    game_over: bool,
    last_lock: Option<LockEvent>,
}

impl Simulation {
    /// Create a new simulation with the default gravity interval
    pub fn new(seed: u32) -> Self {
        Self::with_interval(seed, GravityClock::default().interval())
    }

    /// Create a new simulation with a custom gravity interval
    pub fn with_interval(seed: u32, interval: Duration) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            clock: GravityClock::new(interval),
            rng: SimpleRng::new(seed),
            game_over: false,
            last_lock: None,
        }
    }

    /// Spawn the first piece. No-op if a piece is already falling.
    pub fn start(&mut self) {
        if self.active.is_none() && !self.game_over {
            self.spawn_piece();
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup in tests.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Run one frame in contract order: input, then gravity catch-up.
    /// Returns the number of gravity steps performed.
    pub fn frame(&mut self, actions: &[InputAction], now: Duration) -> u32 {
        self.apply_inputs(actions);
        self.advance(now)
    }

    /// Resolve this frame's edge-triggered actions against the active piece.
    ///
    /// All deltas are folded into one candidate transform which is
    /// validated once: either the combined result commits or the piece is
    /// left exactly as it was. Returns true if the candidate committed.
    pub fn apply_inputs(&mut self, actions: &[InputAction]) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let mut candidate = active;
        for action in actions {
            match action {
                InputAction::MoveLeft => candidate.x -= 1,
                InputAction::MoveRight => candidate.x += 1,
                InputAction::SoftDrop => candidate.y -= 1,
                InputAction::RotateCw => candidate.rotation = candidate.rotation.cw(),
                InputAction::Raise => candidate.y += 1,
                InputAction::CycleShape => candidate.kind = candidate.kind.next(),
            }
        }

        self.attempt(candidate)
    }

    /// Advance gravity up to `now`, catching up on every due tick.
    ///
    /// Steps run in order, so a piece locked mid-catch-up hands the
    /// remaining ticks of this frame to its freshly spawned successor.
    /// Returns the number of gravity steps performed.
    pub fn advance(&mut self, now: Duration) -> u32 {
        let mut steps = 0;
        while self.active.is_some() && !self.game_over && self.clock.consume_tick(now) {
            self.gravity_step();
            steps += 1;
        }
        steps
    }

    /// One gravity step: drop by one row or lock in place.
    fn gravity_step(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let mut candidate = active;
        candidate.y -= 1;

        if !self.attempt(candidate) {
            self.lock_active();
        }
    }

    /// Attempt a candidate transform: commit it if it fits, drop it if not.
    fn attempt(&mut self, candidate: Tetromino) -> bool {
        if candidate.fits(&self.grid) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Bake the active piece into the grid, clear full rows, and respawn.
    ///
    /// Cells above the top of the field are not stored; a piece locking
    /// while partially off-screen loses those cells.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        for (x, y) in active.world_cells() {
            self.grid.set(x, y, active.kind);
        }

        let cleared = self.grid.clear_full_rows();
        self.last_lock = Some(LockEvent {
            kind: active.kind,
            rows_cleared: cleared.len(),
        });

        self.spawn_piece();
    }

    /// Spawn the next piece, drawn uniformly from the catalog.
    ///
    /// A spawn whose transform is already invalid tops the game out: the
    /// simulation enters a terminal game-over state instead of carrying
    /// an overlapping piece.
    fn spawn_piece(&mut self) -> bool {
        let kind = PieceKind::from_index(self.rng.next_range(7) as usize);
        let piece = Tetromino::spawn(kind);

        if !piece.fits(&self.grid) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }
}
