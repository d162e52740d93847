//! Shared types for the blockfall workspace.
//! Pure data definitions with no external dependencies.

/// Field dimensions (columns x rows).
pub const FIELD_WIDTH: u8 = 9;
pub const FIELD_HEIGHT: u8 = 16;

/// Gravity tick interval in milliseconds (default; tunable per simulation).
pub const GRAVITY_TICK_MS: u64 = 500;

/// Frame pacing for the terminal runner (milliseconds).
pub const FRAME_MS: u64 = 16;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    J,
    L,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Index into the catalog.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Catalog entry by index (wraps around).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next catalog entry, wrapping after the last (debug shape cycling).
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Rotation state: quarter turns in [0, 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// One clockwise quarter turn (+1 mod 4).
    pub fn cw(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    /// Number of quarter turns from the spawn orientation.
    pub fn steps(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }

    pub fn from_steps(steps: u8) -> Self {
        match steps % 4 {
            0 => Rotation::R0,
            1 => Rotation::R1,
            2 => Rotation::R2,
            _ => Rotation::R3,
        }
    }
}

/// Edge-triggered player actions delivered once per key press.
///
/// Raise and CycleShape are debug controls carried over from the prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    Raise,
    CycleShape,
}

/// Cell on the field (None = empty, Some = locked piece kind).
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cw_is_periodic() {
        for start in [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3] {
            assert_eq!(start.cw().cw().cw().cw(), start);
        }
    }

    #[test]
    fn test_rotation_steps_roundtrip() {
        for steps in 0..4 {
            assert_eq!(Rotation::from_steps(steps).steps(), steps);
        }
        assert_eq!(Rotation::from_steps(5), Rotation::R1);
    }

    #[test]
    fn test_piece_kind_cycle_wraps() {
        assert_eq!(PieceKind::I.next(), PieceKind::O);
        assert_eq!(PieceKind::Z.next(), PieceKind::I);

        let mut kind = PieceKind::I;
        for _ in 0..PieceKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, PieceKind::I);
    }
}
