//! Errors raised while generating a map.

use thiserror::Error;
use wordhex_core::CellCoord;

/// Reasons a map refuses to start.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Maps need at least one interior cell.
    #[error("grid of {columns}x{rows} is too small; both dimensions must exceed 2")]
    GridTooSmall {
        /// Requested column count.
        columns: u32,
        /// Requested row count.
        rows: u32,
    },
    /// The player would start the map already dead.
    #[error("starting health must be positive, got {health}")]
    NonPositiveHealth {
        /// Requested starting health.
        health: i32,
    },
    /// The enemy roster does not fit into the interior cells.
    #[error("{enemies} enemies do not fit into {slots} interior cells")]
    RosterTooLarge {
        /// Number of enemies in the roster.
        enemies: usize,
        /// Number of interior cells able to hold an enemy.
        slots: usize,
    },
    /// Without enemies there is no experience to collect.
    #[error("enemy roster is empty; the map would have nothing to win")]
    EmptyRoster,
    /// A fixed enemy layout does not cover the grid exactly.
    #[error("enemy layout holds {actual} cells but the grid has {expected}")]
    LayoutSizeMismatch {
        /// Number of cells in the grid.
        expected: usize,
        /// Number of entries in the layout.
        actual: usize,
    },
    /// A fixed enemy layout places an enemy on the outer ring.
    #[error("enemy placed on border cell ({}, {})", cell.column(), cell.row())]
    EnemyOnBorder {
        /// Offending border cell.
        cell: CellCoord,
    },
    /// The word list cannot label every cell and combat re-roll.
    #[error("difficulty {difficulty} needs {required} words but only {available} exist")]
    WordBankExhausted {
        /// Difficulty band that ran short.
        difficulty: usize,
        /// Worst-case number of words drawn from the band.
        required: usize,
        /// Number of words in the band.
        available: usize,
    },
}
