#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Wordhex engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters translate raw input into
//! [`Input`] intents, systems turn intents into [`Command`] values, the world
//! executes those commands via its `apply` entry point, and then reports every
//! state change as an [`Event`]. Events carry immutable snapshots of the entity
//! that changed so renderers never need to reach back into the world.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Wordhex. Type a word to move.";

/// Abstract input intents produced by an input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Appends a character to the word currently being typed.
    Character(char),
    /// Submits the word currently being typed.
    Accept,
    /// Removes the last character of the current word.
    Backspace,
    /// Discards the whole current word.
    Clear,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Requests that the map leave the `Created` state and start its clock.
    StartClock,
    /// Submits a completed word to be resolved against the current word targets.
    SubmitWord {
        /// Word typed by the player.
        word: String,
    },
    /// Attempts to move the player into the provided cell, fighting if required.
    MovePlayer {
        /// Cell the player attempts to enter.
        target: CellCoord,
    },
    /// Advances the map clock by one whole second.
    Tick {
        /// Session that scheduled the tick; ticks for other sessions are ignored.
        session: SessionId,
    },
}

/// Events broadcast after processing inputs and commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A cell became visible for the first time.
    CellShown {
        /// State of the cell after it was revealed.
        cell: CellSnapshot,
    },
    /// An enemy occupying a cell received a combat blow.
    CellDamaged {
        /// State of the cell after the blow landed.
        cell: CellSnapshot,
    },
    /// The player changed position.
    PlayerMoved {
        /// State of the player after moving.
        player: PlayerSnapshot,
    },
    /// The player lost health.
    PlayerHurt {
        /// State of the player after taking damage.
        player: PlayerSnapshot,
        /// Amount of health that was subtracted.
        amount: i32,
    },
    /// The player collected experience.
    PlayerGainedXp {
        /// State of the player after the experience was added.
        player: PlayerSnapshot,
        /// Experience awarded.
        amount: u32,
    },
    /// The map moved between lifecycle states.
    MapStateChanged {
        /// State held before the transition.
        from: MapState,
        /// State held after the transition.
        to: MapState,
    },
    /// The set of words accepted from the player's position was recomputed.
    WordTargetsUpdated {
        /// Targets ordered by direction around the player.
        targets: Vec<WordTarget>,
    },
    /// The map clock advanced.
    TimeUpdated {
        /// Whole seconds elapsed since play started.
        seconds: u64,
    },
    /// The word being typed changed.
    WordChanged {
        /// Current contents of the prompt.
        word: String,
    },
    /// The word being typed was submitted.
    WordAccepted {
        /// Word that was submitted.
        word: String,
    },
}

impl Event {
    /// Returns the kind used to route the event to subscribers.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::CellShown { .. } => EventKind::CellShown,
            Self::CellDamaged { .. } => EventKind::CellDamaged,
            Self::PlayerMoved { .. } => EventKind::PlayerMoved,
            Self::PlayerHurt { .. } => EventKind::PlayerHurt,
            Self::PlayerGainedXp { .. } => EventKind::PlayerGainedXp,
            Self::MapStateChanged { .. } => EventKind::MapStateChanged,
            Self::WordTargetsUpdated { .. } => EventKind::MapWordTargetsUpdated,
            Self::TimeUpdated { .. } => EventKind::MapTimeUpdated,
            Self::WordChanged { .. } => EventKind::WordChanged,
            Self::WordAccepted { .. } => EventKind::WordAccepted,
        }
    }
}

/// Discriminant of an [`Event`] used for subscription filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    /// `cell.shown`
    CellShown,
    /// `cell.damaged`
    CellDamaged,
    /// `player.moved`
    PlayerMoved,
    /// `player.hurt`
    PlayerHurt,
    /// `player.gainedXp`
    PlayerGainedXp,
    /// `map.stateChanged`
    MapStateChanged,
    /// `map.wordTargetsUpdated`
    MapWordTargetsUpdated,
    /// `map.timeUpdated`
    MapTimeUpdated,
    /// `word.changed`
    WordChanged,
    /// `word.accepted`
    WordAccepted,
}

impl EventKind {
    /// Every event kind in declaration order.
    pub const ALL: [EventKind; 10] = [
        Self::CellShown,
        Self::CellDamaged,
        Self::PlayerMoved,
        Self::PlayerHurt,
        Self::PlayerGainedXp,
        Self::MapStateChanged,
        Self::MapWordTargetsUpdated,
        Self::MapTimeUpdated,
        Self::WordChanged,
        Self::WordAccepted,
    ];

    /// Dotted name of the event kind as exposed to collaborators.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CellShown => "cell.shown",
            Self::CellDamaged => "cell.damaged",
            Self::PlayerMoved => "player.moved",
            Self::PlayerHurt => "player.hurt",
            Self::PlayerGainedXp => "player.gainedXp",
            Self::MapStateChanged => "map.stateChanged",
            Self::MapWordTargetsUpdated => "map.wordTargetsUpdated",
            Self::MapTimeUpdated => "map.timeUpdated",
            Self::WordChanged => "word.changed",
            Self::WordAccepted => "word.accepted",
        }
    }
}

/// Lifecycle of a single map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapState {
    /// The map is being generated.
    Loading,
    /// Generation finished; waiting for the first input.
    Created,
    /// The clock is running and the player is exploring.
    Playing,
    /// The player collected all experience available on the map.
    Won,
    /// The player ran out of health.
    Failed,
}

impl MapState {
    /// Reports whether no further gameplay transitions can occur.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Failed)
    }
}

/// Identifier of a single map instance within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    /// Creates a new session identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// The six neighbours of a hex cell in offset order.
///
/// Odd rows are drawn half a cell to the right of even rows, so the diagonal
/// neighbours of an odd-row cell sit one column further right than those of an
/// even-row cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HexDirection {
    /// Upper right neighbour.
    NorthEast,
    /// Right neighbour on the same row.
    East,
    /// Lower right neighbour.
    SouthEast,
    /// Lower left neighbour.
    SouthWest,
    /// Left neighbour on the same row.
    West,
    /// Upper left neighbour.
    NorthWest,
}

impl HexDirection {
    /// Every direction ordered by offset index.
    pub const ALL: [HexDirection; 6] = [
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Offset index of the direction in the range `0..6`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::NorthEast => 0,
            Self::East => 1,
            Self::SouthEast => 2,
            Self::SouthWest => 3,
            Self::West => 4,
            Self::NorthWest => 5,
        }
    }

    /// Resolves a direction from its offset index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Column and row delta applied when stepping from a cell on an even row.
    const fn even_row_delta(self) -> (i64, i64) {
        match self {
            Self::NorthEast => (0, -1),
            Self::East => (1, 0),
            Self::SouthEast => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Column and row delta applied when stepping from a cell on the given row.
    #[must_use]
    pub const fn delta(self, row: u32) -> (i64, i64) {
        let (column, row_delta) = self.even_row_delta();
        let horizontal = matches!(self, Self::East | Self::West);
        if row % 2 == 0 || horizontal {
            (column, row_delta)
        } else {
            (column + 1, row_delta)
        }
    }

    /// Reports whether renderers should place this direction's label on the
    /// left side of the player.
    #[must_use]
    pub const fn is_left(self) -> bool {
        self.index() > 2
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Returns the neighbouring coordinate in the provided direction.
    ///
    /// `None` is returned when the neighbour would have a negative coordinate.
    /// Callers are responsible for checking the upper grid bounds.
    #[must_use]
    pub fn neighbor(self, direction: HexDirection) -> Option<CellCoord> {
        let (column_delta, row_delta) = direction.delta(self.row);
        let column = u32::try_from(i64::from(self.column) + column_delta).ok()?;
        let row = u32::try_from(i64::from(self.row) + row_delta).ok()?;
        Some(CellCoord::new(column, row))
    }
}

/// Immutable representation of a single cell's state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSnapshot {
    /// Location of the cell.
    pub coord: CellCoord,
    /// Enemy strength level; zero when the cell never held an enemy.
    pub enemy: u32,
    /// Remaining enemy hit points.
    pub health: u32,
    /// Sum of enemy levels across the neighbouring cells.
    pub heat: u32,
    /// Whether the cell has been revealed.
    pub visible: bool,
    /// Word bound to the cell for regular movement.
    pub word: String,
    /// Word required to land the next combat blow, if a fight is in progress.
    pub combat_word: Option<String>,
    /// Whether the enemy has been hit but not yet defeated.
    pub in_combat: bool,
}

impl CellSnapshot {
    /// Word a player must type to target this cell right now.
    #[must_use]
    pub fn prompt_word(&self) -> &str {
        self.combat_word.as_deref().unwrap_or(&self.word)
    }

    /// Reports whether an undefeated enemy occupies the cell.
    #[must_use]
    pub const fn has_live_enemy(&self) -> bool {
        self.enemy > 0 && self.health > 0
    }
}

/// Immutable representation of the player's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Cell occupied by the player.
    pub cell: CellCoord,
    /// Level derived from collected experience.
    pub level: u32,
    /// Remaining health; zero or below means the player is dead.
    pub health: i32,
    /// Experience collected so far.
    pub xp: u32,
    /// Total experience available on the map.
    pub max_xp: u32,
    /// Whether the player is still alive.
    pub alive: bool,
    /// Whether the player has collected all available experience.
    pub won: bool,
}

/// A word that moves the player into an adjacent cell when typed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordTarget {
    /// Word to type.
    pub word: String,
    /// Player position when the target was computed.
    pub origin: CellCoord,
    /// Adjacent cell the word leads to.
    pub target: CellCoord,
    /// Direction from the origin to the target.
    pub direction: HexDirection,
}
