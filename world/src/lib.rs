#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative map state for Wordhex.
//!
//! A [`World`] owns the hex grid, its cells, and the player. It is generated
//! deterministically from a [`MapConfig`] and afterwards mutated only through
//! [`apply`] (or the equivalent inherent methods), which report every change
//! as [`Event`] values appended to the caller's buffer.

mod cell;
pub mod config;
mod error;
pub mod grid;
mod player;
pub mod rng;
mod word_list;
pub mod words;

use std::collections::{HashMap, VecDeque};

use tracing::{debug, error, info, trace};
use wordhex_core::{CellCoord, Command, Event, MapState, SessionId, WordTarget};

use cell::{Cell, HitOutcome};
use player::Player;
use rng::SeededRng;
use words::{BandCounts, WordBank, DIFFICULTY_BANDS, MAX_DIFFICULTY, WORD_LIST};

pub use config::{EnemyBands, EnemyPlacement, MapConfig};
pub use error::GenerationError;
pub use grid::HexGrid;

/// Edge distance beyond which cell words stop getting harder.
const WORD_DIFFICULTY_EDGE_CAP: u32 = 5;

/// Health lost for submitting a word that matches no adjacent cell.
const WRONG_WORD_DAMAGE: i32 = 1;

/// Represents the authoritative state of a single generated map.
#[derive(Debug)]
pub struct World {
    session: SessionId,
    seed: u64,
    grid: HexGrid,
    state: MapState,
    cells: Vec<Cell>,
    player: Player,
    words: WordBank,
    word_targets: HashMap<String, WordTarget>,
    time: u64,
}

impl World {
    /// Generates a new map, appending every event produced along the way.
    ///
    /// The same configuration always yields the same grid. Generation fails
    /// instead of truncating when the enemies or words do not fit.
    pub fn generate(
        session: SessionId,
        config: &MapConfig,
        out_events: &mut Vec<Event>,
    ) -> Result<Self, GenerationError> {
        let columns = config.columns();
        let rows = config.rows();
        if columns <= 2 || rows <= 2 {
            return Err(GenerationError::GridTooSmall { columns, rows });
        }
        let grid = HexGrid::new(columns, rows);
        if config.starting_health() <= 0 {
            return Err(GenerationError::NonPositiveHealth {
                health: config.starting_health(),
            });
        }

        let mut rng = SeededRng::new(config.seed());
        let mut words = WordBank::build(WORD_LIST, &mut rng);
        let enemies = place_enemies(&grid, config.enemies(), &mut rng)?;
        let max_xp: u32 = enemies.iter().sum();
        if max_xp == 0 {
            return Err(GenerationError::EmptyRoster);
        }
        words.ensure_capacity(&required_words(&grid, &enemies))?;

        let mut cells = Vec::with_capacity(grid.len());
        for (coord, enemy) in grid.coords().zip(enemies.iter().copied()) {
            let difficulty = word_difficulty(&grid, coord);
            let Some(word) = words.draw(difficulty) else {
                return Err(GenerationError::WordBankExhausted {
                    difficulty,
                    required: 1,
                    available: 0,
                });
            };
            cells.push(Cell::new(coord, enemy, word));
        }

        for coord in grid.coords() {
            let heat = grid
                .neighbors(coord)
                .filter_map(|(_, neighbor)| grid.index(neighbor))
                .map(|index| cells[index].enemy())
                .sum();
            if let Some(index) = grid.index(coord) {
                cells[index].set_heat(heat);
            }
        }

        let mut world = Self {
            session,
            seed: config.seed(),
            grid,
            state: MapState::Loading,
            cells,
            player: Player::new(max_xp, config.starting_health()),
            words,
            word_targets: HashMap::new(),
            time: 0,
        };

        for coord in grid.border() {
            world.reveal_from(coord, out_events);
        }
        let _ = world.try_move(CellCoord::new(0, 0), out_events);
        world.transition(MapState::Created, out_events);

        info!(
            session = session.get(),
            seed = config.seed(),
            columns,
            rows,
            enemies = enemies.iter().filter(|level| **level > 0).count(),
            max_xp,
            "map generated"
        );
        Ok(world)
    }

    /// Attempts to move the player into `target`, fighting any live enemy there.
    ///
    /// Returns whether the player actually moved. Out-of-bounds targets and
    /// finished games leave the world untouched.
    pub fn try_move(&mut self, target: CellCoord, out_events: &mut Vec<Event>) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        let Some(index) = self.grid.index(target) else {
            debug!(column = target.column(), row = target.row(), "move outside the grid");
            return false;
        };

        let mut can_move = true;
        if self.cells[index].has_live_enemy() {
            let enemy = self.cells[index].enemy();
            let difficulty = combat_difficulty(enemy);
            let words = &mut self.words;
            let outcome = self.cells[index].apply_combat_hit(
                || {
                    let word = words.draw(difficulty);
                    if word.is_none() {
                        error!(difficulty, "word bank exhausted during combat");
                    }
                    word
                },
                out_events,
            );
            match outcome {
                HitOutcome::Survived => {
                    let amount = i64::from(enemy) - i64::from(self.player.level());
                    let amount = i32::try_from(amount).unwrap_or(i32::MAX);
                    debug!(enemy, amount, "enemy survived the blow");
                    self.damage_player(amount, out_events);
                    can_move = false;
                }
                HitOutcome::Defeated => {
                    debug!(enemy, "enemy defeated");
                    self.award_xp(enemy, out_events);
                }
            }
        }

        if can_move {
            self.reveal_from(target, out_events);
            self.player.move_to(target, out_events);
        }
        self.refresh_word_targets(out_events);
        can_move
    }

    /// Resolves a submitted word against the current word targets.
    ///
    /// A matching word moves toward its cell; any other word costs one point
    /// of health. Returns whether the player moved.
    pub fn accept_word(&mut self, word: &str, out_events: &mut Vec<Event>) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        match self.word_targets.get(word).map(|target| target.target) {
            Some(target) => self.try_move(target, out_events),
            None => {
                debug!(word, "word matches no adjacent cell");
                self.damage_player(WRONG_WORD_DAMAGE, out_events);
                false
            }
        }
    }

    /// Moves a freshly created map into play. Returns whether the state changed.
    pub fn start_clock(&mut self, out_events: &mut Vec<Event>) -> bool {
        if self.state != MapState::Created {
            return false;
        }
        self.transition(MapState::Playing, out_events);
        true
    }

    /// Advances the map clock by one second while the map is being played.
    ///
    /// Ticks scheduled for a different session are stale and ignored.
    pub fn tick(&mut self, session: SessionId, out_events: &mut Vec<Event>) -> bool {
        if session != self.session {
            debug!(
                stale = session.get(),
                current = self.session.get(),
                "ignoring tick for superseded session"
            );
            return false;
        }
        if self.state != MapState::Playing {
            return false;
        }
        self.time = self.time.saturating_add(1);
        out_events.push(Event::TimeUpdated { seconds: self.time });
        true
    }

    /// Reveals `origin` and spreads visibility across chains of zero-heat cells.
    fn reveal_from(&mut self, origin: CellCoord, out_events: &mut Vec<Event>) {
        let grid = self.grid;
        let mut pending = VecDeque::from([origin]);
        let mut revealed = 0usize;
        while let Some(coord) = pending.pop_front() {
            let Some(index) = grid.index(coord) else {
                continue;
            };
            if !self.cells[index].reveal(out_events) {
                continue;
            }
            revealed += 1;
            if self.cells[index].heat() != 0 {
                continue;
            }
            for (_, neighbor) in grid.neighbors(coord) {
                if let Some(neighbor_index) = grid.index(neighbor) {
                    if !self.cells[neighbor_index].is_visible() {
                        pending.push_back(neighbor);
                    }
                }
            }
        }
        if revealed > 1 {
            trace!(
                column = origin.column(),
                row = origin.row(),
                revealed,
                "visibility spread"
            );
        }
    }

    fn refresh_word_targets(&mut self, out_events: &mut Vec<Event>) {
        let origin = self.player.cell();
        let mut ordered = Vec::with_capacity(6);
        self.word_targets.clear();
        for (direction, neighbor) in self.grid.neighbors(origin) {
            let Some(index) = self.grid.index(neighbor) else {
                continue;
            };
            let target = WordTarget {
                word: self.cells[index].prompt_word().to_owned(),
                origin,
                target: neighbor,
                direction,
            };
            let _ = self.word_targets.insert(target.word.clone(), target.clone());
            ordered.push(target);
        }
        out_events.push(Event::WordTargetsUpdated { targets: ordered });
    }

    fn damage_player(&mut self, amount: i32, out_events: &mut Vec<Event>) {
        if self.player.damage(amount, out_events) && !self.player.is_alive() {
            info!(session = self.session.get(), time = self.time, "player defeated");
            self.transition(MapState::Failed, out_events);
        }
    }

    fn award_xp(&mut self, amount: u32, out_events: &mut Vec<Event>) {
        self.player.add_xp(amount, out_events);
        if self.player.has_won() {
            info!(session = self.session.get(), time = self.time, "player won");
            self.transition(MapState::Won, out_events);
        }
    }

    fn transition(&mut self, to: MapState, out_events: &mut Vec<Event>) {
        let from = self.state;
        if from == to || from.is_terminal() {
            return;
        }
        self.state = to;
        out_events.push(Event::MapStateChanged { from, to });
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartClock => {
            let _ = world.start_clock(out_events);
        }
        Command::SubmitWord { word } => {
            let _ = world.accept_word(&word, out_events);
        }
        Command::MovePlayer { target } => {
            let _ = world.try_move(target, out_events);
        }
        Command::Tick { session } => {
            let _ = world.tick(session, out_events);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use wordhex_core::{CellCoord, CellSnapshot, MapState, PlayerSnapshot, SessionId, WordTarget};

    use super::{HexGrid, World};

    /// Session the map belongs to.
    #[must_use]
    pub fn session(world: &World) -> SessionId {
        world.session
    }

    /// Seed the map was generated from.
    #[must_use]
    pub fn seed(world: &World) -> u64 {
        world.seed
    }

    /// Dimensions of the map.
    #[must_use]
    pub fn grid(world: &World) -> HexGrid {
        world.grid
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(world: &World) -> MapState {
        world.state
    }

    /// Whole seconds elapsed while playing.
    #[must_use]
    pub fn time(world: &World) -> u64 {
        world.time
    }

    /// Snapshots of every cell in row-major order.
    #[must_use]
    pub fn cells(world: &World) -> Vec<CellSnapshot> {
        world.cells.iter().map(|cell| cell.snapshot()).collect()
    }

    /// Snapshot of a single cell, if it lies inside the grid.
    #[must_use]
    pub fn cell(world: &World, coord: CellCoord) -> Option<CellSnapshot> {
        world
            .grid
            .index(coord)
            .map(|index| world.cells[index].snapshot())
    }

    /// Snapshot of the player.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        world.player.snapshot()
    }

    /// Current word targets ordered by direction around the player.
    #[must_use]
    pub fn word_targets(world: &World) -> Vec<WordTarget> {
        let mut targets: Vec<WordTarget> = world.word_targets.values().cloned().collect();
        targets.sort_by_key(|target| target.direction);
        targets
    }

    /// Target reached by typing `word`, if any.
    #[must_use]
    pub fn word_target(world: &World, word: &str) -> Option<WordTarget> {
        world.word_targets.get(word).cloned()
    }
}

fn place_enemies(
    grid: &HexGrid,
    placement: &EnemyPlacement,
    rng: &mut SeededRng,
) -> Result<Vec<u32>, GenerationError> {
    match placement {
        EnemyPlacement::Banded(bands) => {
            let slots: Vec<usize> = grid
                .coords()
                .filter(|coord| !grid.is_border(*coord))
                .filter_map(|coord| grid.index(coord))
                .collect();
            let mut roster = bands.roster();
            if roster.is_empty() {
                return Err(GenerationError::EmptyRoster);
            }
            if roster.len() > slots.len() {
                return Err(GenerationError::RosterTooLarge {
                    enemies: roster.len(),
                    slots: slots.len(),
                });
            }
            roster.resize(slots.len(), 0);
            rng::shuffle(&mut roster, rng);

            let mut layout = vec![0; grid.len()];
            for (index, level) in slots.into_iter().zip(roster) {
                layout[index] = level;
            }
            Ok(layout)
        }
        EnemyPlacement::Fixed(layout) => {
            if layout.len() != grid.len() {
                return Err(GenerationError::LayoutSizeMismatch {
                    expected: grid.len(),
                    actual: layout.len(),
                });
            }
            for (coord, level) in grid.coords().zip(layout.iter()) {
                if *level > 0 && grid.is_border(coord) {
                    return Err(GenerationError::EnemyOnBorder { cell: coord });
                }
            }
            Ok(layout.clone())
        }
    }
}

/// Word difficulty of a cell: one band per two rings in from the nearest edge.
fn word_difficulty(grid: &HexGrid, coord: CellCoord) -> usize {
    (grid.edge_distance(coord).min(WORD_DIFFICULTY_EDGE_CAP) / 2) as usize
}

/// Band that combat words for an enemy of the given level are drawn from.
fn combat_difficulty(enemy: u32) -> usize {
    (enemy as usize).min(MAX_DIFFICULTY)
}

/// Worst-case draws per band: one word per cell plus a combat word for every
/// blow an enemy can survive.
fn required_words(grid: &HexGrid, enemies: &[u32]) -> BandCounts {
    let mut required = [0; DIFFICULTY_BANDS];
    for (coord, enemy) in grid.coords().zip(enemies.iter().copied()) {
        required[word_difficulty(grid, coord)] += 1;
        if enemy > 1 {
            required[combat_difficulty(enemy)] += enemy as usize - 1;
        }
    }
    required
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(config: &MapConfig) -> (World, Vec<Event>) {
        let mut events = Vec::new();
        let world =
            World::generate(SessionId::new(1), config, &mut events).expect("generation succeeds");
        (world, events)
    }

    #[test]
    fn rejects_grids_without_interior() {
        let mut events = Vec::new();
        let result = World::generate(SessionId::new(1), &MapConfig::new(2, 8, 1), &mut events);
        assert_eq!(
            result.err(),
            Some(GenerationError::GridTooSmall { columns: 2, rows: 8 })
        );
    }

    #[test]
    fn rejects_roster_larger_than_interior() {
        let mut events = Vec::new();
        let result = World::generate(SessionId::new(1), &MapConfig::new(5, 5, 1), &mut events);
        assert_eq!(
            result.err(),
            Some(GenerationError::RosterTooLarge {
                enemies: 25,
                slots: 9,
            })
        );
    }

    #[test]
    fn rejects_players_that_start_dead() {
        for health in [0, -4] {
            let config = MapConfig::new(5, 5, 1)
                .with_enemy_bands(EnemyBands::new(vec![1]))
                .with_starting_health(health);
            let mut events = Vec::new();
            let result = World::generate(SessionId::new(1), &config, &mut events);
            assert_eq!(
                result.err(),
                Some(GenerationError::NonPositiveHealth { health })
            );
            assert!(events.is_empty());
        }
    }

    #[test]
    fn rejects_enemies_on_the_border() {
        let mut layout = vec![0; 9];
        layout[1] = 2;
        let config = MapConfig::new(3, 3, 1).with_enemy_layout(layout);
        let mut events = Vec::new();
        let result = World::generate(SessionId::new(1), &config, &mut events);
        assert_eq!(
            result.err(),
            Some(GenerationError::EnemyOnBorder {
                cell: CellCoord::new(1, 0),
            })
        );
    }

    #[test]
    fn rejects_maps_without_experience() {
        let config = MapConfig::new(3, 3, 1).with_enemy_layout(vec![0; 9]);
        let mut events = Vec::new();
        let result = World::generate(SessionId::new(1), &config, &mut events);
        assert_eq!(result.err(), Some(GenerationError::EmptyRoster));
    }

    #[test]
    fn rejects_grids_larger_than_the_word_list() {
        let mut events = Vec::new();
        let result = World::generate(SessionId::new(1), &MapConfig::new(60, 60, 1), &mut events);
        assert!(matches!(
            result.err(),
            Some(GenerationError::WordBankExhausted { difficulty: 0, .. })
        ));
    }

    #[test]
    fn generation_ends_in_created_state() {
        let (world, events) = generate(&MapConfig::default());
        assert_eq!(query::state(&world), MapState::Created);
        assert_eq!(
            events.last(),
            Some(&Event::MapStateChanged {
                from: MapState::Loading,
                to: MapState::Created,
            })
        );
    }

    #[test]
    fn word_difficulty_rises_every_two_rings() {
        let grid = HexGrid::new(12, 12);
        assert_eq!(word_difficulty(&grid, CellCoord::new(0, 5)), 0);
        assert_eq!(word_difficulty(&grid, CellCoord::new(1, 5)), 0);
        assert_eq!(word_difficulty(&grid, CellCoord::new(2, 5)), 1);
        assert_eq!(word_difficulty(&grid, CellCoord::new(3, 5)), 1);
        assert_eq!(word_difficulty(&grid, CellCoord::new(4, 5)), 2);
        assert_eq!(word_difficulty(&grid, CellCoord::new(5, 5)), 2);
    }

    #[test]
    fn cell_words_match_their_difficulty() {
        let (world, _) = generate(&MapConfig::default());
        for cell in query::cells(&world) {
            let expected = word_difficulty(&query::grid(&world), cell.coord);
            assert_eq!(words::difficulty_for_length(cell.word.len()), expected);
        }
    }

    #[test]
    fn stale_ticks_are_ignored() {
        let (mut world, _) = generate(&MapConfig::default());
        let mut events = Vec::new();
        assert!(world.start_clock(&mut events));
        assert!(!world.tick(SessionId::new(0), &mut events));
        assert!(world.tick(SessionId::new(1), &mut events));
        assert_eq!(query::time(&world), 1);
        assert_eq!(events.last(), Some(&Event::TimeUpdated { seconds: 1 }));
    }

    #[test]
    fn ticks_before_play_are_ignored() {
        let (mut world, _) = generate(&MapConfig::default());
        let mut events = Vec::new();
        assert!(!world.tick(SessionId::new(1), &mut events));
        assert_eq!(query::time(&world), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn clock_starts_once() {
        let (mut world, _) = generate(&MapConfig::default());
        let mut events = Vec::new();
        assert!(world.start_clock(&mut events));
        assert!(!world.start_clock(&mut events));
        assert_eq!(
            events,
            vec![Event::MapStateChanged {
                from: MapState::Created,
                to: MapState::Playing,
            }]
        );
    }

    #[test]
    fn out_of_bounds_moves_change_nothing() {
        let (mut world, _) = generate(&MapConfig::default());
        let mut events = Vec::new();
        assert!(!world.try_move(CellCoord::new(99, 0), &mut events));
        assert!(events.is_empty());
        assert_eq!(query::player(&world).cell, CellCoord::new(0, 0));
    }

    #[test]
    fn required_words_count_cells_and_rerolls() {
        let grid = HexGrid::new(3, 3);
        let mut enemies = vec![0; 9];
        enemies[4] = 3;
        let required = required_words(&grid, &enemies);
        assert_eq!(required[0], 9);
        assert_eq!(required[3], 2);
        assert_eq!(required.iter().sum::<usize>(), 11);
    }
}
