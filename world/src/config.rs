//! Map generation parameters.

/// Column count used when adapters do not request a specific size.
pub const DEFAULT_COLUMNS: u32 = 12;
/// Row count used when adapters do not request a specific size.
pub const DEFAULT_ROWS: u32 = 10;
/// Health the player starts every map with.
pub const DEFAULT_STARTING_HEALTH: i32 = 10;
/// Number of enemies per level, starting at level 1.
pub const DEFAULT_ENEMY_BANDS: [u32; 5] = [12, 6, 3, 2, 2];

/// Enemy roster expressed as a count per level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyBands {
    counts: Vec<u32>,
}

impl EnemyBands {
    /// Creates bands where `counts[i]` enemies have level `i + 1`.
    #[must_use]
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// Expands the bands into one level entry per enemy, weakest first.
    #[must_use]
    pub fn roster(&self) -> Vec<u32> {
        let mut roster = Vec::new();
        for (level, count) in (1..).zip(self.counts.iter().copied()) {
            roster.extend(std::iter::repeat(level).take(count as usize));
        }
        roster
    }

    /// Total number of enemies across all levels.
    #[must_use]
    pub fn enemy_count(&self) -> usize {
        self.counts.iter().map(|count| *count as usize).sum()
    }

    /// Sum of all enemy levels, which is the experience needed to win.
    #[must_use]
    pub fn total_xp(&self) -> u32 {
        (1..).zip(self.counts.iter()).map(|(level, count)| level * count).sum()
    }
}

impl Default for EnemyBands {
    fn default() -> Self {
        Self::new(DEFAULT_ENEMY_BANDS.to_vec())
    }
}

/// Strategy used to populate the grid with enemies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnemyPlacement {
    /// Shuffle a banded roster across the interior cells.
    Banded(EnemyBands),
    /// Use an explicit row-major enemy level per cell.
    Fixed(Vec<u32>),
}

/// Parameters that fully determine a generated map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapConfig {
    columns: u32,
    rows: u32,
    seed: u64,
    enemies: EnemyPlacement,
    starting_health: i32,
}

impl MapConfig {
    /// Creates a configuration with the default enemy bands and health.
    #[must_use]
    pub fn new(columns: u32, rows: u32, seed: u64) -> Self {
        Self {
            columns,
            rows,
            seed,
            enemies: EnemyPlacement::Banded(EnemyBands::default()),
            starting_health: DEFAULT_STARTING_HEALTH,
        }
    }

    /// Replaces the enemy roster with the provided bands.
    #[must_use]
    pub fn with_enemy_bands(mut self, bands: EnemyBands) -> Self {
        self.enemies = EnemyPlacement::Banded(bands);
        self
    }

    /// Places enemies exactly as listed, one row-major entry per cell.
    #[must_use]
    pub fn with_enemy_layout(mut self, layout: Vec<u32>) -> Self {
        self.enemies = EnemyPlacement::Fixed(layout);
        self
    }

    /// Overrides the player's starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Seed driving enemy placement and word assignment.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Strategy used to place enemies.
    #[must_use]
    pub const fn enemies(&self) -> &EnemyPlacement {
        &self.enemies
    }

    /// Health the player starts with.
    #[must_use]
    pub const fn starting_health(&self) -> i32 {
        self.starting_health
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands_hold_twenty_five_enemies() {
        let bands = EnemyBands::default();
        assert_eq!(bands.enemy_count(), 25);
        assert_eq!(bands.total_xp(), 12 + 12 + 9 + 8 + 10);
        assert_eq!(bands.roster().len(), 25);
    }

    #[test]
    fn roster_lists_levels_weakest_first() {
        let bands = EnemyBands::new(vec![2, 0, 1]);
        assert_eq!(bands.roster(), vec![1, 1, 3]);
        assert_eq!(bands.total_xp(), 5);
    }
}
