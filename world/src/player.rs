use wordhex_core::{CellCoord, Event, PlayerSnapshot};

/// Experience needed per player level.
const XP_PER_LEVEL: u32 = 10;

#[derive(Clone, Debug)]
pub(crate) struct Player {
    cell: CellCoord,
    level: u32,
    health: i32,
    xp: u32,
    max_xp: u32,
    alive: bool,
    won: bool,
}

impl Player {
    pub(crate) fn new(max_xp: u32, health: i32) -> Self {
        Self {
            cell: CellCoord::new(0, 0),
            level: 1,
            health,
            xp: 0,
            max_xp,
            alive: health > 0,
            won: false,
        }
    }

    pub(crate) const fn cell(&self) -> CellCoord {
        self.cell
    }

    pub(crate) const fn level(&self) -> u32 {
        self.level
    }

    pub(crate) const fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) const fn has_won(&self) -> bool {
        self.won
    }

    pub(crate) fn move_to(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        self.cell = cell;
        out_events.push(Event::PlayerMoved {
            player: self.snapshot(),
        });
    }

    /// Subtracts health. Dead players and non-positive amounts are ignored.
    ///
    /// Returns whether any damage was applied.
    pub(crate) fn damage(&mut self, amount: i32, out_events: &mut Vec<Event>) -> bool {
        if self.health <= 0 || amount <= 0 {
            return false;
        }

        self.health = self.health.saturating_sub(amount);
        if self.health <= 0 {
            self.alive = false;
        }
        out_events.push(Event::PlayerHurt {
            player: self.snapshot(),
            amount,
        });
        true
    }

    pub(crate) fn add_xp(&mut self, amount: u32, out_events: &mut Vec<Event>) {
        self.xp = self.xp.saturating_add(amount);
        self.level = self.xp / XP_PER_LEVEL + 1;
        if self.xp >= self.max_xp {
            self.won = true;
        }
        out_events.push(Event::PlayerGainedXp {
            player: self.snapshot(),
            amount,
        });
    }

    pub(crate) const fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            cell: self.cell,
            level: self.level,
            health: self.health,
            xp: self.xp,
            max_xp: self.max_xp,
            alive: self.alive,
            won: self.won,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_experience() {
        let mut player = Player::new(100, 10);
        let mut events = Vec::new();
        player.add_xp(9, &mut events);
        assert_eq!(player.level(), 1);
        player.add_xp(1, &mut events);
        assert_eq!(player.level(), 2);
        player.add_xp(25, &mut events);
        assert_eq!(player.level(), 4);
        assert!(!player.has_won());
    }

    #[test]
    fn winning_requires_all_experience() {
        let mut player = Player::new(5, 10);
        let mut events = Vec::new();
        player.add_xp(4, &mut events);
        assert!(!player.has_won());
        player.add_xp(1, &mut events);
        assert!(player.has_won());
        player.add_xp(0, &mut events);
        assert!(player.has_won());
    }

    #[test]
    fn death_freezes_health() {
        let mut player = Player::new(5, 3);
        let mut events = Vec::new();
        assert!(player.damage(2, &mut events));
        assert!(player.is_alive());
        assert!(player.damage(4, &mut events));
        assert!(!player.is_alive());
        assert_eq!(player.snapshot().health, -3);
        assert!(!player.damage(1, &mut events));
        assert_eq!(player.snapshot().health, -3);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn non_positive_damage_is_ignored() {
        let mut player = Player::new(5, 10);
        let mut events = Vec::new();
        assert!(!player.damage(0, &mut events));
        assert!(!player.damage(-3, &mut events));
        assert_eq!(player.snapshot().health, 10);
        assert!(events.is_empty());
    }

    #[test]
    fn moving_reports_new_position() {
        let mut player = Player::new(5, 10);
        let mut events = Vec::new();
        player.move_to(CellCoord::new(1, 0), &mut events);
        assert_eq!(player.cell(), CellCoord::new(1, 0));
        assert!(matches!(
            events.as_slice(),
            [Event::PlayerMoved { player }] if player.cell == CellCoord::new(1, 0)
        ));
    }
}
