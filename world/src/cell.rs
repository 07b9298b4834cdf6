use wordhex_core::{CellCoord, CellSnapshot, Event};

/// Result of landing a combat blow on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HitOutcome {
    /// The enemy still has health left.
    Survived,
    /// The blow reduced the enemy to zero health.
    Defeated,
}

#[derive(Clone, Debug)]
pub(crate) struct Cell {
    coord: CellCoord,
    enemy: u32,
    health: u32,
    heat: u32,
    visible: bool,
    word: String,
    combat_word: Option<String>,
    in_combat: bool,
}

impl Cell {
    pub(crate) fn new(coord: CellCoord, enemy: u32, word: String) -> Self {
        Self {
            coord,
            enemy,
            health: enemy,
            heat: 0,
            visible: false,
            word,
            combat_word: None,
            in_combat: false,
        }
    }

    pub(crate) const fn enemy(&self) -> u32 {
        self.enemy
    }

    pub(crate) const fn heat(&self) -> u32 {
        self.heat
    }

    pub(crate) fn set_heat(&mut self, heat: u32) {
        self.heat = heat;
    }

    pub(crate) const fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) const fn has_live_enemy(&self) -> bool {
        self.enemy > 0 && self.health > 0
    }

    /// Word that currently targets this cell.
    pub(crate) fn prompt_word(&self) -> &str {
        self.combat_word.as_deref().unwrap_or(&self.word)
    }

    /// Makes the cell visible. Returns `false` when it already was.
    pub(crate) fn reveal(&mut self, out_events: &mut Vec<Event>) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        out_events.push(Event::CellShown {
            cell: self.snapshot(),
        });
        true
    }

    /// Removes one point of enemy health.
    ///
    /// `reroll` supplies the next combat word and is only consulted when the
    /// enemy survives the blow.
    pub(crate) fn apply_combat_hit<F>(&mut self, reroll: F, out_events: &mut Vec<Event>) -> HitOutcome
    where
        F: FnOnce() -> Option<String>,
    {
        if !self.has_live_enemy() {
            return HitOutcome::Defeated;
        }

        self.health -= 1;
        let outcome = if self.health > 0 {
            self.combat_word = reroll();
            self.in_combat = true;
            HitOutcome::Survived
        } else {
            self.combat_word = None;
            self.in_combat = false;
            HitOutcome::Defeated
        };
        out_events.push(Event::CellDamaged {
            cell: self.snapshot(),
        });
        outcome
    }

    pub(crate) fn snapshot(&self) -> CellSnapshot {
        CellSnapshot {
            coord: self.coord,
            enemy: self.enemy,
            health: self.health,
            heat: self.heat,
            visible: self.visible,
            word: self.word.clone(),
            combat_word: self.combat_word.clone(),
            in_combat: self.in_combat,
        }
    }
}
