#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Wordhex adapters.
//!
//! A [`Scene`] is maintained purely from published events, so any adapter
//! subscribed to the session bus can keep one up to date and hand it to a
//! [`RenderingBackend`].

use std::fmt::Write as _;

use anyhow::Result as AnyResult;
use glam::Vec2;
use wordhex_core::{
    CellCoord, CellSnapshot, Event, HexDirection, MapState, PlayerSnapshot, WordTarget,
};

/// Horizontal distance between neighbouring hex origins on one row.
pub const HEX_WIDTH: f32 = 100.0;

/// Vertical distance between two rows of hexes.
pub const HEX_ROW_HEIGHT: f32 = 91.0;

/// Offset from a hex origin to its centre.
pub const HEX_CENTER_OFFSET: Vec2 = Vec2::new(50.0, 57.0);

/// Horizontal gap between a hex centre and a word label beside it.
pub const LABEL_GAP: f32 = 60.0;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |value: f32| value + (1.0 - value) * amount;
        Self {
            red: channel(self.red),
            green: channel(self.green),
            blue: channel(self.blue),
            alpha: self.alpha,
        }
    }
}

/// Fill of a cell that has not been revealed yet.
pub const HIDDEN_FILL: Color = Color::from_rgb_u8(40, 40, 48);
/// Fill of a revealed cell without a fight in progress.
pub const OPEN_FILL: Color = Color::from_rgb_u8(222, 214, 190);
/// Fill of a cell whose enemy has been hit at least once.
pub const COMBAT_FILL: Color = Color::from_rgb_u8(170, 30, 30);

/// Top-left origin of the hex drawn for `coord`.
///
/// Odd rows are shifted half a hex to the right.
#[must_use]
pub fn hex_origin(coord: CellCoord) -> Vec2 {
    let column = coord.column() as f32;
    let row = coord.row() as f32;
    let shift = (coord.row() % 2) as f32 * HEX_WIDTH / 2.0;
    Vec2::new(column * HEX_WIDTH + shift, row * HEX_ROW_HEIGHT)
}

/// Centre of the hex drawn for `coord`.
#[must_use]
pub fn hex_center(coord: CellCoord) -> Vec2 {
    hex_origin(coord) + HEX_CENTER_OFFSET
}

/// Percentage of the combat shade painted over an enemy still being fought.
///
/// Ranges from 30 for an enemy on its last hit point up to 80 for an enemy at
/// full health.
#[must_use]
pub fn combat_fill_percent(health: u32, enemy: u32) -> f32 {
    if enemy == 0 {
        return 0.0;
    }
    health as f32 / enemy as f32 * 50.0 + 30.0
}

/// Formats whole seconds as `m:ss`.
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Side of the player on which a word label is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelSide {
    /// Label text ends left of the hex.
    Left,
    /// Label text starts right of the hex.
    Right,
}

impl LabelSide {
    /// Side used for labels pointing in `direction`.
    #[must_use]
    pub const fn for_direction(direction: HexDirection) -> Self {
        if direction.is_left() {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Word label pointing from the player towards one adjacent cell.
#[derive(Clone, Debug, PartialEq)]
pub struct WordLabel {
    /// Word to type.
    pub word: String,
    /// Cell the word leads to.
    pub target: CellCoord,
    /// Direction from the player to the target.
    pub direction: HexDirection,
    /// Side of the target hex the label is drawn on.
    pub side: LabelSide,
    /// Point the label text is anchored at.
    pub anchor: Vec2,
}

impl WordLabel {
    fn from_target(target: &WordTarget) -> Self {
        let side = LabelSide::for_direction(target.direction);
        let center = hex_center(target.target);
        let anchor = match side {
            LabelSide::Left => center - Vec2::new(LABEL_GAP, 0.0),
            LabelSide::Right => center + Vec2::new(LABEL_GAP, 0.0),
        };
        Self {
            word: target.word.clone(),
            target: target.target,
            direction: target.direction,
            side,
            anchor,
        }
    }
}

/// Cell as last reported by the world.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneCell {
    /// Latest snapshot of the cell.
    pub snapshot: CellSnapshot,
    /// Top-left origin of the hex.
    pub origin: Vec2,
}

impl SceneCell {
    fn new(snapshot: CellSnapshot) -> Self {
        let origin = hex_origin(snapshot.coord);
        Self { snapshot, origin }
    }

    /// Combat shade percentage, present only while a fight is in progress.
    #[must_use]
    pub fn combat_shade(&self) -> Option<f32> {
        let cell = &self.snapshot;
        (cell.in_combat && cell.has_live_enemy())
            .then(|| combat_fill_percent(cell.health, cell.enemy))
    }

    /// Fill color for the hex.
    #[must_use]
    pub fn fill(&self) -> Color {
        if !self.snapshot.visible {
            return HIDDEN_FILL;
        }
        match self.combat_shade() {
            Some(percent) => COMBAT_FILL.lighten(1.0 - percent / 100.0),
            None => OPEN_FILL,
        }
    }
}

/// Values shown in the heads-up display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    /// Remaining player health.
    pub health: i32,
    /// Experience collected so far.
    pub xp: u32,
    /// Experience needed to win.
    pub max_xp: u32,
    /// Player level.
    pub level: u32,
    /// Seconds elapsed on the map clock.
    pub seconds: u64,
    /// Current map state.
    pub state: MapState,
    /// Word typed so far.
    pub word: String,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            health: 0,
            xp: 0,
            max_xp: 0,
            level: 1,
            seconds: 0,
            state: MapState::Loading,
            word: String::new(),
        }
    }
}

impl Hud {
    /// Elapsed time formatted as `m:ss`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.seconds)
    }

    /// Face shown beside the prompt once the map is finished.
    #[must_use]
    pub const fn face(&self) -> Option<&'static str> {
        match self.state {
            MapState::Won => Some(":)"),
            MapState::Failed => Some(":("),
            MapState::Loading | MapState::Created | MapState::Playing => None,
        }
    }

    fn record_player(&mut self, player: &PlayerSnapshot) {
        self.health = player.health;
        self.xp = player.xp;
        self.max_xp = player.max_xp;
        self.level = player.level;
    }
}

/// Scene description rebuilt from the event stream.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    columns: u32,
    rows: u32,
    cells: Vec<Option<SceneCell>>,
    player: Option<CellCoord>,
    labels: Vec<WordLabel>,
    hud: Hud,
}

impl Scene {
    /// Creates an empty scene for a grid of the given dimensions.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
            player: None,
            labels: Vec::new(),
            hud: Hud::default(),
        }
    }

    /// Discards everything and resizes the scene for a new map.
    pub fn reset(&mut self, columns: u32, rows: u32) {
        *self = Self::new(columns, rows);
    }

    /// Number of hex columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of hex rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Cell last reported at `coord`, if any.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&SceneCell> {
        self.index(coord).and_then(|index| self.cells[index].as_ref())
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub const fn player(&self) -> Option<CellCoord> {
        self.player
    }

    /// Word labels around the player, ordered by direction.
    #[must_use]
    pub fn labels(&self) -> &[WordLabel] {
        &self.labels
    }

    /// Heads-up display values.
    #[must_use]
    pub const fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Pixel size of the whole hex board.
    #[must_use]
    pub fn board_size(&self) -> Vec2 {
        let shift = if self.rows > 1 { HEX_WIDTH / 2.0 } else { 0.0 };
        Vec2::new(
            self.columns as f32 * HEX_WIDTH + shift,
            self.rows.saturating_sub(1) as f32 * HEX_ROW_HEIGHT + HEX_CENTER_OFFSET.y * 2.0,
        )
    }

    /// Folds one published event into the scene.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::CellShown { cell } | Event::CellDamaged { cell } => {
                if let Some(index) = self.index(cell.coord) {
                    self.cells[index] = Some(SceneCell::new(cell.clone()));
                }
            }
            Event::PlayerMoved { player } => {
                self.player = Some(player.cell);
                self.hud.record_player(player);
            }
            Event::PlayerHurt { player, .. } | Event::PlayerGainedXp { player, .. } => {
                self.hud.record_player(player);
            }
            Event::MapStateChanged { to, .. } => self.hud.state = *to,
            Event::WordTargetsUpdated { targets } => {
                self.labels = targets.iter().map(WordLabel::from_target).collect();
            }
            Event::TimeUpdated { seconds } => self.hud.seconds = *seconds,
            Event::WordChanged { word } => self.hud.word.clone_from(word),
            Event::WordAccepted { .. } => {}
        }
    }

    /// Draws the scene as plain text, one line per hex row followed by the
    /// word labels and the HUD.
    ///
    /// `@` marks the player, `#` a hidden cell, a digit the enemy level of a
    /// live enemy, `x` a defeated enemy, a lower-case letter `a`.. the heat of
    /// an empty cell and `.` a cell without heat.
    #[must_use]
    pub fn draw_text(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            if row % 2 == 1 {
                out.push(' ');
            }
            for column in 0..self.columns {
                let coord = CellCoord::new(column, row);
                out.push(' ');
                out.push(self.glyph(coord));
            }
            out.push('\n');
        }
        for label in &self.labels {
            let direction = format!("{:?}", label.direction);
            let _ = writeln!(out, "  {direction:<9} {}", label.word);
        }
        let hud = &self.hud;
        let _ = write!(
            out,
            "hp {}  xp {}/{}  lvl {}  {}  > {}",
            hud.health,
            hud.xp,
            hud.max_xp,
            hud.level,
            hud.clock(),
            hud.word
        );
        if let Some(face) = hud.face() {
            let _ = write!(out, " {face}");
        }
        out.push('\n');
        out
    }

    fn glyph(&self, coord: CellCoord) -> char {
        if self.player == Some(coord) {
            return '@';
        }
        let Some(cell) = self.cell(coord).map(|cell| &cell.snapshot) else {
            return '#';
        };
        if !cell.visible {
            '#'
        } else if cell.has_live_enemy() {
            char::from_digit(cell.enemy.min(9), 10).unwrap_or('?')
        } else if cell.enemy > 0 {
            'x'
        } else if cell.heat == 0 {
            '.'
        } else {
            char::from_u32('a' as u32 + cell.heat.min(25) - 1).unwrap_or('?')
        }
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        if coord.column() < self.columns && coord.row() < self.rows {
            Some(coord.row() as usize * self.columns as usize + coord.column() as usize)
        } else {
            None
        }
    }
}

/// Rendering backend capable of presenting Wordhex scenes.
pub trait RenderingBackend {
    /// Presents the current state of the scene.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(column: u32, row: u32, enemy: u32, health: u32, heat: u32) -> CellSnapshot {
        CellSnapshot {
            coord: CellCoord::new(column, row),
            enemy,
            health,
            heat,
            visible: true,
            word: format!("w{column}{row}"),
            combat_word: None,
            in_combat: false,
        }
    }

    fn player_at(column: u32, row: u32) -> PlayerSnapshot {
        PlayerSnapshot {
            cell: CellCoord::new(column, row),
            level: 1,
            health: 10,
            xp: 0,
            max_xp: 5,
            alive: true,
            won: false,
        }
    }

    #[test]
    fn odd_rows_are_shifted_half_a_hex() {
        assert_eq!(hex_origin(CellCoord::new(0, 0)), Vec2::new(0.0, 0.0));
        assert_eq!(hex_origin(CellCoord::new(2, 0)), Vec2::new(200.0, 0.0));
        assert_eq!(hex_origin(CellCoord::new(2, 1)), Vec2::new(250.0, 91.0));
        assert_eq!(hex_origin(CellCoord::new(1, 4)), Vec2::new(100.0, 364.0));
    }

    #[test]
    fn combat_shade_scales_with_remaining_health() {
        assert_eq!(combat_fill_percent(4, 4), 80.0);
        assert_eq!(combat_fill_percent(1, 2), 55.0);
        assert_eq!(combat_fill_percent(0, 0), 0.0);

        let mut cell = snapshot(1, 1, 2, 1, 0);
        assert_eq!(SceneCell::new(cell.clone()).combat_shade(), None);
        cell.in_combat = true;
        let scene_cell = SceneCell::new(cell);
        assert_eq!(scene_cell.combat_shade(), Some(55.0));
        assert_ne!(scene_cell.fill(), OPEN_FILL);
    }

    #[test]
    fn clock_is_formatted_as_minutes_and_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn labels_are_placed_by_direction() {
        let mut scene = Scene::new(4, 4);
        let origin = CellCoord::new(1, 1);
        let targets: Vec<WordTarget> = [HexDirection::East, HexDirection::West]
            .into_iter()
            .map(|direction| WordTarget {
                word: format!("{direction:?}").to_lowercase(),
                origin,
                target: origin.neighbor(direction).expect("inside"),
                direction,
            })
            .collect();
        scene.apply(&Event::WordTargetsUpdated { targets });

        let labels = scene.labels();
        assert_eq!(labels[0].side, LabelSide::Right);
        assert_eq!(labels[1].side, LabelSide::Left);
        assert!(labels[0].anchor.x > hex_center(labels[0].target).x);
        assert!(labels[1].anchor.x < hex_center(labels[1].target).x);
    }

    #[test]
    fn hud_follows_player_and_state_events() {
        let mut scene = Scene::new(3, 3);
        assert_eq!(scene.hud().face(), None);

        scene.apply(&Event::PlayerMoved {
            player: player_at(0, 0),
        });
        let mut hurt = player_at(0, 0);
        hurt.health = 7;
        scene.apply(&Event::PlayerHurt {
            player: hurt,
            amount: 3,
        });
        scene.apply(&Event::TimeUpdated { seconds: 61 });
        scene.apply(&Event::WordChanged {
            word: "ab".to_owned(),
        });
        scene.apply(&Event::MapStateChanged {
            from: MapState::Playing,
            to: MapState::Failed,
        });

        let hud = scene.hud();
        assert_eq!(hud.health, 7);
        assert_eq!(hud.clock(), "1:01");
        assert_eq!(hud.word, "ab");
        assert_eq!(hud.face(), Some(":("));
        assert_eq!(scene.player(), Some(CellCoord::new(0, 0)));
    }

    #[test]
    fn text_drawing_marks_cells_by_state() {
        let mut scene = Scene::new(3, 2);
        scene.apply(&Event::CellShown {
            cell: snapshot(1, 0, 0, 0, 0),
        });
        scene.apply(&Event::CellShown {
            cell: snapshot(2, 0, 0, 0, 3),
        });
        scene.apply(&Event::CellShown {
            cell: snapshot(1, 1, 2, 2, 0),
        });
        scene.apply(&Event::CellShown {
            cell: snapshot(2, 1, 1, 0, 0),
        });
        scene.apply(&Event::PlayerMoved {
            player: player_at(0, 0),
        });

        let text = scene.draw_text();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(" @ . c"));
        assert_eq!(lines.next(), Some("  # 2 x"));
        assert_eq!(lines.next(), Some("hp 10  xp 0/5  lvl 1  0:00  > "));
    }

    #[test]
    fn reset_clears_previous_map() {
        let mut scene = Scene::new(3, 3);
        scene.apply(&Event::CellShown {
            cell: snapshot(1, 1, 0, 0, 0),
        });
        scene.reset(5, 4);
        assert_eq!(scene.columns(), 5);
        assert_eq!(scene.rows(), 4);
        assert!(scene.cell(CellCoord::new(1, 1)).is_none());
        assert_eq!(scene.hud(), &Hud::default());
    }
}
