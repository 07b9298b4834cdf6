#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Orchestrates one Wordhex game at a time.
//!
//! A [`Session`] owns the active [`World`] together with its word prompt and
//! clock, routes player input through them, and publishes every resulting
//! event on an [`EventBus`] whose subscribers outlive individual maps.

pub mod bus;

use std::time::Duration;

use tracing::{debug, info};
use wordhex_core::{Command, Event, EventKind, Input, SessionId};
use wordhex_system_clock::Clock;
use wordhex_system_word_prompt::WordPrompt;
use wordhex_world::{apply, query, GenerationError, MapConfig, World};

pub use bus::{EventBus, SubscriptionId};

#[derive(Debug)]
struct Game {
    world: World,
    prompt: WordPrompt,
    clock: Clock,
}

/// Owner of the event bus and the currently running map.
#[derive(Debug)]
pub struct Session {
    bus: EventBus,
    next_session: SessionId,
    game: Option<Game>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session without a map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bus: EventBus::new(),
            next_session: SessionId::new(1),
            game: None,
        }
    }

    /// Registers a handler for a single event kind.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event) + 'static,
    {
        self.bus.subscribe(kind, handler)
    }

    /// Registers a handler for every event kind.
    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event) + 'static,
    {
        self.bus.subscribe_all(handler)
    }

    /// Removes a handler. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Generates a new map and makes it the active one.
    ///
    /// The previous map's clock is cancelled so none of its ticks reach the
    /// new world. When generation fails the previous map stays active.
    pub fn start(&mut self, config: &MapConfig) -> Result<SessionId, GenerationError> {
        let session = self.next_session;
        let mut events = Vec::new();
        let world = World::generate(session, config, &mut events)?;
        self.next_session = session.next();

        if let Some(mut previous) = self.game.take() {
            let _ = previous.clock.cancel();
            info!(
                previous = previous.clock.session().get(),
                current = session.get(),
                "map restarted"
            );
        }
        self.game = Some(Game {
            world,
            prompt: WordPrompt::new(),
            clock: Clock::new(session),
        });
        self.bus.publish_all(&events);
        Ok(session)
    }

    /// Feeds one input intent through the word prompt and into the world.
    ///
    /// Input is ignored while no map is active or once the map is finished.
    pub fn input(&mut self, input: Input) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if query::state(&game.world).is_terminal() {
            debug!(?input, "ignoring input for finished map");
            return;
        }

        let mut prompt_events = Vec::new();
        let mut commands = Vec::new();
        game.prompt.handle(input, &mut prompt_events, &mut commands);
        self.bus.publish_all(&prompt_events);
        self.run(commands);
    }

    /// Types a single character.
    pub fn append_char(&mut self, ch: char) {
        self.input(Input::Character(ch));
    }

    /// Submits the word typed so far.
    pub fn accept_word(&mut self) {
        self.input(Input::Accept);
    }

    /// Removes the last typed character.
    pub fn backspace(&mut self) {
        self.input(Input::Backspace);
    }

    /// Discards the word typed so far.
    pub fn clear(&mut self) {
        self.input(Input::Clear);
    }

    /// Lets wall-clock time pass for the active map's clock.
    pub fn advance(&mut self, dt: Duration) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let mut commands = Vec::new();
        game.clock.advance(dt, &mut commands);
        self.run(commands);
    }

    /// Delivers a tick addressed to `session`.
    ///
    /// Ticks for any session other than the active one are dropped by the
    /// world.
    pub fn deliver_tick(&mut self, session: SessionId) {
        self.run(vec![Command::Tick { session }]);
    }

    /// World of the active map, if any.
    #[must_use]
    pub fn world(&self) -> Option<&World> {
        self.game.as_ref().map(|game| &game.world)
    }

    /// Identifier of the active map, if any.
    #[must_use]
    pub fn active_session(&self) -> Option<SessionId> {
        self.game.as_ref().map(|game| game.clock.session())
    }

    /// Word typed so far on the active map.
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.game
            .as_ref()
            .map_or("", |game| game.prompt.current_word())
    }

    /// Reports whether the active map's clock is ticking.
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.game
            .as_ref()
            .map_or(false, |game| game.clock.is_running())
    }

    fn run(&mut self, commands: Vec<Command>) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        for command in commands {
            let mut events = Vec::new();
            apply(&mut game.world, command, &mut events);
            game.clock.handle(&events);
            self.bus.publish_all(&events);
        }
    }
}
