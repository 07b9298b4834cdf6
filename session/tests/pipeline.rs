use std::{cell::RefCell, rc::Rc, time::Duration};

use wordhex_core::{CellCoord, Event, EventKind, MapState, SessionId};
use wordhex_session::Session;
use wordhex_world::{query, GenerationError, MapConfig};

fn small_map(seed: u64, starting_health: i32) -> MapConfig {
    let mut layout = vec![0; 25];
    layout[6] = 1;
    layout[18] = 1;
    MapConfig::new(5, 5, seed)
        .with_enemy_layout(layout)
        .with_starting_health(starting_health)
}

fn record(session: &mut Session) -> Rc<RefCell<Vec<Event>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let _ = session.subscribe_all(move |event| sink.borrow_mut().push(event.clone()));
    log
}

fn type_word(session: &mut Session, word: &str) {
    for ch in word.chars() {
        session.append_char(ch);
    }
    session.accept_word();
}

fn word_toward(session: &Session, target: CellCoord) -> String {
    let world = session.world().expect("active map");
    query::word_targets(world)
        .into_iter()
        .find(|candidate| candidate.target == target)
        .map(|candidate| candidate.word)
        .expect("target adjacent to the player")
}

fn times(log: &[Event]) -> Vec<u64> {
    log.iter()
        .filter_map(|event| match event {
            Event::TimeUpdated { seconds } => Some(*seconds),
            _ => None,
        })
        .collect()
}

#[test]
fn first_character_starts_the_clock() {
    let mut session = Session::new();
    let log = record(&mut session);
    let _ = session.start(&small_map(1, 10)).expect("map generated");

    session.advance(Duration::from_secs(3));
    assert!(times(&log.borrow()).is_empty());
    assert!(!session.is_clock_running());

    session.append_char('q');
    assert!(session.is_clock_running());
    assert!(log.borrow().contains(&Event::MapStateChanged {
        from: MapState::Created,
        to: MapState::Playing,
    }));

    session.advance(Duration::from_millis(2_500));
    session.advance(Duration::from_millis(600));
    assert_eq!(times(&log.borrow()), vec![1, 2, 3]);
    assert_eq!(query::time(session.world().expect("active map")), 3);
}

#[test]
fn prompt_events_precede_world_events() {
    let mut session = Session::new();
    let _ = session.start(&small_map(2, 10)).expect("map generated");
    let word = word_toward(&session, CellCoord::new(1, 0));
    let log = record(&mut session);

    type_word(&mut session, &word);

    let log = log.borrow();
    let accepted = log
        .iter()
        .position(|event| matches!(event, Event::WordAccepted { .. }))
        .expect("word accepted");
    let moved = log
        .iter()
        .position(|event| matches!(event, Event::PlayerMoved { .. }))
        .expect("player moved");
    assert!(accepted < moved);
    assert_eq!(
        log[accepted + 1],
        Event::WordChanged {
            word: String::new(),
        }
    );
    assert_eq!(
        query::player(session.world().expect("active map")).cell,
        CellCoord::new(1, 0)
    );
    assert_eq!(session.current_word(), "");
}

#[test]
fn kind_subscriptions_only_see_their_kind() {
    let mut session = Session::new();
    let moves = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&moves);
    let _ = session.subscribe(EventKind::PlayerMoved, move |event| {
        assert!(matches!(event, Event::PlayerMoved { .. }));
        *sink.borrow_mut() += 1;
    });

    let _ = session.start(&small_map(3, 10)).expect("map generated");
    assert_eq!(*moves.borrow(), 1);
    let word = word_toward(&session, CellCoord::new(0, 1));
    type_word(&mut session, &word);
    assert_eq!(*moves.borrow(), 2);
}

#[test]
fn restarting_discards_ticks_of_the_previous_map() {
    let mut session = Session::new();
    let log = record(&mut session);
    let first = session.start(&small_map(4, 10)).expect("first map");
    session.append_char('a');
    session.advance(Duration::from_millis(1_500));
    assert_eq!(times(&log.borrow()), vec![1]);

    let second = session.start(&small_map(5, 10)).expect("second map");
    assert_ne!(first, second);
    assert_eq!(session.active_session(), Some(second));
    assert!(!session.is_clock_running());
    assert_eq!(session.current_word(), "");

    log.borrow_mut().clear();
    session.deliver_tick(first);
    session.advance(Duration::from_secs(2));
    assert!(times(&log.borrow()).is_empty());

    session.append_char('b');
    session.advance(Duration::from_secs(1));
    session.deliver_tick(first);
    session.deliver_tick(second);
    assert_eq!(times(&log.borrow()), vec![1, 2]);
}

#[test]
fn subscribers_survive_restarts() {
    let mut session = Session::new();
    let created = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&created);
    let _ = session.subscribe(EventKind::MapStateChanged, move |event| {
        if let Event::MapStateChanged {
            to: MapState::Created,
            ..
        } = event
        {
            *sink.borrow_mut() += 1;
        }
    });

    for seed in 0..3 {
        let _ = session.start(&small_map(seed, 10)).expect("map generated");
    }
    assert_eq!(*created.borrow(), 3);
}

#[test]
fn finished_map_ignores_input_and_time() {
    let mut session = Session::new();
    let log = record(&mut session);
    let _ = session.start(&small_map(6, 1)).expect("map generated");

    type_word(&mut session, "not-a-target");
    let world = session.world().expect("active map");
    assert_eq!(query::state(world), MapState::Failed);
    assert!(!session.is_clock_running());

    log.borrow_mut().clear();
    session.append_char('x');
    session.backspace();
    session.clear();
    session.accept_word();
    session.advance(Duration::from_secs(5));
    assert!(log.borrow().is_empty());
    assert_eq!(session.current_word(), "");
}

#[test]
fn failed_generation_keeps_the_active_map() {
    let mut session = Session::new();
    let active = session.start(&small_map(7, 10)).expect("map generated");

    let error = session
        .start(&MapConfig::new(2, 2, 7))
        .expect_err("grid too small");
    assert_eq!(
        error,
        GenerationError::GridTooSmall {
            columns: 2,
            rows: 2,
        }
    );
    assert_eq!(session.active_session(), Some(active));
}

#[test]
fn input_without_a_map_is_ignored() {
    let mut session = Session::new();
    let log = record(&mut session);
    session.append_char('a');
    session.accept_word();
    session.advance(Duration::from_secs(1));
    session.deliver_tick(SessionId::new(1));
    assert!(log.borrow().is_empty());
    assert!(session.world().is_none());
}
