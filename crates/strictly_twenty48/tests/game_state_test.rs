//! Tests for the game lifecycle through the public API.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use strictly_twenty48::{
    AcceptingInput, Action, ActionError, AnimationPlan, Cell, CellInRange, CellIsEmpty, Clock,
    Direction, GameConfig, GameState, Grid, InvariantSet, LegalPlacement, Phase, Spawner,
    SystemClock, Twenty48Invariants,
};

/// Clock advanced by hand.
#[derive(Debug)]
struct StepClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl StepClock {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        })
    }

    fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}

fn game_on(rows: Vec<Vec<u32>>, clock: Arc<dyn Clock>) -> GameState {
    GameState::from_grid(Grid::from_rows(rows).unwrap(), Spawner::from_seed(21), clock)
}

#[test]
fn test_full_game_keeps_invariants_until_over() {
    let mut game = GameState::with_parts(3, Spawner::from_seed(2024), Arc::new(SystemClock)).unwrap();
    let mut turns = 0;

    while !game.is_game_over() && turns < 100_000 {
        let direction = Direction::ALL[turns % 4];
        let before = game.current_grid().clone();
        if game.apply_move(direction) {
            assert_eq!(game.phase(), Phase::Animating);
            assert_eq!(game.current_grid().tile_sum(), before.tile_sum());
            game.animations_complete();
            assert_eq!(game.current_grid().tile_sum(), before.tile_sum() + game.last_spawn().unwrap().value as u64);
        } else {
            assert_eq!(game.current_grid(), &before);
        }
        assert!(Twenty48Invariants::check_all(&game).is_ok());
        turns += 1;
    }

    assert!(game.is_game_over(), "a 3x3 game cycling directions must end");
    assert!(game.end_time().is_some());
    for direction in Direction::ALL {
        assert!(!game.apply_move(direction));
    }
}

#[test]
fn test_renderer_round_trip() {
    let clock = StepClock::new();
    let mut game = game_on(vec![vec![2, 2, 0], vec![0, 0, 0], vec![0, 0, 4]], clock.clone());

    assert!(game.apply_move(Direction::Left));
    let transitions = game.take_pending_transitions();
    assert_eq!(transitions.len(), 3);
    assert!(game.take_pending_transitions().is_empty());

    let plan = AnimationPlan::new(transitions, Duration::from_millis(150));
    let start = clock.now();
    clock.advance(Duration::from_millis(100));
    assert!(!plan.is_complete(clock.now() - start));
    // Input during the animation is dropped.
    assert!(!game.apply_move(Direction::Right));

    clock.advance(Duration::from_millis(100));
    assert!(plan.is_complete(clock.now() - start));
    assert_eq!(game.animations_complete(), Phase::Playing);
    assert_eq!(game.current_grid().tile_count(), 3);
}

#[test]
fn test_elapsed_time_freezes_then_resets() {
    let clock = StepClock::new();
    let mut game = game_on(vec![vec![8, 16], vec![16, 0]], clock.clone());

    clock.advance(Duration::from_secs(3));
    assert_eq!(game.elapsed_time(), Duration::from_secs(3));

    assert!(game.place_at(1, 1));
    assert!(game.is_game_over());
    clock.advance(Duration::from_secs(10));
    assert_eq!(game.elapsed_time(), Duration::from_secs(3));

    assert!(game.handle(Action::Restart));
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.elapsed_time(), Duration::ZERO);
    assert_eq!(game.current_grid().tile_count(), 2);
}

#[test]
fn test_placement_rejections_do_not_mutate() {
    let mut game = game_on(vec![vec![2, 0], vec![0, 0]], Arc::new(SystemClock));
    let before = game.current_grid().clone();

    assert!(!game.place_at(0, 0));
    assert!(!game.place_at(2, 0));
    assert!(!game.place_at(0, 7));
    assert_eq!(game.current_grid(), &before);

    assert!(game.place_at(1, 0));
    assert_eq!(game.current_grid().tile_count(), 2);
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig::new(4, Some(77));
    let mut a = GameState::from_config(&config).unwrap();
    let mut b = GameState::from_config(&config).unwrap();
    assert_eq!(a.current_grid(), b.current_grid());

    for direction in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
        assert_eq!(a.apply_move(direction), b.apply_move(direction));
        a.animations_complete();
        b.animations_complete();
        assert_eq!(a.current_grid(), b.current_grid());
    }
}

#[test]
fn test_too_small_grid_rejected() {
    assert!(GameState::new(1).is_err());
    assert!(GameState::from_config(&GameConfig::default().with_grid_size(0)).is_err());
}

#[test]
fn test_preconditions_checked_individually() {
    let mut game = game_on(vec![vec![2, 0], vec![0, 0]], Arc::new(SystemClock));

    assert!(AcceptingInput::check(&game).is_ok());
    assert!(CellInRange::check(&Cell::new(1, 1), &game).is_ok());
    assert_eq!(
        CellIsEmpty::check(&Cell::new(0, 0), &game),
        Err(ActionError::Occupied(Cell::new(0, 0)))
    );
    assert!(matches!(
        LegalPlacement::check(&Cell::new(3, 0), &game),
        Err(ActionError::OutOfRange { .. })
    ));

    assert!(game.apply_move(Direction::Right));
    assert_eq!(
        LegalPlacement::check(&Cell::new(1, 1), &game),
        Err(ActionError::NotAccepting(Phase::Animating))
    );
}
