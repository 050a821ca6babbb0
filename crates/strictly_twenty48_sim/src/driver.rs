//! The play loop: stands in for a renderer driving the core.

use crate::cli::Strategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_twenty48::{AnimationConfig, AnimationPlan, Direction, GameState, tick_progress};
use tracing::{debug, info, instrument};

/// Picks the next direction to try.
#[derive(Debug)]
enum Chooser {
    Cycle(usize),
    Random(StdRng),
}

impl Chooser {
    fn new(strategy: Strategy, seed: Option<u64>) -> Self {
        match strategy {
            Strategy::Cycle => Chooser::Cycle(0),
            Strategy::Random => Chooser::Random(match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            }),
        }
    }

    fn next(&mut self) -> Direction {
        match self {
            Chooser::Cycle(turn) => {
                let direction = Direction::ALL[*turn % Direction::ALL.len()];
                *turn += 1;
                direction
            }
            Chooser::Random(rng) => Direction::ALL[rng.random_range(0..Direction::ALL.len())],
        }
    }
}

/// What happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Moves that changed the board.
    pub moves: usize,
    /// Moves that changed nothing.
    pub rejected: usize,
    /// Animation frames drawn.
    pub frames: usize,
}

/// Plays until game over or `max_moves` accepted moves.
///
/// Each accepted move is animated over the configured tick count before
/// the core is told the animation finished.
#[instrument(skip(game, animation), fields(size = game.current_grid().size()))]
pub fn play(
    game: &mut GameState,
    animation: &AnimationConfig,
    strategy: Strategy,
    seed: Option<u64>,
    max_moves: usize,
) -> RunSummary {
    let mut chooser = Chooser::new(strategy, seed);
    let mut summary = RunSummary::default();

    while !game.is_game_over() && summary.moves < max_moves {
        let direction = chooser.next();
        if !game.apply_move(direction) {
            summary.rejected += 1;
            continue;
        }
        summary.moves += 1;

        let plan = AnimationPlan::from_config(game.take_pending_transitions(), animation);
        for tick in 0..=*animation.ticks() {
            let sprites = plan.frame_at_progress(game.current_grid(), tick_progress(tick, *animation.ticks()));
            summary.frames += 1;
            debug!(tick, sprites = sprites.len(), "Frame");
        }

        let phase = game.animations_complete();
        debug!(%direction, %phase, "Move settled");
    }

    info!(
        moves = summary.moves,
        rejected = summary.rejected,
        game_over = game.is_game_over(),
        "Run finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_twenty48::{GameConfig, Phase};

    #[test]
    fn test_cycle_plays_small_board_to_the_end() {
        let config = GameConfig::new(2, Some(1));
        let mut game = GameState::from_config(&config).unwrap();
        let summary = play(&mut game, config.animation(), Strategy::Cycle, None, 100_000);

        assert!(game.is_game_over());
        assert!(summary.moves > 0);
        assert_eq!(summary.frames, summary.moves * (*config.animation().ticks() as usize + 1));
    }

    #[test]
    fn test_move_limit_stops_early() {
        let config = GameConfig::new(4, Some(8));
        let mut game = GameState::from_config(&config).unwrap();
        let summary = play(&mut game, config.animation(), Strategy::Random, Some(8), 3);

        assert_eq!(summary.moves, 3);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_cycle_order() {
        let mut chooser = Chooser::new(Strategy::Cycle, None);
        let first: Vec<Direction> = (0..5).map(|_| chooser.next()).collect();
        assert_eq!(first[..4], Direction::ALL);
        assert_eq!(first[4], Direction::ALL[0]);
    }
}
