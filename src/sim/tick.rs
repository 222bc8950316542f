//! Fixed timestep simulation tick
//!
//! Pure transitions: every function takes a state by value and hands back the
//! next one. Callers replace their copy; nothing is mutated behind them.

use super::collision::{in_hit_band, resolve_hit};
use super::state::{Direction, GameEvent, GameState};
use crate::clamp_racket_x;
use crate::consts::*;

/// Result of advancing one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub event: Option<GameEvent>,
}

/// Start a new session from `seed`
pub fn initialize(seed: u64) -> GameState {
    GameState::new(seed)
}

/// Advance the game state by one fixed timestep, reporting what happened
pub fn advance(state: GameState) -> Step {
    // Terminal: keep returning the same state until reset
    if state.is_over {
        return Step { state, event: None };
    }

    let mut next = state;
    next.ticks += 1;
    next.shuttle.y += next.speed * next.direction.sign();

    let event = if next.shuttle.y > COURT_MAX {
        next.is_over = true;
        Some(GameEvent::GameOver { score: next.score })
    } else if next.shuttle.y <= COURT_MIN {
        next.direction = Direction::Descending;
        Some(GameEvent::Bounce)
    } else if next.direction == Direction::Descending
        && in_hit_band(next.shuttle.y)
        && resolve_hit(&mut next)
    {
        // Checked on every falling tick inside the band, not only on entry.
        // A returned shuttle climbs out of the band without scoring again
        Some(GameEvent::Hit {
            score: next.score,
            speed: next.speed,
        })
    } else {
        None
    };

    Step { state: next, event }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: GameState) -> GameState {
    advance(state).state
}

/// Move the racket to a normalized pointer x (clamped to the racket's travel)
///
/// NaN samples are ignored and the racket stays where it was.
pub fn handle_pointer_input(state: GameState, normalized_x: f32) -> GameState {
    match clamp_racket_x(normalized_x) {
        Some(racket_x) => GameState { racket_x, ..state },
        None => state,
    }
}

/// Throw away the current session and start a new one from `seed`
pub fn reset(_state: GameState, seed: u64) -> GameState {
    initialize(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn state_with(shuttle: Vec2, racket_x: f32, speed: f32, direction: Direction) -> GameState {
        GameState {
            shuttle,
            racket_x,
            speed,
            direction,
            ..GameState::new(0)
        }
    }

    #[test]
    fn test_band_top_edge_is_not_a_hit() {
        let state = state_with(Vec2::new(50.0, 79.0), 50.0, 1.0, Direction::Descending);
        let next = tick(state);
        assert_eq!(next.shuttle.y, 80.0);
        assert_eq!(next.score, 0);
        assert_eq!(next.direction, Direction::Descending);
    }

    #[test]
    fn test_hit_inside_band() {
        let state = state_with(Vec2::new(50.0, 84.0), 50.0, 1.0, Direction::Descending);
        let step = advance(state);
        assert_eq!(step.state.shuttle.y, 85.0);
        assert_eq!(step.state.score, 1);
        assert_eq!(step.state.direction, Direction::Ascending);
        assert!((step.state.speed - 1.1).abs() < EPS);
        assert!(matches!(step.event, Some(GameEvent::Hit { score: 1, .. })));
    }

    #[test]
    fn test_racket_out_of_reach_misses() {
        let state = state_with(Vec2::new(50.0, 84.0), 70.0, 1.0, Direction::Descending);
        let step = advance(state);
        assert_eq!(step.state.shuttle.y, 85.0);
        assert_eq!(step.state.score, 0);
        assert_eq!(step.state.direction, Direction::Descending);
        assert_eq!(step.event, None);
    }

    #[test]
    fn test_falling_past_bottom_ends_game() {
        let state = state_with(Vec2::new(50.0, 99.5), 50.0, 1.0, Direction::Descending);
        let step = advance(state);
        assert_eq!(step.state.shuttle.y, 100.5);
        assert!(step.state.is_over);
        assert_eq!(step.event, Some(GameEvent::GameOver { score: 0 }));
    }

    #[test]
    fn test_landing_exactly_on_bottom_is_not_over() {
        let state = state_with(Vec2::new(50.0, 99.0), 50.0, 1.0, Direction::Descending);
        assert!(!tick(state).is_over);
    }

    #[test]
    fn test_ceiling_turns_shuttle_down() {
        let state = state_with(Vec2::new(30.0, 0.5), 50.0, 1.0, Direction::Ascending);
        let step = advance(state);
        assert!(step.state.shuttle.y <= 0.0);
        assert_eq!(step.state.direction, Direction::Descending);
        assert_eq!(step.event, Some(GameEvent::Bounce));

        // Next tick heads back down
        let next = tick(step.state);
        assert!(next.shuttle.y > step.state.shuttle.y);
    }

    #[test]
    fn test_late_racket_still_hits_within_band() {
        // Missed on band entry, racket arrives while the shuttle is still in the band
        let state = state_with(Vec2::new(50.0, 80.5), 80.0, 1.0, Direction::Descending);
        let first = tick(state);
        assert_eq!(first.score, 0);

        let moved = handle_pointer_input(first, 52.0);
        let second = tick(moved);
        assert_eq!(second.score, 1);
        assert_eq!(second.direction, Direction::Ascending);
    }

    #[test]
    fn test_one_return_scores_once_while_climbing_out() {
        let mut state = state_with(Vec2::new(50.0, 88.0), 50.0, 1.0, Direction::Descending);
        state = tick(state);
        assert_eq!(state.shuttle.y, 89.0);
        assert_eq!(state.score, 1);
        assert_eq!(state.direction, Direction::Ascending);

        // Racket stays in reach the whole way up
        while in_hit_band(state.shuttle.y) || state.shuttle.y >= HIT_BAND_BOTTOM {
            let step = advance(state);
            assert_eq!(step.event, None);
            state = step.state;
            assert_eq!(state.score, 1);
            assert!((state.speed - 1.1).abs() < EPS);
            assert_eq!(state.direction, Direction::Ascending);
        }
        assert!(state.shuttle.y <= HIT_BAND_TOP);
    }

    #[test]
    fn test_late_hit_near_band_bottom() {
        // Missed at 86.5 and 87.5, racket arrives for the last band tick at 88.5
        let mut state = state_with(Vec2::new(30.0, 85.5), 70.0, 1.0, Direction::Descending);
        state = tick(state);
        state = tick(state);
        assert_eq!(state.score, 0);

        state = handle_pointer_input(state, 35.0);
        state = tick(state);
        assert_eq!(state.shuttle.y, 88.5);
        assert_eq!(state.score, 1);

        while state.shuttle.y > HIT_BAND_TOP {
            state = tick(state);
        }
        assert_eq!(state.score, 1);
        assert!((state.speed - 1.1).abs() < EPS);
        assert_eq!(state.direction, Direction::Ascending);
        assert!(!state.is_over);
    }

    #[test]
    fn test_speed_ramps_each_hit() {
        let mut state = state_with(Vec2::new(50.0, 84.0), 50.0, 1.0, Direction::Descending);
        for expected in 1..=3u32 {
            state = tick(state);
            assert_eq!(state.score, expected);
            // Send it back down into the band
            state.direction = Direction::Descending;
            state.shuttle.y = 84.0;
        }
        assert!((state.speed - 1.3).abs() < EPS);
    }

    #[test]
    fn test_tick_does_not_touch_input_copy() {
        let state = state_with(Vec2::new(50.0, 84.0), 50.0, 1.0, Direction::Descending);
        let snapshot = state;
        let _ = tick(state);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_pointer_clamps() {
        let state = GameState::new(3);
        assert_eq!(handle_pointer_input(state, -500.0).racket_x, 10.0);
        assert_eq!(handle_pointer_input(state, 1e6).racket_x, 90.0);
        assert_eq!(handle_pointer_input(state, 33.0).racket_x, 33.0);
    }

    #[test]
    fn test_pointer_nan_is_ignored() {
        let state = handle_pointer_input(GameState::new(3), 20.0);
        let next = handle_pointer_input(state, f32::NAN);
        assert_eq!(next.racket_x, 20.0);
        assert_eq!(next, state);
    }

    #[test]
    fn test_reset_starts_fresh_session() {
        let mut state = state_with(Vec2::new(12.0, 101.0), 80.0, 2.4, Direction::Ascending);
        state.score = 14;
        state.is_over = true;
        state.ticks = 900;

        let fresh = reset(state, 42);
        assert_eq!(fresh.score, 0);
        assert!(!fresh.is_over);
        assert_eq!(fresh.speed, 1.0);
        assert_eq!(fresh.direction, Direction::Descending);
        assert_eq!(fresh.racket_x, 50.0);
        assert_eq!(fresh.shuttle.y, 0.0);
        assert!((10.0..=90.0).contains(&fresh.shuttle.x));
        assert_eq!(fresh.ticks, 0);
        assert_eq!(fresh, initialize(42));
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Descending), Just(Direction::Ascending)]
    }

    proptest! {
        #[test]
        fn prop_descending_moves_down_by_speed(
            x in 10.0f32..90.0,
            y in 0.0f32..100.0,
            racket in 10.0f32..90.0,
            speed in 0.5f32..5.0,
        ) {
            let state = state_with(Vec2::new(x, y), racket, speed, Direction::Descending);
            let next = tick(state);
            prop_assert!((next.shuttle.y - (y + speed)).abs() < EPS);
            prop_assert!(next.shuttle.y > y);
            prop_assert_eq!(next.shuttle.x, x);
        }

        #[test]
        fn prop_ascending_moves_up_by_speed(
            x in 10.0f32..90.0,
            y in 0.0f32..100.0,
            racket in 10.0f32..90.0,
            speed in 0.5f32..5.0,
        ) {
            let state = state_with(Vec2::new(x, y), racket, speed, Direction::Ascending);
            let next = tick(state);
            prop_assert!((next.shuttle.y - (y - speed)).abs() < EPS);
            prop_assert!(next.shuttle.y < y);
            prop_assert_eq!(next.shuttle.x, x);
        }

        #[test]
        fn prop_racket_always_in_range(input in proptest::num::f32::ANY) {
            let next = handle_pointer_input(GameState::new(1), input);
            prop_assert!((10.0..=90.0).contains(&next.racket_x));
        }

        #[test]
        fn prop_game_over_is_terminal(
            x in 10.0f32..90.0,
            y in 100.01f32..120.0,
            racket in 10.0f32..90.0,
            speed in 0.5f32..5.0,
            direction in any_direction(),
            score in 0u32..50,
            extra_ticks in 1usize..20,
        ) {
            let mut state = state_with(Vec2::new(x, y), racket, speed, direction);
            state.score = score;
            state.is_over = true;

            let mut next = state;
            for _ in 0..extra_ticks {
                next = tick(next);
            }
            prop_assert_eq!(next, state);
        }

        #[test]
        fn prop_speed_never_decreases(
            seed in any::<u64>(),
            pointer in proptest::collection::vec(0.0f32..100.0, 1..400),
        ) {
            let mut state = initialize(seed);
            for x in pointer {
                let prev_speed = state.speed;
                state = tick(handle_pointer_input(state, x));
                prop_assert!(state.speed >= prev_speed);
                prop_assert!((10.0..=90.0).contains(&state.racket_x));
            }
        }
    }
}
