//! Fixed-interval simulation tick and answer submission
//!
//! These two functions plus [`GameState::start`]/[`GameState::restart`] are
//! the only ways the simulation changes.

use super::quiz::Question;
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Nothing was being asked
    NoQuestion,
    /// Question closed, loop resumes
    Correct,
    /// Life lost, the same question stays open
    Wrong { lives_left: u32 },
    /// Last life lost, run is over
    OutOfLives,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Paused, idle or over: nothing moves
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;
    state.heading = state.pending_direction;

    let new_head = state.snake.next_head(state.heading);
    let ate = new_head == state.apple;
    state.snake.advance(new_head, ate);

    let crash = if !state.grid.contains(new_head) {
        Some(GameOverCause::HitWall)
    } else if state.snake.head_hits_body() {
        Some(GameOverCause::HitSelf)
    } else {
        None
    };

    if ate {
        let grid = state.grid;
        state.apple = grid.random_cell(state.rng());
        events.push(GameEvent::AppleEaten { at: new_head });
    }

    if let Some(cause) = crash {
        state.end();
        events.push(GameEvent::GameOver(cause));
        return events;
    }

    if ate {
        let difficulty = state.score.difficulty;
        state.question = Some(Question::generate(state.rng(), difficulty));
        state.phase = GamePhase::Paused;
        events.push(GameEvent::QuestionAsked);
    }

    events
}

/// Check raw player input against the pending question
pub fn submit_answer(state: &mut GameState, raw: &str) -> AnswerOutcome {
    let correct = match (&state.question, state.phase) {
        (Some(question), GamePhase::Paused) => question.check(raw),
        _ => return AnswerOutcome::NoQuestion,
    };

    if correct {
        state.score.record_correct();
        state.question = None;
        state.phase = GamePhase::Running;
        return AnswerOutcome::Correct;
    }

    if state.score.record_wrong() {
        state.end();
        AnswerOutcome::OutOfLives
    } else {
        AnswerOutcome::Wrong {
            lives_left: state.score.lives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, Grid, Snake};
    use glam::IVec2;
    use proptest::prelude::*;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Grid::default());
        state.start();
        state
    }

    /// Place the apple somewhere the snake will not reach this test
    fn park_apple(state: &mut GameState) {
        state.apple = IVec2::new(19, 19);
    }

    fn eat_apple(state: &mut GameState) {
        state.apple = state.snake.next_head(state.pending_direction);
        let events = tick(state);
        assert!(events.contains(&GameEvent::QuestionAsked));
    }

    #[test]
    fn test_tick_idle_does_nothing() {
        let mut state = GameState::new(1, Grid::default());
        let before = state.snake.clone();
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.snake, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_tick_moves_one_cell() {
        let mut state = running_state(1);
        park_apple(&mut state);
        let events = tick(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.snake.head(), IVec2::new(6, 5));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_eating_apple_grows_asks_and_pauses() {
        let mut state = running_state(1);
        state.apple = IVec2::new(6, 5);

        let events = tick(&mut state);

        assert_eq!(state.snake.head(), IVec2::new(6, 5));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(
            events,
            vec![
                GameEvent::AppleEaten {
                    at: IVec2::new(6, 5)
                },
                GameEvent::QuestionAsked
            ]
        );
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.question.is_some());
        assert!(state.grid.contains(state.apple));
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut state = running_state(3);
        eat_apple(&mut state);
        let snake = state.snake.clone();
        let apple = state.apple;
        let score = state.score;
        for _ in 0..10 {
            assert!(tick(&mut state).is_empty());
        }
        assert_eq!(state.snake, snake);
        assert_eq!(state.apple, apple);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_wall_ends_game() {
        let mut state = running_state(1);
        park_apple(&mut state);
        state.snake = Snake::new(IVec2::new(19, 3));
        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::GameOver(GameOverCause::HitWall)]);
        assert!(state.is_game_over());

        let mut state = running_state(1);
        park_apple(&mut state);
        state.steer(Direction::Up);
        state.snake = Snake::new(IVec2::new(4, 0));
        tick(&mut state);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut state = running_state(1);
        park_apple(&mut state);
        // Head at (2,2) moving up into (2,1), which is mid-body
        state.snake = Snake::from_segments([
            IVec2::new(2, 2),
            IVec2::new(3, 2),
            IVec2::new(3, 1),
            IVec2::new(2, 1),
            IVec2::new(1, 1),
        ])
        .unwrap();
        state.heading = Direction::Left;
        state.steer(Direction::Up);

        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::GameOver(GameOverCause::HitSelf)]);
    }

    #[test]
    fn test_following_tail_is_safe() {
        let mut state = running_state(1);
        park_apple(&mut state);
        // A 2x2 loop: the head moves into the cell the tail vacates
        state.snake = Snake::from_segments([
            IVec2::new(2, 2),
            IVec2::new(3, 2),
            IVec2::new(3, 1),
            IVec2::new(2, 1),
        ])
        .unwrap();
        state.heading = Direction::Left;
        state.steer(Direction::Up);
        assert!(tick(&mut state).is_empty());
        assert!(state.is_running());
    }

    #[test]
    fn test_quick_inputs_cannot_reverse() {
        let mut state = running_state(1);
        park_apple(&mut state);
        state.snake = Snake::from_segments([IVec2::new(5, 5), IVec2::new(4, 5)]).unwrap();
        // Up then Left before the next tick: Left reverses the last move
        assert!(state.steer(Direction::Up));
        assert!(!state.steer(Direction::Left));
        tick(&mut state);
        assert!(state.is_running());
        assert_eq!(state.snake.head(), IVec2::new(5, 4));
    }

    #[test]
    fn test_correct_answer_resumes() {
        let mut state = running_state(9);
        eat_apple(&mut state);
        let answer = state.question.as_ref().unwrap().answer();

        assert_eq!(
            submit_answer(&mut state, &answer.to_string()),
            AnswerOutcome::Correct
        );
        assert!(state.is_running());
        assert!(state.question.is_none());
        assert_eq!(state.score.correct_answers, 1);
        assert_eq!(state.score.difficulty, 2);
    }

    #[test]
    fn test_wrong_answer_keeps_question_open() {
        let mut state = running_state(9);
        eat_apple(&mut state);
        let question = state.question.clone().unwrap();
        let wrong = (question.answer() + 1).to_string();

        assert_eq!(
            submit_answer(&mut state, &wrong),
            AnswerOutcome::Wrong { lives_left: 2 }
        );
        assert!(state.is_paused());
        assert_eq!(state.question.as_ref(), Some(&question));
        assert_eq!(
            submit_answer(&mut state, "not a number"),
            AnswerOutcome::Wrong { lives_left: 1 }
        );
        assert_eq!(
            submit_answer(&mut state, &question.answer().to_string()),
            AnswerOutcome::Correct
        );
        assert_eq!(state.score.lives, 1);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = running_state(4);
        eat_apple(&mut state);
        state.score.lives = 1;
        let wrong = (state.question.as_ref().unwrap().answer() + 1).to_string();

        assert_eq!(submit_answer(&mut state, &wrong), AnswerOutcome::OutOfLives);
        assert_eq!(state.score.lives, 0);
        assert!(state.is_game_over());
        assert!(state.question.is_none());
    }

    #[test]
    fn test_answer_without_question() {
        let mut state = running_state(4);
        assert_eq!(submit_answer(&mut state, "1"), AnswerOutcome::NoQuestion);
        assert_eq!(state.score.lives, 3);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = running_state(4);
        eat_apple(&mut state);
        submit_answer(&mut state, "-1");
        state.snake = Snake::new(IVec2::new(19, 0));
        state.question = None;
        state.phase = GamePhase::Running;
        tick(&mut state);
        assert!(state.is_game_over());

        state.restart();
        assert!(state.is_running());
        assert_eq!(state.score.lives, 3);
        assert_eq!(state.score.correct_answers, 0);
        assert_eq!(state.score.difficulty, 1);
        assert_eq!(state.snake.segments().collect::<Vec<_>>(), vec![IVec2::new(5, 5)]);
        assert_eq!(state.heading, Direction::Right);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = running_state(99999);
        let mut state2 = running_state(99999);
        state1.apple = IVec2::new(6, 5);
        state2.apple = IVec2::new(6, 5);

        tick(&mut state1);
        tick(&mut state2);

        assert_eq!(state1.apple, state2.apple);
        assert_eq!(state1.question, state2.question);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_length_changes_only_on_eat(
            seed in any::<u64>(),
            moves in proptest::collection::vec(direction(), 1..60),
        ) {
            let mut state = running_state(seed);
            for dir in moves {
                if !state.is_running() {
                    break;
                }
                state.steer(dir);
                let before = state.snake.len();
                let events = tick(&mut state);
                let ate = events.iter().any(|e| matches!(e, GameEvent::AppleEaten { .. }));
                let expected = if ate { before + 1 } else { before };
                prop_assert_eq!(state.snake.len(), expected);
            }
        }

        #[test]
        fn prop_out_of_bounds_head_ends_game(
            x in -3i32..23,
            y in -3i32..23,
            dir in direction(),
        ) {
            let mut state = running_state(0);
            state.apple = IVec2::new(-100, -100);
            state.snake = Snake::new(IVec2::new(x, y));
            state.heading = dir;
            state.pending_direction = dir;
            let next = IVec2::new(x, y) + dir.delta();
            tick(&mut state);
            prop_assert_eq!(state.is_game_over(), !state.grid.contains(next));
        }
    }
}
