use glam::Vec2;
use mini_soccer::consts::*;
use mini_soccer::persistence::{FileStore, MemoryStore};
use mini_soccer::platform::Key;
use mini_soccer::sim::{
    Direction, GameEvent, GamePhase, HeldKeys, RenderFrame, RosterPolicy, SessionState, TickInput,
    tick,
};
use mini_soccer::{Game, HighScore, Screen};

/// Hold Up with the defenders parked out of the way until a goal goes in
fn dribble_up_to_goal(state: &mut SessionState) -> Vec<GameEvent> {
    let up = TickInput::held(HeldKeys::NONE.with(Direction::Up));
    for _ in 0..500 {
        for d in &mut state.defenders {
            d.pos = Vec2::new(820.0, 780.0);
            d.vel = Vec2::ZERO;
        }
        let events = tick(state, &up);
        if !events.is_empty() {
            return events;
        }
    }
    panic!("ball never reached the goal");
}

/// Steer straight at the closest drawn defender
fn chase_nearest(frame: &RenderFrame) -> HeldKeys {
    let Some(target) = frame
        .defenders
        .iter()
        .map(|d| d.pos)
        .min_by(|a, b| a.distance_squared(frame.ball).total_cmp(&b.distance_squared(frame.ball)))
    else {
        return HeldKeys::NONE;
    };

    let mut held = HeldKeys::NONE;
    let delta = target - frame.ball;
    if delta.x > 5.0 {
        held.press(Direction::Right);
    } else if delta.x < -5.0 {
        held.press(Direction::Left);
    }
    if delta.y > 5.0 {
        held.press(Direction::Down);
    } else if delta.y < -5.0 {
        held.press(Direction::Up);
    }
    held
}

#[test]
fn test_three_goals_three_levels() {
    let mut state = SessionState::new(1, 0, RosterPolicy::OnFieldOnly);

    for expected_level in 2..=4 {
        let events = dribble_up_to_goal(&mut state);
        assert!(events.contains(&GameEvent::LevelAdvanced {
            level: expected_level
        }));
        assert_eq!(state.level, expected_level);
        assert_eq!(state.defenders.len() as u32, expected_level);
        assert_eq!(state.ball.pos, BALL_SPAWN);
    }
    assert_eq!(state.score, 3);
    assert_eq!(state.high_score, 3);
    assert_eq!(state.lives, 3);
}

#[test]
fn test_ball_speed_capped_while_dribbling() {
    let mut state = SessionState::new(1, 0, RosterPolicy::OnFieldOnly);
    state.defenders.clear();
    let diagonal = TickInput::held(HeldKeys::NONE.with(Direction::Up).with(Direction::Left));

    for _ in 0..40 {
        tick(&mut state, &diagonal);
        assert!(state.ball.speed() <= state.params().max_speed + 1e-3);
    }
}

#[test]
fn test_defenders_wear_down_lives() {
    let mut state = SessionState::new(5, 0, RosterPolicy::OnFieldOnly);
    let mut tackles = 0;

    for _ in 0..20_000 {
        // Sit still in midfield and let the defenders come
        state.ball.pos = Vec2::new(500.0, 500.0);
        state.ball.vel = Vec2::ZERO;
        for event in tick(&mut state, &TickInput::default()) {
            if matches!(event, GameEvent::LifeLost { .. } | GameEvent::GameOver { .. }) {
                tackles += 1;
            }
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(tackles, 3);
    assert_eq!(state.lives, 0);
}

#[test]
fn test_full_game_through_menus() {
    let mut game = Game::new(MemoryStore::new());
    game.handle_key(Key::Right);
    game.handle_key(Key::Confirm);
    assert_eq!(game.screen(), Screen::Playing);
    assert_eq!(game.session().level, 2);

    let mut frames = 0;
    while game.screen() == Screen::Playing && frames < 20_000 {
        let held = chase_nearest(&game.snapshot());
        game.frame(&TickInput::held(held));
        game.take_stall();
        frames += 1;
    }
    assert_eq!(game.screen(), Screen::GameOver);
    assert_eq!(game.session().lives, 0);

    let best = game.session().high_score;
    assert_eq!(best, game.session().score);
    assert_eq!(HighScore::load(game.store()).high_score, best);

    game.handle_key(Key::Quit);
    assert_eq!(game.screen(), Screen::Terminated);
}

#[test]
fn test_high_score_survives_restart_of_program() {
    let dir = tempfile::tempdir().unwrap();

    let mut game = Game::new(FileStore::new(dir.path()));
    game.start_run(1);
    let mut frames = 0;
    while game.session().score == 0 && frames < 5_000 {
        game.frame(&TickInput::idle());
        frames += 1;
    }
    let score = game.session().score;
    assert!(score >= 1);
    drop(game);

    let reopened = Game::new(FileStore::new(dir.path()));
    assert_eq!(reopened.session().high_score, score);
    assert!(dir.path().join("highscore.json").exists());
}
