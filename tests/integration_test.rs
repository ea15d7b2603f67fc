use sky_gap::consts::SIM_DT;
use sky_gap::persistence::{BestScoreStore, MemoryStore};
use sky_gap::platform::{InputEvent, Key, Timers};
use sky_gap::renderer::{Entity, RecordingRenderer, SpriteId, Tint};
use sky_gap::sim::{
    self, CollisionResult, FieldConfig, GameRng, IntRange, ObstacleField, RunEvent, RunState,
    ScriptedRng, TickInput, place,
};
use sky_gap::{Session, Tuning};

#[test]
fn test_layout_scenario() {
    let mut rng = GameRng::new(2024);
    for _ in 0..100 {
        let p = place(
            &mut rng,
            0.0,
            IntRange::new(150, 250),
            IntRange::new(500, 550),
            600,
            20,
        );
        assert!((500.0..=550.0).contains(&p.x));
        assert!((150.0..=250.0).contains(&p.gap));
        assert!(p.gap_top >= 20.0 && p.gap_top <= 600.0 - 20.0 - p.gap);
    }
}

#[test]
fn test_field_recycles_first_pair_once() {
    let mut rng = GameRng::new(77);
    let mut field = ObstacleField::new(FieldConfig::default(), &mut rng);
    let mut total = Vec::new();
    for _ in 0..2000 {
        field.advance(SIM_DT);
        let recycled = field.recycle(&mut rng);
        assert_eq!(field.len(), 4);
        if !recycled.is_empty() {
            total = recycled;
            break;
        }
    }
    assert_eq!(total, vec![0]);
}

#[test]
fn test_full_run_scores_then_crashes() {
    let mut store = MemoryStore::with_best(0);
    let mut timers = Timers::new();
    // Openings at y = 200..400 everywhere
    let mut run = RunState::new(
        1,
        &Tuning::default(),
        ScriptedRng::new(vec![200, 200, 500]),
        &store,
    );
    run.body.pos.y = 288.0;
    run.body.gravity = 0.0;

    let mut scores = 0;
    for _ in 0..(120 * 6) {
        for event in sim::tick(&mut run, &TickInput::default(), SIM_DT, &mut store, &mut timers) {
            if let RunEvent::Scored { .. } = event {
                scores += 1;
            }
        }
    }
    assert_eq!(run.score, scores);
    assert!(run.score >= 2);
    assert!(!run.is_game_over());

    // Let gravity back in and fall out of the bottom
    run.body.gravity = 600.0;
    let mut over = None;
    for _ in 0..(120 * 5) {
        for event in sim::tick(&mut run, &TickInput::default(), SIM_DT, &mut store, &mut timers) {
            if let RunEvent::GameOver { cause, score, best } = event {
                over = Some((cause, score, best));
            }
        }
        if run.is_game_over() {
            break;
        }
    }
    let (cause, score, best) = over.expect("run should end");
    assert!(matches!(cause, CollisionResult::Bounds | CollisionResult::Obstacle));
    assert_eq!(score, run.score);
    assert_eq!(best, run.score);
    assert_eq!(store.get(), Some(run.score));

    let mut renderer = RecordingRenderer::new();
    run.render(&mut renderer);
    assert_eq!(renderer.tint_of(Entity::Body), Some(Tint::HIT));
    assert_eq!(renderer.sprite_count(SpriteId::Body), 1);
}

#[test]
fn test_session_cycle_with_inputs() {
    let mut session = Session::new(Tuning::default(), MemoryStore::new(), 1);
    let dt = 1.0 / 60.0;

    // Keep tapping for a second: the body must have risen
    let start_y = session.run.body.pos.y;
    for i in 0..30 {
        if i % 15 == 0 {
            session.push_input(InputEvent::KeyDown(Key::J));
        }
        session.frame(dt);
    }
    assert!(session.run.body.pos.y < start_y);

    // Then stop: the run ends and a fresh one replaces it within a few seconds
    let first = session.run.run_id;
    for _ in 0..(60 * 5) {
        session.frame(dt);
        if session.run.run_id != first {
            break;
        }
    }
    assert_ne!(session.run.run_id, first);
    assert!(!session.run.is_game_over());
    assert_eq!(session.runs_completed(), 1);
}
