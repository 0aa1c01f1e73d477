use arrow_core::engine::config::GameConfig;
use arrow_core::engine::FixedClock;
use arrow_core::logic::game::{GameEngine, GameState, InputOutcome};
use arrow_core::logic::high_scores::ScoreRecord;
use arrow_core::logic::level::{Difficulty, GameMode};
use arrow_core::store::{HighScoreStore, MemoryStore, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> GameConfig {
    GameConfig {
        power_up_chance: 0.0,
        ..GameConfig::default()
    }
}

fn engine_on(store: &MemoryStore, seed: u64) -> GameEngine<StdRng> {
    GameEngine::new(
        config(),
        StdRng::seed_from_u64(seed),
        Box::new(store.clone()),
        Box::new(FixedClock(format!("2024-03-0{}T10:00:00.000Z", seed % 10))),
    )
}

fn play_game(game: &mut GameEngine<StdRng>, clears: usize) {
    game.start();
    for _ in 0..clears {
        let target = game.sequence().to_vec();
        let mut last = InputOutcome::Ignored;
        for dir in target {
            last = game.handle_direction(dir);
        }
        assert!(matches!(last, InputOutcome::Cleared { .. }));
    }
    assert!(game.end());
}

#[test]
fn test_list_survives_restart() {
    let store = MemoryStore::new();
    {
        let mut game = engine_on(&store, 1);
        game.set_difficulty(Difficulty::Medium);
        game.set_mode(GameMode::TimeAttack);
        play_game(&mut game, 3);
    }

    let game = engine_on(&store, 2);
    assert_eq!(game.state(), GameState::Idle);
    let entries = game.high_scores().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score, 3);
    assert_eq!(entries[0].difficulty, Difficulty::Medium);
    assert_eq!(entries[0].game_mode, GameMode::TimeAttack);
}

#[test]
fn test_top_five_after_many_games() {
    let store = MemoryStore::new();
    let mut game = engine_on(&store, 3);

    for clears in [2, 0, 6, 1, 4, 3, 5, 1] {
        play_game(&mut game, clears);
        let scores: Vec<u32> = store.records().iter().map(|r| r.score).collect();
        assert!(scores.len() <= 5);
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    let scores: Vec<u32> = game.high_scores().entries().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![7, 5, 4, 3, 2]);
    assert_eq!(store.writes(), 8);
}

#[test]
fn test_corrupted_slot_fails_open() {
    let store = MemoryStore::corrupted();
    let mut game = engine_on(&store, 4);
    assert!(game.high_scores().is_empty());

    play_game(&mut game, 1);
    assert_eq!(store.records().len(), 1);
}

#[test]
fn test_oversized_slot_is_trimmed_on_load() {
    let records: Vec<ScoreRecord> = (0..8)
        .map(|i| ScoreRecord {
            difficulty: Difficulty::Easy,
            game_mode: GameMode::Classic,
            score: i,
            date: format!("2023-12-0{}T00:00:00.000Z", i + 1),
        })
        .collect();
    let store = MemoryStore::with_records(records);
    let game = engine_on(&store, 5);

    let scores: Vec<u32> = game.high_scores().entries().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![7, 6, 5, 4, 3]);
}

struct ReadOnlyStore;

impl HighScoreStore for ReadOnlyStore {
    fn load(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&mut self, _records: &[ScoreRecord]) -> Result<(), StoreError> {
        Err(StoreError::Write("quota exceeded".to_string()))
    }
}

#[test]
fn test_failed_write_still_finishes_game() {
    let mut game = GameEngine::new(
        config(),
        StdRng::seed_from_u64(6),
        Box::new(ReadOnlyStore),
        Box::new(FixedClock("2024-01-01T00:00:00.000Z".to_string())),
    );
    play_game(&mut game, 2);
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.high_scores().len(), 1);
}
