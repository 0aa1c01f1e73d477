use crate::engine::config::GameConfig;
use crate::engine::{Clock, RandomSource};
use crate::logic::direction::Direction;
use crate::logic::high_scores::{HighScoreList, ScoreRecord};
use crate::logic::konami::KonamiTracker;
use crate::logic::level::{Difficulty, GameMode, Level, PowerUp};
use crate::logic::scoring;
use crate::logic::sequence::{self, InputMatch};
use crate::logic::timer::{self, Lives, TickEffect};
use crate::store::HighScoreStore;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Idle,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// No game in progress, or the key is not a direction.
    Ignored,
    /// Correct so far; holds the number of entries matched.
    Progress(usize),
    /// Sequence completed. `power_up` is set when this clear rolled one.
    Cleared {
        points: u32,
        power_up: Option<PowerUp>,
    },
    /// Wrong direction. `ended` when it cost the last survival life.
    Mismatch { ended: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Counted(u32),
    LifeLost { lives_left: u32 },
    Ended,
}

/// One rendered arrow: the target direction and, once entered, whether the
/// player's input matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub direction: Direction,
    pub correct: Option<bool>,
}

/// Read-only view of a session for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub cells: Vec<Cell>,
    pub score: u32,
    pub streak: u32,
    pub combo: u32,
    pub multiplier: u32,
    pub lives: Option<u32>,
    pub remaining: u32,
    pub budget: u32,
    pub power_up: Option<PowerUp>,
    pub easter_egg: bool,
    pub high_scores: Vec<ScoreRecord>,
}

pub struct GameEngine<R> {
    config: GameConfig,
    rng: R,
    store: Box<dyn HighScoreStore>,
    clock: Box<dyn Clock>,

    difficulty: Difficulty,
    mode: GameMode,
    state: GameState,

    sequence: Vec<Direction>,
    user_input: Vec<Direction>,

    score: u32,
    streak: u32,
    combo: u32,
    lives: Lives,
    remaining: u32,
    power_up: Option<PowerUp>,
    easter_egg: bool,
    konami: KonamiTracker,

    // Period the host scheduler was armed with; `None` while stopped.
    armed_interval: Option<Duration>,
    high_scores: HighScoreList,
}

impl<R: RandomSource> GameEngine<R> {
    /// Creates an idle engine and loads the persisted high-score list.
    /// Unreadable data is treated as an empty list.
    pub fn new(
        config: GameConfig,
        rng: R,
        store: Box<dyn HighScoreStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let capacity = config.high_score_capacity;
        let high_scores = match store.load() {
            Ok(records) => HighScoreList::from_records(records, capacity),
            Err(e) => {
                log::warn!("ignoring stored high scores: {e}");
                HighScoreList::new(capacity)
            }
        };
        let difficulty = Difficulty::default();
        let mode = GameMode::default();

        Self {
            lives: Lives::for_mode(mode, config.survival_lives),
            config,
            rng,
            store,
            clock,
            difficulty,
            mode,
            state: GameState::Idle,
            sequence: Vec::new(),
            user_input: Vec::new(),
            score: 0,
            streak: 0,
            combo: 0,
            remaining: difficulty.level().time,
            power_up: None,
            easter_egg: false,
            konami: KonamiTracker::new(),
            armed_interval: None,
            high_scores,
        }
    }

    /// Selects the difficulty for the next game. Rejected while playing.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.state == GameState::Playing {
            return false;
        }
        self.difficulty = difficulty;
        if self.state == GameState::Idle {
            self.remaining = difficulty.level().time;
        }
        true
    }

    /// Selects the mode for the next game. Rejected while playing.
    pub fn set_mode(&mut self, mode: GameMode) -> bool {
        if self.state == GameState::Playing {
            return false;
        }
        self.mode = mode;
        if self.state == GameState::Idle {
            self.lives = Lives::for_mode(mode, self.config.survival_lives);
        }
        true
    }

    /// Starts (or restarts) a game from any state.
    pub fn start(&mut self) {
        let level = self.level();

        self.sequence = sequence::generate(&mut self.rng, level.length);
        self.user_input.clear();
        self.score = 0;
        self.streak = 0;
        self.combo = 0;
        self.easter_egg = false;
        self.power_up = None;
        self.lives = Lives::for_mode(self.mode, self.config.survival_lives);
        self.remaining = level.time;
        self.state = GameState::Playing;
        self.armed_interval = Some(timer::interval_for(self.power_up, &self.config));

        log::info!("game started: {} / {}", self.difficulty, self.mode);
    }

    /// Finishes the current game, records the score and persists the list.
    /// Only the first call after `start` has any effect.
    pub fn end(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Finished;
        self.armed_interval = None;

        self.high_scores.record(ScoreRecord {
            difficulty: self.difficulty,
            game_mode: self.mode,
            score: self.score,
            date: self.clock.now_iso(),
        });
        if let Err(e) = self.store.save(self.high_scores.entries()) {
            log::warn!("high scores not saved: {e}");
        }

        log::info!(
            "game over: {} / {} scored {}",
            self.difficulty,
            self.mode,
            self.score
        );
        true
    }

    /// Handles a raw key press: arrow keys feed the sequence, and every key
    /// feeds the cheat-code window.
    pub fn handle_key(&mut self, key: &str) -> InputOutcome {
        if self.state != GameState::Playing {
            return InputOutcome::Ignored;
        }
        let outcome =
            Direction::from_key(key).map_or(InputOutcome::Ignored, |d| self.handle_direction(d));

        if self.konami.push(key) && !self.easter_egg {
            self.easter_egg = true;
            log::debug!("easter egg unlocked");
        }
        outcome
    }

    /// Handles a touch gesture given its displacement in pixels. Returns the
    /// decoded direction alongside the outcome, or `None` when the gesture
    /// was ignored.
    pub fn handle_swipe(&mut self, dx: i32, dy: i32) -> Option<(Direction, InputOutcome)> {
        if self.state != GameState::Playing {
            return None;
        }
        let direction = Direction::from_swipe(dx, dy, self.config.swipe_deadzone)?;
        Some((direction, self.handle_direction(direction)))
    }

    pub fn handle_direction(&mut self, direction: Direction) -> InputOutcome {
        if self.state != GameState::Playing {
            return InputOutcome::Ignored;
        }
        self.user_input.push(direction);

        match sequence::check(&self.sequence, &self.user_input) {
            InputMatch::Mismatch => self.wrong_input(),
            InputMatch::Partial => InputOutcome::Progress(self.user_input.len()),
            InputMatch::Complete => self.correct_input(),
        }
    }

    fn correct_input(&mut self) -> InputOutcome {
        let doubled = self.easter_egg || self.power_up == Some(PowerUp::DoublePoints);
        let points = scoring::points(self.combo, doubled, self.config.combo_step);
        self.score = self.score.saturating_add(points);
        self.streak += 1;
        self.combo += 1;

        if self.mode == GameMode::TimeAttack {
            let budget = self.level().time;
            self.remaining = self
                .remaining
                .saturating_add(self.config.time_attack_bonus)
                .min(budget);
        }

        let activated = if self.rng.chance(self.config.power_up_chance) {
            let idx = self.rng.next_index(PowerUp::ALL.len());
            PowerUp::ALL.get(idx).copied()
        } else {
            None
        };
        if let Some(power_up) = activated {
            log::debug!("power-up activated: {power_up}");
            self.power_up = Some(power_up);
            if self.armed_interval.is_some() {
                self.armed_interval = Some(timer::interval_for(self.power_up, &self.config));
            }
        }

        self.regenerate();
        InputOutcome::Cleared {
            points,
            power_up: activated,
        }
    }

    fn wrong_input(&mut self) -> InputOutcome {
        self.streak = 0;
        self.combo = 0;
        let exhausted = self.lives.lose_one();

        if self.power_up == Some(PowerUp::Shuffle) {
            sequence::shuffle(&mut self.rng, &mut self.sequence);
            self.user_input.clear();
        } else {
            self.regenerate();
        }

        let ended = exhausted && self.end();
        InputOutcome::Mismatch { ended }
    }

    fn regenerate(&mut self) {
        let length = self.level().length;
        self.sequence = sequence::generate(&mut self.rng, length);
        self.user_input.clear();
    }

    /// Advances the countdown by one period. The host calls this from its
    /// interval callback.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Ignored;
        }
        let (remaining, effect) = timer::reduce(self.remaining, self.mode, self.level().time);
        self.remaining = remaining;

        match effect {
            TickEffect::Counted => TickOutcome::Counted(remaining),
            TickEffect::Expired => {
                self.end();
                TickOutcome::Ended
            }
            TickEffect::LifeLost => {
                if self.lives.lose_one() {
                    self.end();
                    return TickOutcome::Ended;
                }
                let lives_left = self.lives.count().unwrap_or(0);
                log::debug!("time ran out, {lives_left} lives left");
                TickOutcome::LifeLost { lives_left }
            }
        }
    }

    /// Period the host should tick at. Follows the active power-up, so a host
    /// re-arms its interval whenever this changes after an input. `None` once
    /// the game is over.
    #[must_use]
    pub const fn tick_interval(&self) -> Option<Duration> {
        self.armed_interval
    }

    #[must_use]
    pub const fn is_timer_running(&self) -> bool {
        self.armed_interval.is_some()
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.difficulty.level()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn sequence(&self) -> &[Direction] {
        &self.sequence
    }

    #[must_use]
    pub fn user_input(&self) -> &[Direction] {
        &self.user_input
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn combo(&self) -> u32 {
        self.combo
    }

    #[must_use]
    pub const fn lives(&self) -> Lives {
        self.lives
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn power_up(&self) -> Option<PowerUp> {
        self.power_up
    }

    #[must_use]
    pub const fn easter_egg_active(&self) -> bool {
        self.easter_egg
    }

    #[must_use]
    pub const fn high_scores(&self) -> &HighScoreList {
        &self.high_scores
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let cells = self
            .sequence
            .iter()
            .enumerate()
            .map(|(i, &direction)| Cell {
                direction,
                correct: self.user_input.get(i).map(|d| *d == direction),
            })
            .collect();

        GameSnapshot {
            state: self.state,
            difficulty: self.difficulty,
            mode: self.mode,
            cells,
            score: self.score,
            streak: self.streak,
            combo: self.combo,
            multiplier: scoring::multiplier(self.combo, self.config.combo_step),
            lives: self.lives.count(),
            remaining: self.remaining,
            budget: self.level().time,
            power_up: self.power_up,
            easter_egg: self.easter_egg,
            high_scores: self.high_scores.entries().to_vec(),
        }
    }
}
