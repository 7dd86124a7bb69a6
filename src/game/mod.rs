//! Game engine: round lifecycle, guess validation and the restart countdown.
//!
//! Everything in this module is pure Rust with no browser dependencies so it
//! can be exercised by native `cargo test`; the DOM layer in `crate::web`
//! drives it through the [`Render`] collaborator and wall-clock timestamps
//! passed in as milliseconds.

pub mod pool;
pub mod random;
pub mod render;

pub use pool::{EmptyPoolError, Word, WordPool};
pub use random::{EntropyRandom, RandomSource};
pub use render::Render;

/// Session lifecycle. `Won` / `Lost` are transient: a terminal guess passes
/// through them and lands in `Countdown` within the same call, so the phase
/// observable after `process_guess` returns is `Countdown`. The outcome value
/// reports which terminal state was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Won,
    Lost,
    Countdown,
}

/// Result of feeding one key event through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a single alphabetic character, or no round is in play.
    Ignored,
    /// Letter was already tried; no counters change.
    Duplicate,
    /// Letter is in the word; at least one slot newly revealed.
    Hit,
    /// Letter is not in the word; one attempt consumed.
    Miss,
    /// The hit completed the word.
    Won,
    /// The miss consumed the last attempt.
    Lost,
}

/// Tunables recognized by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Extra attempts granted beyond the word length.
    pub attempts_padding: u32,
    /// Pause between a finished round and the next one.
    pub restart_seconds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attempts_padding: 2,
            restart_seconds: 5,
        }
    }
}

/// Process-wide win/loss tallies; monotonic, reset only by a page reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    pub games_won: u32,
    pub games_lost: u32,
}

/// One cell of the board: a character of the target word and whether the
/// player has uncovered it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSlot {
    pub character: char,
    pub position: usize,
    pub revealed: bool,
}

/// Per-round state, created fresh by `start_round`.
pub struct RoundState {
    target: String,
    hint: Option<String>,
    slots: Vec<LetterSlot>,
    // Insertion-ordered and deduplicated by the duplicate-guess check;
    // letters are stored lowercased (matching is case-insensitive).
    wrong_letters: Vec<char>,
    correct_letters: Vec<char>,
    remaining_attempts: u32,
}

impl RoundState {
    fn new(word: &Word, attempts_padding: u32) -> Self {
        let target = word.text.to_lowercase();
        let slots: Vec<LetterSlot> = target
            .chars()
            .enumerate()
            .map(|(position, character)| LetterSlot {
                character,
                position,
                revealed: false,
            })
            .collect();
        let remaining_attempts = slots.len() as u32 + attempts_padding;
        Self {
            target,
            hint: word.hint.clone(),
            slots,
            wrong_letters: Vec::new(),
            correct_letters: Vec::new(),
            remaining_attempts,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn slots(&self) -> &[LetterSlot] {
        &self.slots
    }

    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    pub fn correct_letters(&self) -> &[char] {
        &self.correct_letters
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    fn all_revealed(&self) -> bool {
        self.slots.iter().all(|s| s.revealed)
    }
}

/// Restart countdown as a wall-clock deadline. Comparing against the deadline
/// each tick (instead of decrementing a counter) keeps scheduling jitter from
/// accumulating drift across ticks.
pub struct Countdown {
    deadline_ms: f64,
}

impl Countdown {
    pub fn begin(now_ms: f64, seconds: u32) -> Self {
        Self {
            deadline_ms: now_ms + f64::from(seconds) * 1000.0,
        }
    }

    pub fn seconds_left(&self, now_ms: f64) -> i64 {
        ((self.deadline_ms - now_ms) / 1000.0).round() as i64
    }
}

/// The game session: owns the word pool, the current round, the tallies and
/// the restart countdown, and emits every state change through the injected
/// [`Render`] collaborator.
pub struct GameSession<R: Render> {
    pool: WordPool,
    rng: Box<dyn RandomSource>,
    config: Config,
    stats: SessionStats,
    phase: Phase,
    round: Option<RoundState>,
    countdown: Option<Countdown>,
    render: R,
}

impl<R: Render> GameSession<R> {
    pub fn new(pool: WordPool, config: Config, rng: Box<dyn RandomSource>, render: R) -> Self {
        Self {
            pool,
            rng,
            config,
            stats: SessionStats::default(),
            phase: Phase::Idle,
            round: None,
            countdown: None,
            render,
        }
    }

    /// Draws the next word and begins play, superseding any pending countdown.
    pub fn start_round(&mut self) {
        self.cancel_countdown();
        let word = self.pool.draw_next(self.rng.as_mut());
        let round = RoundState::new(&word, self.config.attempts_padding);
        self.render.render_board(&round.slots);
        self.render.render_attempts_remaining(round.remaining_attempts);
        self.render.render_wrong_letters(&round.wrong_letters);
        self.render.render_hint(round.hint.as_deref());
        self.render.render_notice("");
        self.render.render_stats(self.stats.games_won, self.stats.games_lost);
        self.render.render_timer_overlay(false);
        self.round = Some(round);
        self.phase = Phase::Playing;
    }

    /// Key-press entry point. One complete synchronous state transition per
    /// input event; anything but a single alphabetic character is ignored.
    pub fn process_guess(&mut self, raw_key: &str, now_ms: f64) -> GuessOutcome {
        if self.phase != Phase::Playing {
            return GuessOutcome::Ignored;
        }
        let mut chars = raw_key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return GuessOutcome::Ignored;
        };
        if !c.is_ascii_alphabetic() {
            return GuessOutcome::Ignored;
        }
        let guess = c.to_ascii_lowercase();

        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::Ignored;
        };

        if round.wrong_letters.contains(&guess) || round.correct_letters.contains(&guess) {
            self.render
                .render_notice("You have tried that letter before. Please try again!");
            return GuessOutcome::Duplicate;
        }

        let mut hit = false;
        for slot in round.slots.iter_mut() {
            if slot.character == guess && !slot.revealed {
                slot.revealed = true;
                hit = true;
            }
        }

        if hit {
            // All occurrences of the letter reveal in one guess; the letter
            // itself is recorded once.
            round.correct_letters.push(guess);
            self.render.render_board(&round.slots);
            if round.all_revealed() {
                let target = round.target.clone();
                self.end_round(true, &target);
                self.begin_countdown(now_ms);
                return GuessOutcome::Won;
            }
            GuessOutcome::Hit
        } else {
            round.remaining_attempts -= 1;
            round.wrong_letters.push(guess);
            self.render
                .render_attempts_remaining(round.remaining_attempts);
            self.render.render_wrong_letters(&round.wrong_letters);
            if round.remaining_attempts == 0 {
                let target = round.target.clone();
                self.end_round(false, &target);
                self.begin_countdown(now_ms);
                return GuessOutcome::Lost;
            }
            GuessOutcome::Miss
        }
    }

    /// Tally update plus the end-of-round notice. Choosing the next word is
    /// not this function's job; `start_round` runs after the countdown.
    fn end_round(&mut self, won: bool, target: &str) {
        if won {
            self.stats.games_won += 1;
            self.phase = Phase::Won;
            self.render.render_notice("Awesome, You've Won!");
        } else {
            self.stats.games_lost += 1;
            self.phase = Phase::Lost;
            self.render
                .render_notice(&format!("Out of attempts! The word was '{target}'."));
        }
        self.render
            .render_stats(self.stats.games_won, self.stats.games_lost);
    }

    /// Starts the restart countdown. A new countdown always supersedes a
    /// previous one, so at most one is ever active.
    fn begin_countdown(&mut self, now_ms: f64) {
        self.cancel_countdown();
        let seconds = self.config.restart_seconds;
        self.countdown = Some(Countdown::begin(now_ms, seconds));
        self.phase = Phase::Countdown;
        self.render.render_timer_overlay(true);
        self.render.render_countdown(i64::from(seconds));
    }

    /// One countdown tick. Renders the time remaining, or when the deadline
    /// has passed, cancels the countdown and starts the next round. Returns
    /// `true` when the next round was started (the caller stops ticking).
    pub fn countdown_tick(&mut self, now_ms: f64) -> bool {
        let Some(countdown) = &self.countdown else {
            return false;
        };
        let left = countdown.seconds_left(now_ms);
        if left < 0 {
            self.cancel_countdown();
            self.render.render_timer_overlay(false);
            self.start_round();
            true
        } else {
            self.render.render_countdown(left);
            false
        }
    }

    /// Stops the countdown; safe to call when none is active.
    pub fn cancel_countdown(&mut self) {
        self.countdown = None;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.render
    }
}
