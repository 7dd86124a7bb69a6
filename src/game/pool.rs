//! Word pool: owns the master word list and a shuffled, non-repeating draw
//! order. When the draw order is exhausted it reseeds from the master copy,
//! so no word repeats until every word has been served once.

use std::fmt;

use super::random::RandomSource;

/// A playable word plus an optional hint shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub hint: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hint: None,
        }
    }

    pub fn with_hint(text: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hint: Some(hint.into()),
        }
    }
}

/// Fatal initialization error: the game cannot start without words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word pool initialized with an empty word list")
    }
}

impl std::error::Error for EmptyPoolError {}

/// Master list plus a shuffled working copy consumed one word per round.
pub struct WordPool {
    master: Vec<Word>,
    draw: Vec<Word>,
}

impl WordPool {
    /// Captures an immutable master copy and shuffles the first draw order.
    pub fn new(words: Vec<Word>, rng: &mut dyn RandomSource) -> Result<Self, EmptyPoolError> {
        if words.is_empty() {
            return Err(EmptyPoolError);
        }
        let mut draw = words.clone();
        shuffle(&mut draw, rng);
        Ok(Self {
            master: words,
            draw,
        })
    }

    /// Removes and returns the next word of the current draw order,
    /// reseeding with a fresh shuffle of the master list when exhausted.
    /// The first word of a new cycle may repeat the previous cycle's last
    /// word; that relaxation is accepted.
    pub fn draw_next(&mut self, rng: &mut dyn RandomSource) -> Word {
        if self.draw.is_empty() {
            self.draw = self.master.clone();
            shuffle(&mut self.draw, rng);
        }
        // The draw order is a uniform shuffle, so consuming from the back is
        // the same draw order as consuming from the front. master is
        // non-empty by construction, so the refill above guarantees at least
        // one element.
        self.draw.pop().expect("draw order refilled from non-empty master")
    }

    pub fn master_len(&self) -> usize {
        self.master.len()
    }

    pub fn remaining_in_cycle(&self) -> usize {
        self.draw.len()
    }
}

/// Fisher–Yates: for i from len-1 down to 1, swap with a uniform j in [0, i].
fn shuffle(words: &mut [Word], rng: &mut dyn RandomSource) {
    for i in (1..words.len()).rev() {
        let j = rng.pick(i + 1);
        words.swap(i, j);
    }
}
