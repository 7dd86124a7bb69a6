//! Word Guess core crate.
//!
//! A browser hangman: the game picks a musician's name from [`WORD_LIST`],
//! the player guesses letters on the keyboard, correct letters reveal in
//! place, wrong ones burn an attempt, and after a win or a loss a five-second
//! countdown rolls the session into the next word. The engine under
//! [`game`] is pure Rust (native-testable); [`web`] is the DOM rendering and
//! input layer started from JS via `start_game()`.

use wasm_bindgen::prelude::*;

pub mod game;
mod web;

pub use game::{Config, GameSession, GuessOutcome, Phase, Word};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Built-in word dataset: musicians, all lowercase ascii, each with a hint.
// -----------------------------------------------------------------------------

pub const WORD_LIST: &[(&str, &str)] = &[
    ("prince", "Purple Rain"),
    ("elvis", "The King of Rock and Roll"),
    ("adele", "Rolling in the Deep"),
    ("eminem", "The Real Slim Shady"),
    ("madonna", "Queen of Pop"),
    ("sting", "Fronted The Police"),
    ("pink", "So What"),
    ("bono", "U2 frontman"),
    ("cher", "Believe"),
    ("shakira", "Hips Don't Lie"),
    ("rihanna", "Umbrella"),
    ("beyonce", "Single Ladies"),
    ("fergie", "The Black Eyed Peas"),
    ("sia", "Chandelier"),
    ("slash", "Guns N' Roses guitarist"),
    ("jewel", "Who Will Save Your Soul"),
    ("dido", "White Flag"),
    ("seal", "Kiss from a Rose"),
    ("sade", "Smooth Operator"),
    ("enya", "Only Time"),
    ("usher", "Yeah!"),
    ("bjork", "Icelandic art-pop singer"),
    ("beck", "Loser"),
    ("ringo", "Beatles drummer"),
    ("liberace", "Flamboyant pianist"),
    ("morrissey", "The Smiths frontman"),
    ("flea", "Red Hot Chili Peppers bassist"),
    ("tupac", "California Love"),
    ("moby", "Play"),
    ("kesha", "Tik Tok"),
    ("ludacris", "Stand Up"),
    ("lorde", "Royals"),
    ("drake", "Hotline Bling"),
    ("aaliyah", "Try Again"),
    ("macklemore", "Thrift Shop"),
    ("selena", "Queen of Tejano"),
    ("brandy", "The Boy Is Mine"),
    ("meatloaf", "Bat Out of Hell"),
    ("redman", "Def Squad rapper"),
    ("rupaul", "Drag Race host"),
    ("coolio", "Gangsta's Paradise"),
    ("common", "Chicago rapper and actor"),
    ("nelly", "Hot in Herre"),
    ("pitbull", "Mr. Worldwide"),
    ("shaggy", "It Wasn't Me"),
];

/// The built-in dataset as owned [`Word`] values ready for the pool.
pub fn word_list() -> Vec<Word> {
    WORD_LIST
        .iter()
        .map(|&(text, hint)| Word::with_hint(text, hint))
        .collect()
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(word_list())
}
