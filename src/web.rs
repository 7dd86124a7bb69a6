//! Browser collaborator layer: DOM element lookup/creation, HTML templating,
//! CSS class toggling, keyboard listener registration and the one-second
//! restart interval. All game rules live in [`crate::game`]; this module only
//! translates between the DOM and the engine.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, console, window};

use crate::game::{
    Config, EntropyRandom, GameSession, GuessOutcome, LetterSlot, Render, Word, WordPool,
};

/// Render collaborator backed by DOM elements, all resolved once at startup.
/// Elements missing from the host page are created and appended to the body
/// so the module works on a bare page too.
struct DomRender {
    current_word: Element,
    attempts_left: Element,
    wrong_letters: Element,
    wrong_letter_title: Option<Element>,
    hint: Element,
    notices: Element,
    games_won: Element,
    games_lost: Element,
    restart_timer: Element,
}

impl DomRender {
    fn attach(doc: &Document) -> Result<Self, JsValue> {
        let restart_timer = lookup_or_create(doc, "restart-timer")?;
        restart_timer.class_list().add_1("hidden").ok();
        Ok(Self {
            current_word: lookup_or_create(doc, "current-word")?,
            attempts_left: lookup_or_create(doc, "attempts-remaining")?,
            wrong_letters: lookup_or_create(doc, "wrong-letters")?,
            wrong_letter_title: doc.query_selector(".used-letters > p").ok().flatten(),
            hint: lookup_or_create(doc, "hint")?,
            notices: lookup_or_create(doc, "notices")?,
            games_won: lookup_or_create(doc, "games-won")?,
            games_lost: lookup_or_create(doc, "games-lost")?,
            restart_timer,
        })
    }
}

impl Render for DomRender {
    fn render_board(&mut self, slots: &[LetterSlot]) {
        let mut el = String::from("<ul class=\"word\">");
        for slot in slots {
            if slot.revealed {
                el.push_str(&format!(
                    "<li data-pos=\"{}\" class=\"letter correct\">{}</li>",
                    slot.position, slot.character
                ));
            } else {
                el.push_str(&format!(
                    "<li data-pos=\"{}\" class=\"letter\">*</li>",
                    slot.position
                ));
            }
        }
        el.push_str("</ul>");
        self.current_word.set_inner_html(&el);
    }

    fn render_attempts_remaining(&mut self, n: u32) {
        self.attempts_left.set_text_content(Some(&n.to_string()));
    }

    fn render_wrong_letters(&mut self, letters: &[char]) {
        if letters.is_empty() {
            self.wrong_letters.set_inner_html("");
            if let Some(title) = &self.wrong_letter_title {
                title.class_list().add_1("hidden").ok();
            }
            return;
        }
        let mut el = String::from("<ul class=\"used-letters\">");
        for letter in letters {
            el.push_str(&format!(
                "<li data-guessed-letter=\"{letter}\" class=\"guessed-letter\">{letter}</li>"
            ));
        }
        el.push_str("</ul>");
        self.wrong_letters.set_inner_html(&el);
        if let Some(title) = &self.wrong_letter_title {
            title.class_list().remove_1("hidden").ok();
        }
    }

    fn render_hint(&mut self, text: Option<&str>) {
        self.hint.set_text_content(Some(text.unwrap_or("")));
    }

    fn render_notice(&mut self, text: &str) {
        self.notices.set_text_content(Some(text));
    }

    fn render_stats(&mut self, won: u32, lost: u32) {
        self.games_won.set_text_content(Some(&won.to_string()));
        self.games_lost.set_text_content(Some(&lost.to_string()));
    }

    fn render_countdown(&mut self, seconds_left: i64) {
        self.restart_timer
            .set_text_content(Some(&format!("Next word in {seconds_left}s")));
    }

    fn render_timer_overlay(&mut self, visible: bool) {
        if visible {
            self.restart_timer.class_list().remove_1("hidden").ok();
        } else {
            self.restart_timer.class_list().add_1("hidden").ok();
        }
    }
}

/// Resolves an element by id, creating and appending a div when the host
/// page does not provide one.
fn lookup_or_create(doc: &Document, id: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element("div")?;
    el.set_id(id);
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&el)?;
    Ok(el)
}

struct App {
    session: GameSession<DomRender>,
    timer_handle: Option<i32>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

pub fn start(words: Vec<Word>) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let render = DomRender::attach(&doc)?;
    let mut rng = EntropyRandom::new();
    let pool =
        WordPool::new(words, &mut rng).map_err(|e| JsValue::from_str(&e.to_string()))?;
    console::log_1(&format!("word guess ready: {} words in the pool", pool.master_len()).into());

    let mut session = GameSession::new(pool, Config::default(), Box::new(rng), render);
    session.start_round();
    APP.with(|cell| cell.replace(Some(App { session, timer_handle: None })));

    // Keyboard listener: every key press routes through the session, which
    // filters out anything but single alphabetic characters itself.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            let now = performance_now();
            APP.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    match app.session.process_guess(&key, now) {
                        GuessOutcome::Won | GuessOutcome::Lost => schedule_restart_timer(app),
                        _ => {}
                    }
                }
            });
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Starts the one-second restart interval, unconditionally canceling any
/// prior one first so at most one interval ever runs.
fn schedule_restart_timer(app: &mut App) {
    cancel_restart_timer(app);
    let Some(win) = window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let now = performance_now();
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                if app.session.countdown_tick(now) {
                    cancel_restart_timer(app);
                }
            }
        });
    }) as Box<dyn FnMut()>);
    if let Ok(handle) =
        win.set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), 1000)
    {
        app.timer_handle = Some(handle);
        closure.forget();
    }
}

/// Clears the restart interval; no-op when none is running.
fn cancel_restart_timer(app: &mut App) {
    if let Some(handle) = app.timer_handle.take() {
        if let Some(win) = window() {
            win.clear_interval_with_handle(handle);
        }
    }
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
