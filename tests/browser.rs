// Browser-side smoke tests; run with `wasm-pack test --headless --firefox`.
// Native `cargo test` compiles this file to an empty crate.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_creates_missing_elements_on_a_bare_page() {
    word_guess::start_game().expect("game should start on a bare page");
    let doc = web_sys::window().unwrap().document().unwrap();
    for id in [
        "current-word",
        "attempts-remaining",
        "wrong-letters",
        "hint",
        "notices",
        "games-won",
        "games-lost",
        "restart-timer",
    ] {
        assert!(
            doc.get_element_by_id(id).is_some(),
            "element '{}' was not created",
            id
        );
    }
    // The first round renders one placeholder cell per letter.
    let board = doc.get_element_by_id("current-word").unwrap();
    assert!(board.inner_html().contains("class=\"letter\""));
}
