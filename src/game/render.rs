//! Rendering collaborator interface. The engine never touches the DOM; it
//! calls into this trait and the browser layer (or a test double) draws.

use super::LetterSlot;

pub trait Render {
    /// Draws one placeholder / revealed-letter cell per slot, keyed by position.
    fn render_board(&mut self, slots: &[LetterSlot]);
    fn render_attempts_remaining(&mut self, n: u32);
    fn render_wrong_letters(&mut self, letters: &[char]);
    fn render_hint(&mut self, text: Option<&str>);
    fn render_notice(&mut self, text: &str);
    fn render_stats(&mut self, won: u32, lost: u32);
    fn render_countdown(&mut self, seconds_left: i64);
    fn render_timer_overlay(&mut self, visible: bool);
}
