use crate::ui::theme::{HEADER_SEPARATOR, PRIMARY_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SETTINGS_HINTS: &str =
    " ↑↓: Move │ Enter: Select │ ←→: Adjust │ Esc: Back │ n: Now playing │ q: Quit";
const NOW_PLAYING_HINTS: &str = " Esc/↓: Dismiss │ m: Menu │ n: Settings │ q: Quit";

pub struct Footer {
    show_hints: bool,
    now_playing: bool,
}

impl Footer {
    pub fn new(show_hints: bool, now_playing: bool) -> Self {
        Self {
            show_hints,
            now_playing,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = match (self.show_hints, self.now_playing) {
            (false, _) => "",
            (true, false) => SETTINGS_HINTS,
            (true, true) => NOW_PLAYING_HINTS,
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let padding = (area.width as usize)
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::DIM);
        Paragraph::new(Line::from(vec![
            Span::styled(hints, text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, Style::default().fg(HEADER_SEPARATOR)),
        ]))
    }
}
