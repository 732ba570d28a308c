use crate::ui::theme::{GLOBAL_BORDER, PRIMARY_TEXT, SECONDARY_TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DISMISS_GLYPH: &str = "⌄";
const OVERFLOW_GLYPH: &str = "⋮";
const AFFORDANCE_WIDTH: u16 = 3;

/// The two buttons of the now-playing header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAffordance {
    Dismiss,
    Overflow,
}

/// What the parent should do after a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCommand {
    Dismiss,
}

/// Stateless now-playing header: a caption pair between a dismiss and an
/// overflow button.
pub struct NowPlayingHeader<'a> {
    state_title: &'a str,
    state: &'a str,
}

impl<'a> NowPlayingHeader<'a> {
    pub fn new(state_title: &'a str, state: &'a str) -> Self {
        Self { state_title, state }
    }

    /// Overflow is drawn but has no action yet.
    pub fn press(&self, affordance: HeaderAffordance) -> Option<HeaderCommand> {
        match affordance {
            HeaderAffordance::Dismiss => Some(HeaderCommand::Dismiss),
            HeaderAffordance::Overflow => {
                tracing::debug!("now-playing overflow menu pressed");
                None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(AFFORDANCE_WIDTH),
                Constraint::Min(0),
                Constraint::Length(AFFORDANCE_WIDTH),
            ])
            .split(inner);

        let glyph_style = Style::default().fg(PRIMARY_TEXT);
        frame.render_widget(
            Paragraph::new(Span::styled(DISMISS_GLYPH, glyph_style)).alignment(Alignment::Center),
            columns[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(OVERFLOW_GLYPH, glyph_style)).alignment(Alignment::Center),
            columns[2],
        );

        // Leave one column of margin on each side of the captions.
        let width = columns[1].width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(Span::styled(
                truncate(&self.state_title.to_uppercase(), width),
                Style::default()
                    .fg(SECONDARY_TEXT)
                    .add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                truncate(self.state, width),
                Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            columns[1],
        );
    }
}

/// Cut `text` to at most `width` terminal columns, ending in `…` when
/// shortened.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
