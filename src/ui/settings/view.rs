//! Terminal rendering of projected settings rows.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::settings::project::RowView;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, INVERSE_TEXT, LARGE_SWITCH_OFF, PRIMARY_TEXT,
    SECONDARY_TEXT, SWITCH_OFF,
};

const BACK_GLYPH: &str = "←";
const FOCUS_MARKER: &str = "› ";
const NO_MARKER: &str = "  ";

/// A full settings screen: title bar plus one block of lines per row.
pub struct SettingsPage<'a> {
    title: &'a str,
    is_root: bool,
    rows: &'a [RowView],
    focused: Option<usize>,
}

impl<'a> SettingsPage<'a> {
    pub fn new(title: &'a str, is_root: bool, rows: &'a [RowView]) -> Self {
        Self {
            title,
            is_root,
            rows,
            focused: None,
        }
    }

    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        frame.render_widget(self.title_bar(), chunks[0]);

        let width = chunks[1].width as usize;
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut focused_span = None;
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 && matches!(row, RowView::Category { .. }) {
                lines.push(Line::from(""));
            }
            let start = lines.len();
            lines.extend(row_lines(row, self.focused == Some(index), width));
            if self.focused == Some(index) {
                focused_span = Some((start, lines.len()));
            }
        }

        let height = chunks[1].height as usize;
        let offset = match focused_span {
            Some((_, end)) if end > height => end - height,
            _ => 0,
        };
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), chunks[1]);
    }

    fn title_bar(&self) -> Paragraph<'static> {
        let mut spans = Vec::new();
        if self.is_root {
            spans.push(Span::raw("  "));
        } else {
            spans.push(Span::styled(
                format!("{} ", BACK_GLYPH),
                Style::default().fg(PRIMARY_TEXT),
            ));
        }
        spans.push(Span::styled(
            self.title.to_string(),
            Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn row_lines(row: &RowView, focused: bool, width: usize) -> Vec<Line<'static>> {
    let marker = if focused {
        Span::styled(FOCUS_MARKER, Style::default().fg(ACCENT))
    } else {
        Span::raw(NO_MARKER)
    };
    let label_style = Style::default().fg(PRIMARY_TEXT);

    let mut lines = match row {
        RowView::Category { label } => vec![Line::from(vec![
            Span::raw(NO_MARKER),
            Span::styled(
                label.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ])],
        RowView::Info { text } => vec![Line::from(vec![
            Span::raw(NO_MARKER),
            Span::styled(format!("ⓘ {}", text), Style::default().fg(SECONDARY_TEXT)),
        ])],
        RowView::Preference { label, subtitle } => {
            let mut lines = vec![Line::from(vec![
                marker,
                Span::styled(label.clone(), label_style),
            ])];
            lines.extend(subtitle_line(subtitle));
            lines
        }
        RowView::Switch {
            label,
            subtitle,
            on,
        } => {
            let mut lines = vec![padded(
                vec![marker, Span::styled(label.clone(), label_style)],
                vec![switch_glyph(*on), Span::raw(" ")],
                width,
            )];
            lines.extend(subtitle_line(subtitle));
            lines
        }
        RowView::LargeSwitch { label, on } => {
            let (bg, fg) = if *on {
                (ACCENT, INVERSE_TEXT)
            } else {
                (LARGE_SWITCH_OFF, PRIMARY_TEXT)
            };
            let state = if *on { " ON  " } else { " OFF " };
            let line = padded(
                vec![
                    marker,
                    Span::styled(
                        format!(" {}", label),
                        Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    ),
                ],
                vec![Span::styled(state, Style::default().fg(fg))],
                width,
            )
            .style(Style::default().bg(bg));
            // Emphasized card: keeps its own background when focused.
            return vec![line];
        }
        RowView::Radio {
            label,
            subtitle,
            selected,
            enabled,
        } => {
            let glyph = if *selected { "(•) " } else { "( ) " };
            let glyph_style = if *selected {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(SWITCH_OFF)
            };
            let mut lines = vec![Line::from(vec![
                marker,
                Span::styled(glyph, glyph_style),
                Span::styled(label.clone(), label_style),
            ])];
            lines.extend(subtitle_line(subtitle));
            if !*enabled {
                lines = lines
                    .into_iter()
                    .map(|line| line.patch_style(Style::default().add_modifier(Modifier::DIM)))
                    .collect();
            }
            lines
        }
        RowView::Slider {
            label,
            subtitle,
            value,
            range,
            dragging,
        } => {
            let header = padded(
                vec![marker, Span::styled(label.clone(), label_style)],
                vec![
                    Span::styled(subtitle.clone(), Style::default().fg(SECONDARY_TEXT)),
                    Span::raw(" "),
                ],
                width,
            );
            let track_width = width.saturating_sub(NO_MARKER.len() * 2).max(3);
            let span = (range.end() - range.start()).max(1);
            let offset = (value - range.start()).clamp(0, span);
            let thumb = usize::try_from(offset).unwrap_or(0) * (track_width - 1)
                / usize::try_from(span).unwrap_or(1);
            let thumb_style = if *dragging {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ACCENT)
            };
            let track = Line::from(vec![
                Span::raw(NO_MARKER),
                Span::styled("━".repeat(thumb), Style::default().fg(ACCENT)),
                Span::styled(if *dragging { "◉" } else { "●" }, thumb_style),
                Span::styled(
                    "─".repeat(track_width - 1 - thumb),
                    Style::default().fg(SWITCH_OFF),
                ),
            ]);
            vec![header, track]
        }
    };

    if focused {
        lines = lines
            .into_iter()
            .map(|line| line.patch_style(Style::default().bg(ACTIVE_HIGHLIGHT)))
            .collect();
    }
    lines
}

fn subtitle_line(subtitle: &str) -> Option<Line<'static>> {
    if subtitle.is_empty() {
        return None;
    }
    Some(Line::from(vec![
        Span::raw("    "),
        Span::styled(subtitle.to_string(), Style::default().fg(SECONDARY_TEXT)),
    ]))
}

fn switch_glyph(on: bool) -> Span<'static> {
    if on {
        Span::styled("[ on]", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("[off]", Style::default().fg(SWITCH_OFF))
    }
}

/// Left spans, then right spans pushed against the right edge.
fn padded(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
    let padding = width.saturating_sub(used).max(1);
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(right);
    Line::from(spans)
}
