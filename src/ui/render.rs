use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::settings::SettingsPage;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let now_playing = app.now_playing();
    let (header, body, footer) = layout_regions(area, now_playing.is_some());

    if let (Some(header_widget), Some(header)) = (now_playing, header) {
        header_widget.render(frame, header);
    }

    frame.render_widget(Clear, body);
    let controller = app.current();
    let rows = app.rows();
    let focused = match app.focus() {
        Focus::Settings => controller.focused(),
        Focus::NowPlaying => None,
    };
    SettingsPage::new(controller.title(), controller.is_root(), &rows)
        .focused(focused)
        .render(frame, body);

    let footer_widget = Footer::new(
        app.snapshot().interface.show_hints,
        app.focus() == Focus::NowPlaying,
    );
    frame.render_widget(footer_widget.widget(footer), footer);
}
