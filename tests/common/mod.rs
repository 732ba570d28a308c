//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use playdeck::config::{AppConfig, ConfigStore, InMemory};
use playdeck::ui::app::{App, NowPlayingInfo};
use playdeck::ui::render::draw;
use playdeck::ui::settings::{ConfigItem, ScreenId};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Store over in-memory persistence, seeded with defaults.
pub fn memory_store() -> (Arc<InMemory>, ConfigStore) {
    seeded_store(AppConfig::default())
}

/// Store over in-memory persistence, seeded with `config`.
pub fn seeded_store(config: AppConfig) -> (Arc<InMemory>, ConfigStore) {
    let memory = Arc::new(InMemory::new());
    let store = ConfigStore::with_initial(config, memory.clone());
    (memory, store)
}

/// Draw the whole app into an off-screen buffer.
pub fn render_app(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer rows as plain strings.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// App bound to `store`, opened on `root`. Must run inside a tokio runtime.
pub fn make_app(store: &ConfigStore, root: ScreenId) -> App {
    let mut app = App::new(
        AppConfig::default(),
        store.observe(),
        store.submitter(Handle::current()),
        root,
        NowPlayingInfo {
            state_title: "Playing from album".to_string(),
            state: "Example Title".to_string(),
        },
    );
    app.on_config_changed();
    app
}

/// Wait until the store publishes, then let the app observe it.
pub async fn settle(app: &mut App, rx: &mut tokio::sync::watch::Receiver<AppConfig>) {
    tokio::time::timeout(Duration::from_secs(2), rx.changed())
        .await
        .expect("store did not publish in time")
        .expect("store dropped");
    app.on_config_changed();
}

/// Counts how many times an accessor ran.
#[derive(Clone, Default)]
pub struct ReadCounter(Arc<AtomicUsize>);

impl ReadCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// `[Category "Playback", Switch "Gapless"]` bound to `player.gapless`.
pub fn gapless_items(reads: ReadCounter) -> Vec<ConfigItem> {
    vec![
        ConfigItem::category("Playback"),
        ConfigItem::switch(
            "Gapless",
            "",
            move |config| {
                reads.hit();
                config.player.gapless
            },
            |config, value| config.player.gapless = value,
        ),
    ]
}

/// One crossfade slider with twelve one-second stops.
pub fn crossfade_items() -> Vec<ConfigItem> {
    vec![ConfigItem::slider(
        "Crossfade",
        |ctx, value| ctx.seconds(value),
        0..=12,
        11,
        |config| i64::from(config.player.crossfade_seconds),
        |config, value| config.player.crossfade_seconds = u32::try_from(value).unwrap_or(0),
    )]
}
