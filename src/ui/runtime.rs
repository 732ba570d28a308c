use crate::config::{AppConfig, ConfigStore};
use crate::ui::app::{App, NowPlayingInfo};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::settings::ScreenId;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

pub struct RunOptions {
    pub root: ScreenId,
    pub now_playing: NowPlayingInfo,
}

/// Drive the UI until the user quits. Blocks the calling thread; store
/// submissions run on `runtime`.
pub fn run(store: &ConfigStore, runtime: Handle, options: RunOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    events.forward_config(&runtime, store.observe());

    let mut app = App::new(
        AppConfig::default(),
        store.observe(),
        store.submitter(runtime.clone()),
        options.root,
        options.now_playing,
    );
    app.on_config_changed();
    tracing::info!(screen = ?options.root, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Redrawn on the next iteration; `draw` reads the new size.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Ok(AppEvent::ConfigChanged) => app.on_config_changed(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    let pending = app.take_pending();
    if !pending.is_empty() {
        tracing::debug!(count = pending.len(), "waiting for config commits");
        runtime.block_on(async {
            for handle in pending {
                let _ = handle.await;
            }
        });
    }
    tracing::info!("ui stopped");
    Ok(())
}
