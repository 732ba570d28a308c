use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::AppConfig;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// The store published a new snapshot.
    ConfigChanged,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate))
            .ok();

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Forward every snapshot change into the event queue.
    pub fn forward_config(&self, runtime: &Handle, mut updates: watch::Receiver<AppConfig>) {
        let tx = self.sender();
        runtime.spawn(async move {
            while updates.changed().await.is_ok() {
                if tx.send(AppEvent::ConfigChanged).is_err() {
                    break;
                }
            }
        });
    }
}

fn input_loop(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(..)) => tx.send(AppEvent::Resize),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to read terminal event");
                        return;
                    }
                };
                if forwarded.is_err() {
                    return;
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "failed to poll terminal events");
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
