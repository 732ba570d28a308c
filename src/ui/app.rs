use crate::config::{AppConfig, Submitter};
use crate::ui::header::{HeaderAffordance, HeaderCommand, NowPlayingHeader};
use crate::ui::nav::{Navigator, ScreenStack};
use crate::ui::settings::{Effect, RowView, ScreenId, SettingsController, TextContext};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Captions shown by the now-playing header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlayingInfo {
    pub state_title: String,
    pub state: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Settings,
    NowPlaying,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Latest observed snapshot. Starts as the injected default.
    snapshot: AppConfig,
    updates: watch::Receiver<AppConfig>,
    submitter: Submitter,
    stack: ScreenStack,
    /// One controller per entry of `stack`, bottom first.
    controllers: Vec<SettingsController>,
    now_playing: NowPlayingInfo,
    ctx: TextContext,
    /// Submissions that may still be committing.
    pending: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(
        default: AppConfig,
        updates: watch::Receiver<AppConfig>,
        submitter: Submitter,
        root: ScreenId,
        now_playing: NowPlayingInfo,
    ) -> Self {
        let stack = ScreenStack::new(root);
        let controllers = vec![SettingsController::new(root.screen().as_ref(), &default)];
        Self {
            should_quit: false,
            focus: Focus::Settings,
            snapshot: default,
            updates,
            submitter,
            stack,
            controllers,
            now_playing,
            ctx: TextContext::new(),
            pending: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Commits a slider left mid-drag before quitting.
    pub fn request_quit(&mut self) {
        let effect = self.current_mut().release();
        self.run(effect);
        self.should_quit = true;
    }

    /// Hand over submissions that have not finished, so the caller can wait
    /// for them before shutting the runtime down.
    pub fn take_pending(&mut self) -> Vec<JoinHandle<()>> {
        self.pending.retain(|handle| !handle.is_finished());
        std::mem::take(&mut self.pending)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn snapshot(&self) -> &AppConfig {
        &self.snapshot
    }

    pub fn screens(&self) -> &[ScreenId] {
        self.stack.screens()
    }

    /// Pull the latest snapshot from the store and re-project every screen.
    pub fn on_config_changed(&mut self) {
        self.snapshot = self.updates.borrow_and_update().clone();
        for controller in &mut self.controllers {
            controller.on_snapshot(&self.snapshot);
        }
    }

    pub fn current(&self) -> &SettingsController {
        // `controllers` mirrors `stack`, which is never empty.
        &self.controllers[self.controllers.len() - 1]
    }

    fn current_mut(&mut self) -> &mut SettingsController {
        let last = self.controllers.len() - 1;
        &mut self.controllers[last]
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.current().rows(&self.snapshot, &self.ctx)
    }

    pub fn move_focus(&mut self, delta: i32) {
        let effect = if delta < 0 {
            self.current_mut().move_up()
        } else {
            self.current_mut().move_down()
        };
        self.run(effect);
    }

    pub fn activate(&mut self) {
        let last = self.controllers.len() - 1;
        let effect = self.controllers[last].activate(&self.snapshot);
        self.run(effect);
    }

    pub fn nudge(&mut self, steps: i64) {
        let last = self.controllers.len() - 1;
        self.controllers[last].nudge(steps, &self.snapshot);
    }

    /// Leave the current screen. Root screens ignore it; a non-root screen at
    /// the bottom of the stack quits.
    pub fn go_back(&mut self) {
        if self.current().is_root() {
            return;
        }
        let effect = self.current_mut().release();
        self.run(effect);
        if self.stack.pop() {
            self.controllers.pop();
        } else {
            self.request_quit();
        }
    }

    pub fn now_playing(&self) -> Option<NowPlayingHeader<'_>> {
        (self.focus == Focus::NowPlaying).then(|| {
            NowPlayingHeader::new(&self.now_playing.state_title, &self.now_playing.state)
        })
    }

    pub fn toggle_now_playing(&mut self) {
        if self.focus == Focus::NowPlaying {
            self.focus = Focus::Settings;
            return;
        }
        let effect = self.current_mut().release();
        self.run(effect);
        self.focus = Focus::NowPlaying;
    }

    pub fn press_header(&mut self, affordance: HeaderAffordance) {
        let command = self
            .now_playing()
            .and_then(|header| header.press(affordance));
        if let Some(HeaderCommand::Dismiss) = command {
            self.focus = Focus::Settings;
        }
    }

    fn run(&mut self, effect: Option<Effect>) {
        match effect {
            None => {}
            Some(Effect::Submit(mutation)) => {
                // Not awaited here: the next snapshot brings the result.
                self.pending.retain(|handle| !handle.is_finished());
                self.pending.push(self.submitter.submit(mutation));
            }
            Some(Effect::Navigate(activate)) => {
                activate(&mut self.stack);
                self.sync_controllers();
            }
        }
    }

    /// Build controllers for screens pushed by a navigation effect.
    fn sync_controllers(&mut self) {
        let screens = self.stack.screens();
        self.controllers.truncate(screens.len());
        for screen in &screens[self.controllers.len()..] {
            tracing::info!(?screen, "opening settings screen");
            self.controllers
                .push(SettingsController::new(screen.screen().as_ref(), &self.snapshot));
        }
    }
}
