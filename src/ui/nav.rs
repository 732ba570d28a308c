//! Screen stack and the navigation handle given to preference rows.

use crate::ui::settings::ScreenId;

/// Capability handed to `Preference` rows when they are activated.
pub trait Navigator {
    fn push(&mut self, screen: ScreenId);

    /// Returns false when already at the bottom of the stack.
    fn pop(&mut self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenStack {
    screens: Vec<ScreenId>,
}

impl ScreenStack {
    pub fn new(root: ScreenId) -> Self {
        Self {
            screens: vec![root],
        }
    }

    pub fn current(&self) -> ScreenId {
        // The stack never drops below one entry.
        self.screens[self.screens.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn screens(&self) -> &[ScreenId] {
        &self.screens
    }
}

impl Navigator for ScreenStack {
    fn push(&mut self, screen: ScreenId) {
        tracing::debug!(?screen, "push screen");
        self.screens.push(screen);
    }

    fn pop(&mut self) -> bool {
        if self.screens.len() <= 1 {
            return false;
        }
        let screen = self.screens.pop();
        tracing::debug!(?screen, "pop screen");
        true
    }
}
