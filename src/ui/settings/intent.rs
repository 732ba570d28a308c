use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Screen activated. `sliders` holds confirmed values by row index.
    Mount {
        focusable: Vec<usize>,
        sliders: Vec<(usize, i64)>,
    },
    MoveUp,
    MoveDown,
    /// Slider moved to `value` without being released.
    Drag { index: usize, value: i64 },
    /// Drag finished; the draft keeps its value until the next snapshot.
    Release { index: usize },
    /// New snapshot observed. Only drafts that are not being dragged follow it.
    Reconcile { sliders: Vec<(usize, i64)> },
}

impl Intent for SettingsIntent {}
