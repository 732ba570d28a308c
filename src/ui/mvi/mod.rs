//! Unidirectional state primitives for screen state.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ draw
//!     ↑                                           │
//!     └───────────────────────────────────────────┘
//! ```
//!
//! Reducers only move UI-local state. Anything that touches the config
//! store leaves the controller as an effect instead.

/// Screen state. Cloned, compared, and reset with `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or observed event.
pub trait Intent: Send + 'static {}

/// The only place where a screen's state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be pure: no I/O, no store access.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
