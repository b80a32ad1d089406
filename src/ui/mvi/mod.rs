//! Model-View-Intent (MVI) primitives.
//!
//! Fetch state is driven through these traits so every transition goes
//! through one pure function.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── retry / refresh ─────┘
//! ```
//!
//! - **State**: what a view renders, cloned out of its owner
//! - **Intent**: a transition event (request started, payload arrived, failure)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
