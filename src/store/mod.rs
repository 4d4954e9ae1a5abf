//! Unidirectional data-flow core: one store, one action stream, one tree.
//!
//! ```text
//! Action ──→ Reducers ──→ AppState ──→ View
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **AppState**: one slice per feature, aggregated into a single tree
//! - **Action**: user interactions and fetch lifecycle events
//! - **Reducer**: pure function transforming a slice based on actions
//! - **Store**: runs every slice reducer per dispatch, publishes the new
//!   tree in a single step, then notifies subscribers
//!
//! Every reducer sees every action. That is what lets one slice respond
//! to an action another slice defined; the couplings that actually exist
//! are enumerated in [`REACTIONS`].

mod action;
mod reactions;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::Action;
pub use reactions::{reacting_slices, Reaction, REACTIONS};
pub use reducer::SliceReducer;
pub use state::{AppState, SliceId, SliceState};
pub use store::{Store, StoreError, SubscriptionId};
