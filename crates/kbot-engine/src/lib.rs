//! Turn dispatch and response composition.
//!
//! Classifies inbound events, runs the search, applies cardinality-based
//! response policy, and persists per-conversation dialog state. This crate
//! is the only place with decision logic; transport and index internals are
//! external collaborators.

pub mod compose;
pub mod router;
pub mod state;

pub use compose::ResponseComposer;
pub use router::{CancelSignal, TurnRouter};
pub use state::{ConversationStateStore, DialogState, RefinementPhase};
