//! Turn routing: one inbound event in, zero or more payloads out.
//!
//! Per-turn flow is `Start -> Classified -> {MessageHandled | WelcomeHandled
//! | Unhandled}`; nothing suspends across turns. State continuity lives
//! entirely in the keyed `ConversationStateStore`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use kbot_core::{EventKind, InboundEvent, ResponsePayload};
use kbot_search::{SearchOutcome, SearchQueryExecutor};

use crate::compose::{ResponseComposer, REFINE_PROMPT};
use crate::state::{ConversationStateStore, RefinementPhase};

/// Cooperative cancellation flag for one turn.
///
/// Checked before and after the search call; no mid-call propagation. A
/// cancelled turn emits nothing and saves no state.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal(Arc<AtomicBool>);

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Orchestrates one conversational turn.
///
/// Dependencies are injected at construction; the router holds no mutable
/// state of its own and is shared across concurrent turns behind an `Arc`.
pub struct TurnRouter {
    executor: SearchQueryExecutor,
    composer: ResponseComposer,
    state: Arc<ConversationStateStore>,
}

impl TurnRouter {
    pub fn new(
        executor: SearchQueryExecutor,
        composer: ResponseComposer,
        state: Arc<ConversationStateStore>,
    ) -> Self {
        Self {
            executor,
            composer,
            state,
        }
    }

    /// Handle one inbound event.
    ///
    /// Always returns a defined payload set (possibly empty); no error ever
    /// propagates to the transport boundary.
    pub async fn handle_turn(
        &self,
        event: &InboundEvent,
        cancel: &CancelSignal,
    ) -> Vec<ResponsePayload> {
        match &event.kind {
            EventKind::Message => self.handle_message(event, cancel).await,
            EventKind::ConversationUpdate => self.handle_members_added(event),
            EventKind::Other { name } => {
                debug!(event_type = %name, "unhandled event type acknowledged");
                vec![ResponsePayload::PlainText {
                    text: format!("{} event detected", name),
                }]
            }
        }
    }

    async fn handle_message(
        &self,
        event: &InboundEvent,
        cancel: &CancelSignal,
    ) -> Vec<ResponsePayload> {
        if cancel.is_cancelled() {
            return Vec::new();
        }

        let text = event.text_or_empty();

        // Single attempt, fail open: any execution failure is treated
        // exactly like an empty result set. The decision is made here, in
        // the open, not inside the executor.
        let outcome = match self.executor.execute(text).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, conversation_id = %event.conversation_id,
                      "query execution failed; treating as empty outcome");
                SearchOutcome::empty()
            }
        };

        // The search call must not hold any conversation-level lock, and a
        // turn cancelled mid-flight saves no partial state.
        if cancel.is_cancelled() {
            return Vec::new();
        }

        let payload = self.composer.compose(&outcome, text);

        let phase = match &payload {
            ResponsePayload::PlainText { text } if text == REFINE_PROMPT => {
                RefinementPhase::AwaitingRefinement
            }
            _ => RefinementPhase::Idle,
        };
        self.state
            .update(&event.conversation_id, |state| state.phase = phase)
            .await;

        vec![payload]
    }

    fn handle_members_added(&self, event: &InboundEvent) -> Vec<ResponsePayload> {
        event
            .members_added
            .iter()
            .filter_map(|member| self.composer.compose_welcome(&member.id, &event.recipient_id))
            .collect()
    }
}
