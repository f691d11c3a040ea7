//! Response composition.
//!
//! Pure functions from a search outcome to a response payload. Cardinality
//! alone drives the shape; the one literal-text special case stands in for
//! the refinement flow. No side effects, no state reads.

use kbot_core::ResponsePayload;
use kbot_search::SearchOutcome;

/// Opt-out option appended to every suggestion list, and the literal a
/// user sends back when none of the suggestions fit.
pub const NONE_OF_THE_ABOVE: &str = "None of the above.";

/// Prompt sent when the user opted out of the suggestions.
pub const REFINE_PROMPT: &str = "Ok, please send your refined question";

/// Fallback when the index had nothing for the utterance.
pub const NO_ANSWERS_TEXT: &str = "Sorry, I couldn't find answers. Please send another query.";

/// Fixed greeting for newly added conversation members.
pub const WELCOME_TEXT: &str = "Welcome to Knowledge Base Search. This bot will help you to \
     get started with querying and displaying results from the knowledge index. Type your \
     query to get started.";

/// Composes response payloads from search outcomes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// Choose a payload shape for one turn. Policy, first match wins:
    ///
    /// 1. More than one record: suggestion list of questions in outcome order.
    /// 2. Exactly one record: answer detail copied verbatim.
    /// 3. Empty outcome, utterance is the opt-out literal: refine prompt.
    /// 4. Empty outcome otherwise: no-answers fallback.
    ///
    /// An empty outcome from a failed query and one from zero matches are
    /// indistinguishable here by design.
    pub fn compose(&self, outcome: &SearchOutcome, raw_text: &str) -> ResponsePayload {
        if outcome.len() > 1 {
            ResponsePayload::SuggestionList {
                options: outcome
                    .records()
                    .iter()
                    .map(|r| r.question.clone())
                    .collect(),
                none_of_above_label: NONE_OF_THE_ABOVE.to_string(),
            }
        } else if let Some(record) = outcome.records().first() {
            ResponsePayload::AnswerDetail {
                question: record.question.clone(),
                quick_steps: record.quick_steps.clone(),
                detailed_steps: record.detailed_steps.clone(),
            }
        } else if raw_text == NONE_OF_THE_ABOVE {
            ResponsePayload::PlainText {
                text: REFINE_PROMPT.to_string(),
            }
        } else {
            ResponsePayload::PlainText {
                text: NO_ANSWERS_TEXT.to_string(),
            }
        }
    }

    /// Greet a newly added member, unless the member is the bot itself.
    ///
    /// Evaluated once per added member; `None` means no payload for this one.
    pub fn compose_welcome(&self, member_id: &str, recipient_id: &str) -> Option<ResponsePayload> {
        if member_id == recipient_id {
            return None;
        }
        Some(ResponsePayload::Welcome {
            text: WELCOME_TEXT.to_string(),
        })
    }
}
