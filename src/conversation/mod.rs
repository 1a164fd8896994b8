//! Transcript and conversation-context types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One transcript entry. Immutable once created; the transcript is an
/// append-only ordered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Monotonic, timestamp-derived id
    pub id: i64,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    /// Present only on bot messages offering branches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<MessageOption>>,
}

/// A selectable branch attached to a bot message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOption {
    pub id: String,
    pub label: String,
    pub action: String,
}

/// Closed set of emotion categories the classifier can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Breakup,
    Frustration,
    Anxiety,
    Sadness,
    Tiredness,
}

impl EmotionCategory {
    pub const ALL: [EmotionCategory; 5] = [
        EmotionCategory::Breakup,
        EmotionCategory::Frustration,
        EmotionCategory::Anxiety,
        EmotionCategory::Sadness,
        EmotionCategory::Tiredness,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnxietyIntensity {
    Initial,
    NotWorking,
    Resistant,
    Crisis,
}

/// Transient per-sub-conversation state. Mutated only by the orchestrator:
/// set when a flow starts, cleared when a terminal response is reached or a
/// new emotion replaces the active one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub emotion: Option<EmotionCategory>,
    pub stage: Option<String>,
    pub anxiety_intensity: Option<AnxietyIntensity>,
    pub needs_professional_help: Option<bool>,
}

impl ConversationContext {
    pub fn start_flow(&mut self, category: EmotionCategory) {
        self.emotion = Some(category);
        self.stage = Some("initial".to_string());
        self.anxiety_intensity = if category == EmotionCategory::Anxiety {
            Some(AnxietyIntensity::Initial)
        } else {
            None
        };
    }

    pub fn escalate_anxiety(&mut self, level: AnxietyIntensity) {
        self.anxiety_intensity = Some(level);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        self.emotion.is_none()
    }
}

/// One chat session: the explicit state a browser tab owns in the original
/// app. The context is transient; the transcript is persisted separately.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub context: ConversationContext,
    last_id: i64,
    last_active: DateTime<Utc>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            context: ConversationContext::default(),
            last_id: 0,
            last_active: Utc::now(),
        }
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next message id: timestamp-derived, forced monotonic within the
    /// session so two messages minted in the same millisecond stay ordered.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        self.last_active = now;
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// When this session last minted a message id. Idle sessions are
    /// candidates for eviction once the session map fills up.
    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    /// Fold an id from the persisted transcript into the monotonic counter
    /// so new ids never collide with stored ones.
    pub fn observe_id(&mut self, id: i64) {
        if id > self.last_id {
            self.last_id = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_flow_sets_anxiety_intensity_only_for_anxiety() {
        let mut ctx = ConversationContext::default();
        ctx.start_flow(EmotionCategory::Anxiety);
        assert_eq!(ctx.anxiety_intensity, Some(AnxietyIntensity::Initial));

        ctx.start_flow(EmotionCategory::Sadness);
        assert_eq!(ctx.emotion, Some(EmotionCategory::Sadness));
        assert_eq!(ctx.anxiety_intensity, None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut ctx = ConversationContext::default();
        ctx.start_flow(EmotionCategory::Breakup);
        ctx.needs_professional_help = Some(true);
        ctx.clear();
        assert!(ctx.is_idle());
        assert_eq!(ctx, ConversationContext::default());
    }

    #[test]
    fn ids_are_strictly_increasing_within_a_session() {
        let mut session = ChatSession::new();
        let now = Utc::now();
        let a = session.next_id(now);
        let b = session.next_id(now);
        let c = session.next_id(now);
        assert!(a < b && b < c);
    }
}
