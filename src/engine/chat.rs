//! Turn orchestration
//!
//! The ChatEngine drives one turn of the Luna conversation. It:
//! 1. Receives one user input (free text or a clicked option)
//! 2. Routes it: quick response, escalation action, active-flow option,
//!    anxiety "not working" override, or emotion classification
//! 3. Updates the conversation context held by the session
//! 4. Returns the user and bot messages to append to the transcript,
//!    plus any delayed closing remark as data
//!
//! The delayed remark is returned rather than scheduled here so tests can
//! flush it deterministically; the server layer spawns it fire-and-forget.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

use crate::conversation::{
    AnxietyIntensity, ChatSession, ConversationContext, EmotionCategory, Message, MessageOption,
};
use crate::flows::{self, EscalationAction, ResponseBody};
use crate::storage::UserProfile;

use super::{classifier, escalation, Notifier};

/// Action id the consent cancel options route to: a neutral exit with no
/// side effect.
const GENERAL_SUPPORT_ACTION: &str = "general_support";

/// One user input event
#[derive(Debug, Clone)]
pub enum TurnInput {
    /// Free text typed into the input box
    Text(String),
    /// A clicked option from a previous bot message
    Option(MessageOption),
}

/// A closing remark to append after a fixed delay. Fire-and-forget: it must
/// not block the turn's synchronous return, and one landing after a newer
/// turn's messages is accepted behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub delay_ms: u64,
    pub text: String,
}

/// The messages one turn produced
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub user_message: Message,
    pub bot_message: Message,
    pub follow_up: Option<FollowUp>,
}

/// What the routing step decided, before messages are minted
struct Routed {
    text: String,
    options: Vec<MessageOption>,
    follow_up: Option<FollowUp>,
}

impl Routed {
    fn terminal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
            follow_up: None,
        }
    }

    fn with_options(text: impl Into<String>, options: Vec<MessageOption>) -> Self {
        Self {
            text: text.into(),
            options,
            follow_up: None,
        }
    }
}

pub struct ChatEngine {
    notifier: Arc<dyn Notifier>,
}

impl ChatEngine {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Luna's greeting seeding a fresh transcript, personalized when a
    /// profile is stored.
    pub fn welcome_message(profile: Option<&UserProfile>) -> String {
        match profile.map(|p| p.first_name.trim()).filter(|n| !n.is_empty()) {
            Some(name) => format!(
                "¡Hola {name}! 🌙 Soy Luna, tu compañera de apoyo emocional. Me alegra verte de nuevo. ¿Cómo te sentís hoy?"
            ),
            None => "¡Hola! 🌙 Soy Luna, tu compañera de apoyo emocional. Estoy aquí para escucharte y ayudarte. ¿Cómo te sentís hoy?".to_string(),
        }
    }

    /// Process one turn. Returns `None` for empty/whitespace text input,
    /// which is a no-op rather than an error.
    pub fn take_turn(
        &self,
        session: &mut ChatSession,
        input: TurnInput,
        profile: Option<&UserProfile>,
        now: DateTime<Utc>,
    ) -> Option<TurnOutcome> {
        let (user_text, routed) = match input {
            TurnInput::Text(text) => {
                if text.trim().is_empty() {
                    return None;
                }
                let routed = self.route_text(&text, &mut session.context);
                (text, routed)
            }
            TurnInput::Option(option) => {
                let routed = self.route_action(&option.action, &mut session.context, profile, now);
                (option.label, routed)
            }
        };

        let user_message = Message {
            id: session.next_id(now),
            text: user_text,
            is_bot: false,
            timestamp: now,
            options: None,
        };
        let bot_message = Message {
            id: session.next_id(now),
            text: routed.text,
            is_bot: true,
            timestamp: now,
            options: (!routed.options.is_empty()).then_some(routed.options),
        };

        Some(TurnOutcome {
            user_message,
            bot_message,
            follow_up: routed.follow_up,
        })
    }

    /// Free text: quick response, anxiety "not working" override, then
    /// classification with the general pool as fallback.
    fn route_text(&self, text: &str, ctx: &mut ConversationContext) -> Routed {
        if let Some(reply) = lookup_quick_response(text) {
            // Canned lookup takes priority even when the phrase contains
            // emotion keywords; context stays untouched.
            return Routed::terminal(reply);
        }

        if ctx.emotion == Some(EmotionCategory::Anxiety) && classifier::detect_not_working(text) {
            let flow = flows::flow(EmotionCategory::Anxiety);
            if let Some(response) = flows::resolve_response(flow, "anxiety_not_working") {
                if let ResponseBody::Static(reply) = response.body {
                    ctx.escalate_anxiety(AnxietyIntensity::NotWorking);
                    return Routed::with_options(reply, to_message_options(response.options));
                }
            }
        }

        match classifier::classify(text) {
            Some(category) => {
                let flow = flows::flow(category);
                ctx.start_flow(category);
                Routed::with_options(flow.initial.text, to_message_options(flow.initial.options))
            }
            None => Routed::terminal(general_response()),
        }
    }

    /// Option click: escalation actions first, then the active flow's
    /// response map. An unresolved action is treated as a classification
    /// miss and never surfaces an internal error.
    fn route_action(
        &self,
        action: &str,
        ctx: &mut ConversationContext,
        profile: Option<&UserProfile>,
        now: DateTime<Utc>,
    ) -> Routed {
        if let Some(escalation_action) = EscalationAction::from_action_id(action) {
            return self.route_escalation(escalation_action, ctx, profile, now);
        }

        if action == GENERAL_SUPPORT_ACTION {
            ctx.clear();
            return Routed::terminal(general_response());
        }

        if let Some(emotion) = ctx.emotion {
            let flow = flows::flow(emotion);
            if let Some(response) = flows::resolve_response(flow, action) {
                return match response.body {
                    ResponseBody::Static(text) => {
                        if response.options.is_empty() {
                            ctx.clear();
                            Routed {
                                text: text.to_string(),
                                options: Vec::new(),
                                follow_up: Some(closing_remark(emotion)),
                            }
                        } else {
                            Routed::with_options(text, to_message_options(response.options))
                        }
                    }
                    ResponseBody::Escalation(escalation_action) => {
                        self.route_escalation(escalation_action, ctx, profile, now)
                    }
                };
            }
        }

        tracing::debug!(action, "unresolved option action, using general fallback");
        ctx.clear();
        Routed::terminal(general_response())
    }

    fn route_escalation(
        &self,
        action: EscalationAction,
        ctx: &mut ConversationContext,
        profile: Option<&UserProfile>,
        now: DateTime<Utc>,
    ) -> Routed {
        let outcome = escalation::resolve(action, profile, now, self.notifier.as_ref());
        if outcome.options.is_empty() {
            ctx.clear();
        }
        Routed {
            text: outcome.text,
            options: outcome.options,
            follow_up: None,
        }
    }
}

fn lookup_quick_response(text: &str) -> Option<&'static str> {
    flows::QUICK_RESPONSES
        .iter()
        .find(|(label, _)| *label == text)
        .map(|(_, reply)| *reply)
}

fn general_response() -> String {
    let mut rng = rand::thread_rng();
    flows::GENERAL_RESPONSES
        .choose(&mut rng)
        .copied()
        .unwrap_or(flows::GENERAL_RESPONSES[0])
        .to_string()
}

fn closing_remark(emotion: EmotionCategory) -> FollowUp {
    let text = match emotion {
        EmotionCategory::Breakup => flows::CLOSING_REMARK_BREAKUP,
        _ => flows::CLOSING_REMARK_GENERIC,
    };
    FollowUp {
        delay_ms: flows::CLOSING_REMARK_DELAY_MS,
        text: text.to_string(),
    }
}

fn to_message_options(options: &'static [flows::FlowOption]) -> Vec<MessageOption> {
    options
        .iter()
        .map(|option| option.to_message_option())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::RecordingNotifier;

    fn engine() -> (ChatEngine, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        (ChatEngine::new(notifier.clone()), notifier)
    }

    fn profile() -> UserProfile {
        UserProfile {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            birth_date: None,
            email: "a@b.com".to_string(),
            emergency_contact_relation: "Madre".to_string(),
            emergency_contact_name: "María Pérez".to_string(),
            emergency_contact_phone: "+54 11 5555-0000".to_string(),
        }
    }

    fn text_turn(
        engine: &ChatEngine,
        session: &mut ChatSession,
        text: &str,
        profile: Option<&UserProfile>,
    ) -> TurnOutcome {
        engine
            .take_turn(session, TurnInput::Text(text.to_string()), profile, Utc::now())
            .expect("turn should produce messages")
    }

    fn option_turn(
        engine: &ChatEngine,
        session: &mut ChatSession,
        action: &str,
        profile: Option<&UserProfile>,
    ) -> TurnOutcome {
        let option = MessageOption {
            id: action.to_string(),
            label: action.to_string(),
            action: action.to_string(),
        };
        engine
            .take_turn(session, TurnInput::Option(option), profile, Utc::now())
            .expect("turn should produce messages")
    }

    #[test]
    fn anxious_text_starts_the_anxiety_flow() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        let outcome = text_turn(&engine, &mut session, "me siento ansioso por el examen", None);

        let flow = flows::flow(EmotionCategory::Anxiety);
        assert_eq!(outcome.bot_message.text, flow.initial.text);
        let options = outcome.bot_message.options.expect("initial prompt branches");
        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["anxiety_breathing", "anxiety_thoughts", "anxiety_identify"]);
        assert_eq!(session.context.emotion, Some(EmotionCategory::Anxiety));
        assert_eq!(
            session.context.anxiety_intensity,
            Some(AnxietyIntensity::Initial)
        );
    }

    #[test]
    fn not_working_overrides_classification_while_anxiety_is_active() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        text_turn(&engine, &mut session, "tengo mucha ansiedad", None);

        let outcome = text_turn(&engine, &mut session, "no funciona nada", None);
        let flow = flows::flow(EmotionCategory::Anxiety);
        let expected = flows::resolve_response(flow, "anxiety_not_working").unwrap();
        match expected.body {
            ResponseBody::Static(text) => assert_eq!(outcome.bot_message.text, text),
            ResponseBody::Escalation(_) => unreachable!(),
        }
        assert_eq!(outcome.bot_message.options.unwrap().len(), 4);
        assert_eq!(
            session.context.anxiety_intensity,
            Some(AnxietyIntensity::NotWorking)
        );
    }

    #[test]
    fn not_working_without_active_anxiety_is_ordinary_text() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        let outcome = text_turn(&engine, &mut session, "no funciona nada", None);
        // No flow active: falls through to the general pool.
        assert!(flows::GENERAL_RESPONSES.contains(&outcome.bot_message.text.as_str()));
        assert!(session.context.is_idle());
    }

    #[test]
    fn notify_trusted_adult_without_profile_uses_fallback_and_no_side_effect() {
        let (engine, notifier) = engine();
        let mut session = ChatSession::new();
        text_turn(&engine, &mut session, "tengo mucha ansiedad", None);

        let outcome = option_turn(&engine, &mut session, "notify_trusted_adult", None);
        assert!(outcome
            .bot_message
            .text
            .starts_with("Para contactar a un adulto de confianza"));
        assert!(outcome.bot_message.options.is_none());
        assert!(notifier.sent.lock().unwrap().is_empty());
        // Terminal fallback clears the flow.
        assert!(session.context.is_idle());
    }

    #[test]
    fn confirm_appointment_notifies_once_and_embeds_email() {
        let (engine, notifier) = engine();
        let mut session = ChatSession::new();
        let profile = profile();

        let outcome = option_turn(&engine, &mut session, "confirm_appointment", Some(&profile));
        assert!(outcome.bot_message.text.contains("a@b.com"));
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn quick_response_label_bypasses_classification() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        // The label contains the anxiety keyword "ansioso", yet the canned
        // reply must win and no flow may start.
        let outcome = text_turn(&engine, &mut session, "😰 Me siento ansioso/a", None);
        assert!(outcome.bot_message.text.starts_with("La ansiedad puede ser muy abrumadora"));
        assert!(outcome.bot_message.options.is_none());
        assert!(session.context.is_idle());
    }

    #[test]
    fn terminal_flow_response_clears_context_and_schedules_closing_remark() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        text_turn(&engine, &mut session, "estoy muy cansada", None);
        assert_eq!(session.context.emotion, Some(EmotionCategory::Tiredness));

        let outcome = option_turn(&engine, &mut session, "tiredness_break", None);
        assert!(outcome.bot_message.options.is_none());
        let follow_up = outcome.follow_up.expect("terminal node schedules a remark");
        assert_eq!(follow_up.text, flows::CLOSING_REMARK_GENERIC);
        assert!(session.context.is_idle());
    }

    #[test]
    fn breakup_terminal_uses_breakup_closing_remark() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        text_turn(&engine, &mut session, "mi novia me dejó", None);
        assert_eq!(session.context.emotion, Some(EmotionCategory::Breakup));

        let outcome = option_turn(&engine, &mut session, "breakup_vent", None);
        assert_eq!(
            outcome.follow_up.expect("closing remark").text,
            flows::CLOSING_REMARK_BREAKUP
        );
    }

    #[test]
    fn branching_response_keeps_context_and_skips_closing_remark() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        text_turn(&engine, &mut session, "estoy triste", None);

        let outcome = option_turn(&engine, &mut session, "sadness_relational", None);
        assert_eq!(outcome.bot_message.options.unwrap().len(), 4);
        assert!(outcome.follow_up.is_none());
        assert_eq!(session.context.emotion, Some(EmotionCategory::Sadness));
    }

    #[test]
    fn unresolved_action_falls_back_to_general_pool() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        text_turn(&engine, &mut session, "estoy triste", None);

        let outcome = option_turn(&engine, &mut session, "no_such_action", None);
        assert!(flows::GENERAL_RESPONSES.contains(&outcome.bot_message.text.as_str()));
        assert!(session.context.is_idle());
    }

    #[test]
    fn cancel_routes_to_general_support_without_side_effect() {
        let (engine, notifier) = engine();
        let mut session = ChatSession::new();
        let profile = profile();
        text_turn(&engine, &mut session, "tengo mucha ansiedad", Some(&profile));
        option_turn(&engine, &mut session, "notify_trusted_adult", Some(&profile));

        let outcome = option_turn(&engine, &mut session, "general_support", Some(&profile));
        assert!(flows::GENERAL_RESPONSES.contains(&outcome.bot_message.text.as_str()));
        assert!(notifier.sent.lock().unwrap().is_empty());
        assert!(session.context.is_idle());
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        assert!(engine
            .take_turn(&mut session, TurnInput::Text("   ".into()), None, Utc::now())
            .is_none());
    }

    #[test]
    fn a_new_emotion_replaces_the_active_one() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        text_turn(&engine, &mut session, "tengo mucha ansiedad", None);
        text_turn(&engine, &mut session, "mi pareja y yo rompimos", None);
        assert_eq!(session.context.emotion, Some(EmotionCategory::Breakup));
        assert_eq!(session.context.anxiety_intensity, None);
    }

    #[test]
    fn message_ids_stay_monotonic_across_turns() {
        let (engine, _) = engine();
        let mut session = ChatSession::new();
        let first = text_turn(&engine, &mut session, "hola", None);
        let second = text_turn(&engine, &mut session, "hola de nuevo", None);
        assert!(first.user_message.id < first.bot_message.id);
        assert!(first.bot_message.id < second.user_message.id);
        assert!(second.user_message.id < second.bot_message.id);
    }

    #[test]
    fn welcome_message_personalizes_when_profile_exists() {
        let profile = profile();
        assert!(ChatEngine::welcome_message(Some(&profile)).contains("¡Hola Ana!"));
        assert!(ChatEngine::welcome_message(None).starts_with("¡Hola! 🌙"));
    }
}
