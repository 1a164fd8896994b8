//! Conversation flow registry
//!
//! A Flow is a self-contained conversation subtree for one emotion
//! category: the keyword list that triggers it, an initial prompt with
//! branching options, and a map from option action to follow-up response.
//! Flows are pure data; the routing logic lives in the engine.

mod data;

pub use data::{
    CLOSING_REMARK_BREAKUP, CLOSING_REMARK_DELAY_MS, CLOSING_REMARK_GENERIC, GENERAL_RESPONSES,
    NOT_WORKING_KEYWORDS, QUICK_RESPONSES,
};

use crate::conversation::{EmotionCategory, MessageOption};

/// A selectable branch in flow data. Mirrors [`MessageOption`] but lives in
/// static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOption {
    pub id: &'static str,
    pub label: &'static str,
    pub action: &'static str,
}

impl FlowOption {
    pub fn to_message_option(self) -> MessageOption {
        MessageOption {
            id: self.id.to_string(),
            label: self.label.to_string(),
            action: self.action.to_string(),
        }
    }
}

/// Cross-cutting actions whose text is rendered from the stored user
/// profile rather than taken from flow data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationAction {
    ContactAdult,
    NotifyTrustedAdult,
    ConfirmNotifyAdult,
    RequestAppointment,
    ConfirmAppointment,
}

impl EscalationAction {
    pub fn from_action_id(action_id: &str) -> Option<Self> {
        match action_id {
            "contact_adult" => Some(Self::ContactAdult),
            "notify_trusted_adult" => Some(Self::NotifyTrustedAdult),
            "confirm_notify_adult" => Some(Self::ConfirmNotifyAdult),
            "request_professional_appointment" => Some(Self::RequestAppointment),
            "confirm_appointment" => Some(Self::ConfirmAppointment),
            _ => None,
        }
    }
}

/// What a response node carries: canned text, or a profile-dependent
/// escalation whose text the resolver renders at turn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBody {
    Static(&'static str),
    Escalation(EscalationAction),
}

/// A node reached by selecting an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowResponse {
    pub body: ResponseBody,
    pub options: &'static [FlowOption],
    /// Informational hint carried over from the script data; no behavior
    /// is attached to it beyond normal turn handling.
    pub follow_up: bool,
}

impl FlowResponse {
    pub const fn text(text: &'static str) -> Self {
        Self {
            body: ResponseBody::Static(text),
            options: &[],
            follow_up: false,
        }
    }

    pub const fn with_options(text: &'static str, options: &'static [FlowOption]) -> Self {
        Self {
            body: ResponseBody::Static(text),
            options,
            follow_up: false,
        }
    }

    pub const fn with_follow_up(text: &'static str) -> Self {
        Self {
            body: ResponseBody::Static(text),
            options: &[],
            follow_up: true,
        }
    }

    pub const fn escalation(action: EscalationAction) -> Self {
        Self {
            body: ResponseBody::Escalation(action),
            options: &[],
            follow_up: false,
        }
    }
}

/// Entry prompt of a flow
#[derive(Debug, Clone, Copy)]
pub struct FlowNode {
    pub text: &'static str,
    pub options: &'static [FlowOption],
}

/// One emotion category's conversation subtree
#[derive(Debug, Clone, Copy)]
pub struct Flow {
    pub keywords: &'static [&'static str],
    pub initial: FlowNode,
    pub responses: &'static [(&'static str, FlowResponse)],
}

/// Pure static-table lookup; every category in the closed set is present.
pub fn flow(category: EmotionCategory) -> &'static Flow {
    match category {
        EmotionCategory::Breakup => &data::BREAKUP,
        EmotionCategory::Frustration => &data::FRUSTRATION,
        EmotionCategory::Anxiety => &data::ANXIETY,
        EmotionCategory::Sadness => &data::SADNESS,
        EmotionCategory::Tiredness => &data::TIREDNESS,
    }
}

/// Look up a response node by action id. The tables are small enough that a
/// linear scan beats a map here.
pub fn resolve_response(flow: &'static Flow, action_id: &str) -> Option<&'static FlowResponse> {
    flow.responses
        .iter()
        .find(|(id, _)| *id == action_id)
        .map(|(_, response)| response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_flow_with_keywords_and_options() {
        for category in EmotionCategory::ALL {
            let flow = flow(category);
            assert!(!flow.keywords.is_empty(), "{category:?} has no keywords");
            assert!(!flow.initial.text.is_empty());
            assert!(!flow.initial.options.is_empty());
        }
    }

    #[test]
    fn flow_lookup_is_idempotent() {
        let a = flow(EmotionCategory::Anxiety);
        let b = flow(EmotionCategory::Anxiety);
        assert!(std::ptr::eq(a, b));
    }

    /// Every action referenced by any option must resolve within its flow,
    /// unless it is one of the cross-cutting escalation actions (or the
    /// neutral `general_support` exit) handled directly by the orchestrator.
    #[test]
    fn registry_is_complete() {
        for category in EmotionCategory::ALL {
            let flow = flow(category);
            let all_options = flow
                .initial
                .options
                .iter()
                .chain(flow.responses.iter().flat_map(|(_, r)| r.options.iter()));

            for option in all_options {
                if EscalationAction::from_action_id(option.action).is_some()
                    || option.action == "general_support"
                {
                    continue;
                }
                assert!(
                    resolve_response(flow, option.action).is_some(),
                    "{category:?}: option {} points at missing action {}",
                    option.id,
                    option.action
                );
            }
        }
    }

    #[test]
    fn option_ids_are_unique_within_their_node() {
        for category in EmotionCategory::ALL {
            let flow = flow(category);
            let nodes = std::iter::once(flow.initial.options)
                .chain(flow.responses.iter().map(|(_, r)| r.options));
            for options in nodes {
                for (i, a) in options.iter().enumerate() {
                    for b in &options[i + 1..] {
                        assert_ne!(a.id, b.id, "duplicate option id in {category:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn anxiety_initial_matches_script() {
        let flow = flow(EmotionCategory::Anxiety);
        let ids: Vec<&str> = flow.initial.options.iter().map(|o| o.id).collect();
        assert_eq!(
            ids,
            ["anxiety_breathing", "anxiety_thoughts", "anxiety_identify"]
        );
    }

    #[test]
    fn escalation_nodes_carry_no_canned_text() {
        let flow = flow(EmotionCategory::Anxiety);
        for action_id in ["contact_adult", "notify_trusted_adult", "request_professional_appointment"] {
            let response = resolve_response(flow, action_id).expect(action_id);
            assert!(matches!(response.body, ResponseBody::Escalation(_)));
        }
    }
}
