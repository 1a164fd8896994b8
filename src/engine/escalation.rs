//! Escalation resolver
//!
//! Renders the profile-dependent response nodes: trusted-adult contact,
//! trusted-adult notification and professional-appointment requests. When
//! no profile (or no emergency contact) is stored, the user gets an
//! explicit registration fallback instead of an error. Side effects fire
//! only on the `confirm_*` actions; the paired consent prompt offers a
//! cancel option routing to the neutral general-support response.

use chrono::{DateTime, Datelike, Utc};

use crate::conversation::MessageOption;
use crate::flows::EscalationAction;
use crate::storage::UserProfile;

use super::{NotificationKind, Notifier};

/// Resolved escalation text plus any consent options to present.
pub struct EscalationOutcome {
    pub text: String,
    pub options: Vec<MessageOption>,
}

impl EscalationOutcome {
    fn terminal(text: String) -> Self {
        Self {
            text,
            options: Vec::new(),
        }
    }
}

const CONTACT_FALLBACK: &str = "Para contactar a un adulto de confianza, primero necesitas registrar uno.\n\nPuedes hacerlo en 'Configuración' → 'Gestión de Cuenta'.\n\nMientras tanto, estoy aquí para ti. ¿Quieres explorar otras opciones de apoyo?";

const NOTIFY_FALLBACK: &str = "Para contactar a un adulto de confianza, primero necesitas registrar uno en la app.\n\nPuedes hacerlo desde la sección 'Configuración' → 'Gestión de Cuenta'.\n\nMientras tanto, ¿hay algo más en lo que pueda ayudarte?";

const APPOINTMENT_FALLBACK: &str = "Para solicitar un turno profesional, necesitas estar registrado en la app.\n\nPuedes registrarte desde la pantalla de inicio.\n\n¿Hay algo más en lo que pueda ayudarte mientras tanto?";

pub fn resolve(
    action: EscalationAction,
    profile: Option<&UserProfile>,
    now: DateTime<Utc>,
    notifier: &dyn Notifier,
) -> EscalationOutcome {
    match action {
        EscalationAction::ContactAdult => match profile.filter(|p| p.has_emergency_contact()) {
            Some(profile) => EscalationOutcome::terminal(contact_adult_text(profile)),
            None => EscalationOutcome::terminal(CONTACT_FALLBACK.to_string()),
        },
        EscalationAction::NotifyTrustedAdult => match profile.filter(|p| p.has_emergency_contact())
        {
            Some(profile) => EscalationOutcome {
                text: notify_trusted_adult_text(profile),
                options: consent_options(
                    "confirm_notify_adult",
                    "✅ Sí, preparar contacto",
                    "cancel_notify",
                ),
            },
            None => EscalationOutcome::terminal(NOTIFY_FALLBACK.to_string()),
        },
        EscalationAction::ConfirmNotifyAdult => match profile.filter(|p| p.has_emergency_contact())
        {
            Some(profile) => {
                notifier.notify(
                    &format!(
                        "Se ha preparado el contacto con {}. Por favor comunícate con esta persona lo antes posible.",
                        profile.emergency_contact_name
                    ),
                    NotificationKind::Success,
                );
                EscalationOutcome::terminal(confirm_notify_text(profile))
            }
            // Confirm is only offered when a contact exists; absorb anyway.
            None => EscalationOutcome::terminal(NOTIFY_FALLBACK.to_string()),
        },
        EscalationAction::RequestAppointment => match profile.filter(|p| p.is_registered()) {
            Some(profile) => EscalationOutcome {
                text: appointment_request_text(profile, now),
                options: consent_options(
                    "confirm_appointment",
                    "✅ Sí, enviar solicitud",
                    "cancel_appointment",
                ),
            },
            None => EscalationOutcome::terminal(APPOINTMENT_FALLBACK.to_string()),
        },
        EscalationAction::ConfirmAppointment => match profile.filter(|p| p.is_registered()) {
            Some(profile) => {
                notifier.notify(
                    "Solicitud de turno enviada exitosamente. Recibirás respuesta en las próximas 48 horas.",
                    NotificationKind::Success,
                );
                EscalationOutcome::terminal(confirm_appointment_text(profile))
            }
            None => EscalationOutcome::terminal(APPOINTMENT_FALLBACK.to_string()),
        },
    }
}

fn consent_options(confirm_action: &str, confirm_label: &str, cancel_id: &str) -> Vec<MessageOption> {
    vec![
        MessageOption {
            id: confirm_action.to_string(),
            label: confirm_label.to_string(),
            action: confirm_action.to_string(),
        },
        MessageOption {
            id: cancel_id.to_string(),
            label: "❌ Cancelar".to_string(),
            action: "general_support".to_string(),
        },
    ]
}

fn contact_adult_text(profile: &UserProfile) -> String {
    format!(
        "Contactar a un adulto de confianza es una decisión valiente y correcta.\n\nTienes registrado a:\n👤 {} ({})\n📱 {}\n\nPuedes llamarle directamente ahora, o si prefieres, puedo ayudarte a preparar qué decirle.\n\nRecuerda que pedir ayuda es un acto de fortaleza. 💪",
        profile.emergency_contact_name,
        profile.emergency_contact_relation,
        profile.emergency_contact_phone,
    )
}

fn notify_trusted_adult_text(profile: &UserProfile) -> String {
    format!(
        "Perfecto. Veo que tienes registrado a {} ({}) como tu contacto de confianza.\n\n📱 Teléfono: {}\n\n¿Quieres que te ayude a preparar qué decirle? O puedes llamarle directamente.\n\nRecuerda: Pedir ayuda es un acto de valentía. 💪",
        profile.emergency_contact_name,
        profile.emergency_contact_relation,
        profile.emergency_contact_phone,
    )
}

fn confirm_notify_text(profile: &UserProfile) -> String {
    format!(
        "✅ Contacto preparado exitosamente.\n\nSi prefieres, puedes llamar directamente a {} al {}.\n\n¿Hay algo específico que te gustaría compartir con esta persona? Puedo ayudarte a organizar tus pensamientos.",
        profile.emergency_contact_name, profile.emergency_contact_phone,
    )
}

fn appointment_request_text(profile: &UserProfile, now: DateTime<Utc>) -> String {
    // Request date the way the app renders es-AR dates: d/m/yyyy.
    let date = format!("{}/{}/{}", now.day(), now.month(), now.year());
    format!(
        "Aunque estamos en fase beta, puedo ayudarte a iniciar el proceso para obtener atención profesional.\n\n📋 SOLICITUD DE TURNO - APOYO PSICOLÓGICO\n\nEstudiante: {} {}\nFecha de solicitud: {}\nMotivo principal: Necesidad de apoyo emocional\nContacto: {}\n\nAl confirmar, esta solicitud llegará al departamento de bienestar estudiantil. Te contactarán en un plazo máximo de 48 horas para coordinar tu primera sesión.\n\nConsultar con un psicólogo es como ir al médico cuando tienes fiebre: es cuidado preventivo de tu salud mental. Todos necesitamos apoyo profesional en algún momento. 🌱\n\n¿Deseas confirmar el envío de esta solicitud?",
        profile.first_name, profile.last_name, date, profile.email,
    )
}

fn confirm_appointment_text(profile: &UserProfile) -> String {
    format!(
        "✅ Solicitud enviada correctamente.\n\nTu solicitud de atención psicológica ha sido registrada. El equipo de bienestar estudiantil se pondrá en contacto contigo a través de {} en las próximas 48 horas.\n\nMientras esperas:\n• Mantén comunicación con personas de confianza\n• Practica técnicas de autocuidado\n• Si la situación empeora, contacta líneas de emergencia\n\nRecuerda: este es un paso importante en tu bienestar. 💚",
        profile.email,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::RecordingNotifier;

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

    #[test]
    fn notify_without_profile_falls_back_without_side_effect() {
        let notifier = RecordingNotifier::default();
        let outcome = resolve(
            EscalationAction::NotifyTrustedAdult,
            None,
            Utc::now(),
            &notifier,
        );
        assert_eq!(outcome.text, NOTIFY_FALLBACK);
        assert!(outcome.options.is_empty());
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn notify_with_profile_offers_consent_pair() {
        let notifier = RecordingNotifier::default();
        let profile = profile();
        let outcome = resolve(
            EscalationAction::NotifyTrustedAdult,
            Some(&profile),
            Utc::now(),
            &notifier,
        );
        assert!(outcome.text.contains("María Pérez"));
        assert!(outcome.text.contains("Madre"));
        assert_eq!(outcome.options.len(), 2);
        assert_eq!(outcome.options[0].action, "confirm_notify_adult");
        assert_eq!(outcome.options[1].action, "general_support");
        // Consent prompt alone fires nothing.
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn confirm_notify_fires_exactly_one_notification() {
        let notifier = RecordingNotifier::default();
        let profile = profile();
        let outcome = resolve(
            EscalationAction::ConfirmNotifyAdult,
            Some(&profile),
            Utc::now(),
            &notifier,
        );
        assert!(outcome.text.contains("+54 11 5555-0000"));
        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, NotificationKind::Success);
    }

    #[test]
    fn appointment_request_embeds_name_date_and_email() {
        let notifier = RecordingNotifier::default();
        let profile = profile();
        let now = DateTime::parse_from_rfc3339("2026-08-26T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let outcome = resolve(
            EscalationAction::RequestAppointment,
            Some(&profile),
            now,
            &notifier,
        );
        assert!(outcome.text.contains("Ana Pérez"));
        assert!(outcome.text.contains("26/8/2026"));
        assert!(outcome.text.contains("a@b.com"));
        assert_eq!(outcome.options.len(), 2);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn confirm_appointment_embeds_email_and_notifies_once() {
        let notifier = RecordingNotifier::default();
        let profile = profile();
        let outcome = resolve(
            EscalationAction::ConfirmAppointment,
            Some(&profile),
            Utc::now(),
            &notifier,
        );
        assert!(outcome.text.contains("a@b.com"));
        assert!(outcome.options.is_empty());
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn contact_without_emergency_contact_uses_fallback() {
        let notifier = RecordingNotifier::default();
        let mut profile = profile();
        profile.emergency_contact_name.clear();
        let outcome = resolve(
            EscalationAction::ContactAdult,
            Some(&profile),
            Utc::now(),
            &notifier,
        );
        assert_eq!(outcome.text, CONTACT_FALLBACK);
    }
}
