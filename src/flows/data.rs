//! Luna's script tables
//!
//! Keyword lists, entry prompts, branch responses, quick responses and the
//! general fallback pool, kept as plain declarative data so each branch can
//! be tested without running the orchestrator. All user-facing text is the
//! app's Spanish script.

use super::{EscalationAction, Flow, FlowNode, FlowOption, FlowResponse};

/// Phrases indicating that a suggested technique is not helping. Checked
/// independently of emotion classification.
pub static NOT_WORKING_KEYWORDS: &[&str] = &[
    "no funciona",
    "no me funciona",
    "no está funcionando",
    "sigo igual",
    "sigo ansioso",
    "sigo ansiosa",
    "no ayuda",
    "no sirve",
    "peor",
    "nada funciona",
    "todo es inútil",
    "es inútil",
];

/// Breakup vocabulary. Checked before every other category because these
/// phrases overlap with generic sadness vocabulary and must not be shadowed.
const BREAKUP_KEYWORDS: &[&str] = &[
    "me dejó",
    "me dejo",
    "terminamos",
    "rompimos",
    "ruptura",
    "separación",
    "mi novia",
    "mi novio",
    "mi pareja",
    "mi ex",
    "enamorado",
    "enamorada",
    "infidelidad",
    "engañó",
    "engaño",
    "traición",
    "ya no me quiere",
    "me fue infiel",
    "acabamos",
    "corte",
    "termino",
    "terminó",
];

pub(super) static FRUSTRATION: Flow = Flow {
    keywords: &[
        "frustrado",
        "frustrada",
        "frustración",
        "desaprobé",
        "desaprobe",
        "reprobo",
        "reprobé",
        "suspendi",
        "suspendí",
        "mal resultado",
        "mala nota",
        "me fue mal",
        "enojado",
        "enojada",
        "molesto",
        "molesta",
    ],
    initial: FlowNode {
        text: "Entiendo que debe ser frustrante esforzarte y no obtener los resultados esperados. Es normal sentirse así. ¿Te gustaría:",
        options: &[
            FlowOption { id: "frustration_advice", label: "a) Recibir consejos para manejar esta frustración", action: "frustration_advice" },
            FlowOption { id: "frustration_strategies", label: "b) Estrategias para mejorar next time", action: "frustration_strategies" },
            FlowOption { id: "frustration_vent", label: "c) Solo desahogarme un poco más", action: "frustration_vent" },
            FlowOption { id: "frustration_adult", label: "d) Hablar con un adulto de confianza", action: "frustration_adult" },
        ],
    },
    responses: &[
        ("frustration_advice", FlowResponse::text(
            "Te sugiero:\n• Respira profundamente 3 veces antes de reaccionar\n• Recuerda que un resultado no define tu capacidad\n• Divide el problema en partes más pequeñas\n• Habla con tu profesor sobre qué puedes mejorar\n• Premia tu esfuerzo, no solo el resultado\n\n¿Qué sientes que fue la causa de esto?",
        )),
        ("frustration_strategies", FlowResponse::text(
            "Para próximas evaluaciones:\n• Crea un calendario de estudio realista\n• Practica con ejercicios similares al examen\n• Enseña el tema a alguien más (afianza tu aprendizaje)\n• Estudia en intervalos de 25-30 min con descansos\n• Identifica exactamente qué temas se te dificultan\n\n¿Te gustaría ayuda para armar un plan de estudio?",
        )),
        ("frustration_vent", FlowResponse::text(
            "Este es tu espacio seguro 💙\n\nPodés contarme todo lo que necesites. A veces simplemente expresar lo que sentimos ya nos alivia un poco.\n\nTe escucho sin juzgar.",
        )),
        ("frustration_adult", FlowResponse::text(
            "Es una excelente decisión buscar apoyo de un adulto de confianza. Hablar con alguien que te conoce puede darte una perspectiva diferente y el apoyo que necesitás.\n\nPodés revisar tu lista de contactos de confianza en la sección 'Conexiones' de la app. 🤝",
        )),
    ],
};

pub(super) static ANXIETY: Flow = Flow {
    keywords: &[
        "ansioso",
        "ansiosa",
        "ansiedad",
        "estres",
        "estrés",
        "nervioso",
        "nerviosa",
        "preocupado",
        "preocupada",
        "miedo",
        "panico",
        "pánico",
        "agobiado",
        "agobiada",
        "abrumado",
        "abrumada",
    ],
    initial: FlowNode {
        text: "Siento que estés experimentando ansiedad. Tu cuerpo te está alertando. ¿Quieres probar:",
        options: &[
            FlowOption { id: "anxiety_breathing", label: "a) Un ejercicio de respiración", action: "anxiety_breathing" },
            FlowOption { id: "anxiety_thoughts", label: "b) Técnica para calmar pensamientos", action: "anxiety_thoughts" },
            FlowOption { id: "anxiety_identify", label: "c) Identificar qué específicamente me preocupa", action: "anxiety_identify" },
        ],
    },
    responses: &[
        ("anxiety_breathing", FlowResponse::with_follow_up(
            "Vamos a respirar juntos:\n\n🌬️ Inhala por 4 segundos\n⏸️ Mantén 7 segundos\n💨 Exhala por 8 segundos\n\nRepite 3 veces\n\n¿Cómo te sientes después?",
        )),
        ("anxiety_thoughts", FlowResponse::text(
            "Usemos la técnica 5-4-3-2-1:\n\nNombra:\n👁️ 5 cosas que ves alrededor\n🤚 4 cosas que puedes tocar\n👂 3 sonidos que escuchas\n👃 2 aromas que percibes\n👅 1 sabor en tu boca\n\nEsta técnica te ayuda a conectarte con el presente.\n\n¿Notas alguna diferencia?",
        )),
        ("anxiety_identify", FlowResponse::text(
            "Identificar qué nos preocupa es el primer paso para manejarlo.\n\nContame: ¿qué es lo que específicamente te está generando ansiedad? Podemos trabajar juntos para ver cómo abordarlo.\n\nRecordá: nombrar lo que sentimos nos da poder sobre ello. 💪",
        )),
        // Reached when the user reports that breathing is not helping
        ("anxiety_not_working", FlowResponse::with_options(
            "Entiendo que a veces los ejercicios de respiración pueden no ser suficientes cuando la ansiedad es muy intensa. Eso es completamente normal. ¿Qué tal si probamos otras aproximaciones?",
            &[
                FlowOption { id: "anxiety_physical_anchor", label: "a) Técnica de anclaje físico más intensa", action: "anxiety_physical_anchor" },
                FlowOption { id: "anxiety_cognitive_distraction", label: "b) Distracción cognitiva guiada", action: "anxiety_cognitive_distraction" },
                FlowOption { id: "anxiety_physical_expression", label: "c) Expresión física de la ansiedad", action: "anxiety_physical_expression" },
                FlowOption { id: "anxiety_escalation", label: "d) Escalación a apoyo humano", action: "anxiety_escalation" },
            ],
        )),
        ("anxiety_physical_anchor", FlowResponse::text(
            "Vamos a enfocarnos en sensaciones físicas fuertes:\n\n❄️ Toma un cubo de hielo y sostenlo por 30 segundos\n💧 Salpícate agua fría en la cara y muñecas\n🍋 Come algo con sabor muy intenso (limón, jengibre)\n✊ Aprieta fuerte una pelota antiestrés o tus puños\n\n¿Alguna de estas te llama la atención para probar?",
        )),
        ("anxiety_cognitive_distraction", FlowResponse::with_options(
            "Cuando la mente no se calma, a veces necesitamos 'engañarla' con tareas cognitivas. Elige una opción:",
            &[
                FlowOption { id: "distraction_categories", label: "🗂️ Categorías mentales", action: "distraction_categories" },
                FlowOption { id: "distraction_math", label: "🔢 Matemática simple", action: "distraction_math" },
                FlowOption { id: "distraction_description", label: "🔍 Descripción detallada", action: "distraction_description" },
            ],
        )),
        ("distraction_categories", FlowResponse::text(
            "Nombra:\n\n🌎 5 países que empiecen con 'C'\n🐋 4 animales marinos\n⚽ 3 deportes olímpicos\n🍕 2 ingredientes de una pizza\n🎬 1 película que te haga reír\n\nTómate tu tiempo. No hay apuro.",
        )),
        ("distraction_math", FlowResponse::text(
            "Vamos a hacer cálculos fáciles (puedes hacerlos mentalmente o escribirlos):\n\n• 17 + 24 = ?\n• 50 - 28 = ?\n• 6 × 7 = ?\n• 81 ÷ 9 = ?\n\n¿Te ayudó a distraer un poco la mente?",
        )),
        ("distraction_description", FlowResponse::text(
            "Describe un objeto cercano con todo detalle:\n\n🎨 Color, textura, forma, tamaño\n🔧 Para qué sirve\n📦 De qué material está hecho\n⚖️ Cuánto pesa aproximadamente\n\nTómate unos minutos para observarlo detenidamente.",
        )),
        ("anxiety_physical_expression", FlowResponse::with_options(
            "A veces la ansiedad necesita salir físicamente. Si estás en un espacio privado, prueba:",
            &[
                FlowOption { id: "physical_release", label: "💪 Ejercicios de liberación", action: "physical_release" },
                FlowOption { id: "creative_expression", label: "🎨 Expresión creativa", action: "creative_expression" },
            ],
        )),
        ("physical_release", FlowResponse::text(
            "Ejercicios de liberación física:\n\n🤲 Sacude tus manos y brazos vigorosamente por 1 minuto\n🦘 Salta en el lugar 20 veces\n😤 Grita en una almohada\n💃 Baila una canción moviendo todo el cuerpo\n🏃 Corre en el lugar por 2 minutos\n\nElegí el que te parezca más cómodo y probalo.",
        )),
        ("creative_expression", FlowResponse::text(
            "Expresión creativa para liberar ansiedad:\n\n✏️ Dibuja garabatos agresivos en un papel\n📝 Escribe todo lo que sientes y luego rompe el papel\n🧶 Moldea plastilina o arcilla apretando fuerte\n\nNo necesita ser bonito, solo necesita SALIR.",
        )),
        ("anxiety_escalation", FlowResponse::with_options(
            "Veo que la ansiedad está siendo muy intensa y que las técnicas no están siendo efectivas. En estos casos, es importante contar con apoyo humano real. ¿Te gustaría:",
            &[
                FlowOption { id: "contact_adult", label: "👤 Contactar adulto de confianza inmediatamente", action: "contact_adult" },
                FlowOption { id: "crisis_line", label: "📞 Línea de crisis profesional", action: "crisis_line" },
                FlowOption { id: "companion_until_pass", label: "🤝 Acompañamiento hasta que pase", action: "companion_until_pass" },
            ],
        )),
        ("contact_adult", FlowResponse::escalation(EscalationAction::ContactAdult)),
        ("crisis_line", FlowResponse::text(
            "Te comparto números de apoyo profesional gratuito:\n\n📞 Línea 144 (Atención a víctimas de violencia)\n📞 Línea de la Esperanza: 0800-345-1435\n📞 Centro de Asistencia al Suicida: (011) 5275-1135\n\nEstos servicios están disponibles las 24 horas y son completamente confidenciales.\n\nPor favor, llama ahora mismo si:\n• Tienes pensamientos de hacerte daño\n• Sientes que no puedes mantenerte seguro/a\n• La desesperación es abrumadora\n\nNo estás solo/a. Hay personas entrenadas para ayudarte.",
        )),
        ("companion_until_pass", FlowResponse::text(
            "Mientras decides, puedo quedarme aquí acompañándote.\n\nLa ansiedad SIEMPRE pasa, aunque ahora no lo parezca. Es como una ola: sube, alcanza su pico, y luego baja.\n\n¿Quieres que hablemos de algo específico para distraernos, o prefieres que simplemente esté aquí contigo?",
        )),
        ("anxiety_resistant", FlowResponse::with_options(
            "Escucho tu frustración y es comprensible. Cuando estamos en un estado emocional intenso, nuestro cerebro no responde como normalmente.\n\nNo es que TÚ no funciones, es que la ANSIEDAD está ocupando demasiado espacio.\n\n¿Podemos intentar algo diferente? En lugar de 'combatir' la ansiedad, ¿qué tal si simplemente la observamos sin juzgar?",
            &[
                FlowOption { id: "anxiety_observe", label: "🌊 Observar la ansiedad como una ola", action: "anxiety_observe" },
                FlowOption { id: "anxiety_safety_plan", label: "🛡️ Crear un compromiso de seguridad", action: "anxiety_safety_plan" },
                FlowOption { id: "professional_help_options", label: "🏥 Necesito ayuda profesional", action: "professional_help_options" },
            ],
        )),
        ("anxiety_observe", FlowResponse::text(
            "Técnica de Observación Curiosa:\n\nImagina que la ansiedad es una ola en el mar. No podemos detenerla, pero podemos aprender a surfearla.\n\nSolo observa sin juzgar:\n• ¿Dónde la sientes en tu cuerpo?\n• ¿Tiene color, forma, temperatura?\n• ¿Viene en picos o es constante?\n\nSin intentar cambiarla, solo observando como un científico curioso.\n\n¿Qué notas?",
        )),
        ("anxiety_safety_plan", FlowResponse::text(
            "¿Puedes hacerme una promesa?\n\nProméteme que:\n✓ No harás nada que pueda lastimarte\n✓ Contactarás a alguien si la ansiedad empeora\n✓ Recordarás que esto PASARÁ, aunque ahora no lo creas\n\nEstaré aquí contigo. No necesitas hacer o decir nada. Solo recuerda que no estás solo/a en esto.",
        )),
        ("professional_help_options", FlowResponse::with_options(
            "Veo que has probado varias estrategias y sigues necesitando apoyo. Es importante que hables con un profesional de salud mental. Te ayudo a conectar con alguien:",
            &[
                FlowOption { id: "notify_trusted_adult", label: "👤 Contactar adulto de confianza registrado", action: "notify_trusted_adult" },
                FlowOption { id: "request_professional_appointment", label: "📅 Solicitar turno con profesional", action: "request_professional_appointment" },
                FlowOption { id: "immediate_emergency_contact", label: "🚨 Contacto inmediato - Emergencia", action: "immediate_emergency_contact" },
                FlowOption { id: "safety_plan_immediate", label: "🛡️ Plan de seguridad inmediato", action: "safety_plan_immediate" },
            ],
        )),
        ("notify_trusted_adult", FlowResponse::escalation(EscalationAction::NotifyTrustedAdult)),
        ("request_professional_appointment", FlowResponse::escalation(EscalationAction::RequestAppointment)),
        ("immediate_emergency_contact", FlowResponse::text(
            "Si sientes que esto es una EMERGENCIA, aquí tienes contacto directo:\n\n🚨 LÍNEAS DE EMERGENCIA:\n\n📞 Emergencias: 911\n📞 Línea Nacional de Prevención del Suicidio: 135 (Atención gratuita 24/7)\n📞 Centro de Asistencia al Suicida: (011) 5275-1135\n💬 Chat Online: www.lineadevida.org\n\nPor favor, llama AHORA MISMO si:\n• Tienes pensamientos de hacerte daño\n• Sientes que no puedes mantenerte seguro/a\n• La desesperación es abrumadora\n\n⚠️ No estás solo/a. Hay personas entrenadas para ayudarte en este momento.",
        )),
        ("safety_plan_immediate", FlowResponse::text(
            "Mientras esperas contacto profesional, preparemos tu plan de seguridad:\n\n📋 PLAN DE SEGURIDAD EN 3 PASOS:\n\n1️⃣ CONTACTOS DE EMERGENCIA\n¿Tienes estos números guardados en tu teléfono?\n• 911 - Emergencias\n• 135 - Línea de Prevención\n• Tu adulto de confianza\n\n2️⃣ ESPACIOS SEGUROS\n¿Dónde podrías ir si necesitas calmarte?\n• Casa de familiar\n• Patio de la escuela\n• Biblioteca\n• Otro lugar que te calme\n\n3️⃣ PERSONAS CERCANAS\n¿Quién está físicamente cerca ahora a quien podrías acudir?\n\nRecuerda: Pedir ayuda es un acto de valentía. 💪",
        )),
    ],
};

pub(super) static BREAKUP: Flow = Flow {
    keywords: BREAKUP_KEYWORDS,
    initial: FlowNode {
        text: "Lamento profundamente que estés pasando por esta ruptura. El dolor de una separación amorosa es muy real y duele mucho. Es completamente normal sentirse devastado en estos momentos.\n\n¿En qué aspecto necesitas más apoyo hoy?",
        options: &[
            FlowOption { id: "breakup_vent", label: "a) 💔 Desahogar el dolor", action: "breakup_vent" },
            FlowOption { id: "breakup_healing", label: "b) 🔄 Estrategias para sanar", action: "breakup_healing" },
            FlowOption { id: "breakup_identity", label: "c) 📝 Reconstruir mi identidad", action: "breakup_identity" },
            FlowOption { id: "breakup_support", label: "d) 👥 Apoyo humano", action: "breakup_support" },
            FlowOption { id: "breakup_plan", label: "e) 🎯 Plan de superación", action: "breakup_plan" },
        ],
    },
    responses: &[
        ("breakup_vent", FlowResponse::text(
            "Cuéntame todo lo que necesites expresar. Estoy aquí para escucharte sin juzgar.\n\n💙 Algunas cosas que podrías querer compartir:\n\n• ¿Qué es lo que más duele de esta situación?\n• ¿Cómo fue la conversación cuando terminaron?\n• ¿Hay algo que te gustaría haber dicho?\n• ¿Qué es lo que más extrañas?\n\nNo hay respuestas correctas o incorrectas. Solo sentimientos válidos. Te escucho. 💜",
        )),
        ("breakup_healing", FlowResponse::text(
            "Te ayudo con técnicas para estos primeros días difíciles:\n\n💔 PARA EL DOLOR AGUDO:\n• Permite que las lágrimas fluyan - es parte de la sanación\n• No revises sus redes sociales (bloquéalo temporalmente si es necesario)\n• Guarda los objetos que te recuerden a esa persona\n\n🧠 PARA PENSAMIENTOS REPETITIVOS:\n• Establece un 'horario de duelo' - 15 min al día para pensar en la ruptura\n• Cuando venga el pensamiento fuera de ese horario, escríbelo y déjalo para después\n• Actividad física intensa ayuda a interrumpir el ciclo mental\n\n😴 RUTINA DE AUTOCUIDADO:\n• Mantén horarios de sueño regulares\n• Come aunque no tengas ganas\n• Evita alcohol o sustancias\n• Sal al aire libre 20 minutos diarios\n\n¿Por cuál de estas técnicas quieres empezar?",
        )),
        ("breakup_identity", FlowResponse::text(
            "Después de una relación, es normal sentirse perdido/a. Vamos a redescubrirte:\n\n🌟 RECONEXIÓN CONTIGO:\n• ¿Qué actividades disfrutabas antes de la relación que dejaste?\n• ¿Qué planes tenías para vos que quedaron en pausa?\n• ¿Qué aspectos de tu personalidad no podías expresar en la relación?\n\n🎯 METAS PERSONALES:\nEscribí 3 cosas que SIEMPRE quisiste hacer:\n1. Algo pequeño (esta semana)\n2. Algo mediano (este mes)\n3. Algo grande (este año)\n\n💪 FORTALEZA PERSONAL:\nCompletá: 'Soy capaz de...'\nCompletá: 'Me siento orgulloso/a de...'\nCompletá: 'Quiero ser una persona que...'\n\nNo necesitás a esa persona para ser completo/a. Ya lo sos. 💚",
        )),
        ("breakup_support", FlowResponse::with_options(
            "En momentos de ruptura, es cuando más necesitamos nuestra red de apoyo.",
            &[
                FlowOption { id: "notify_trusted_adult", label: "👤 Contactar adulto de confianza", action: "notify_trusted_adult" },
                FlowOption { id: "breakup_friends", label: "👥 Hablar con amigos", action: "breakup_friends" },
                FlowOption { id: "breakup_professional", label: "🏥 Considerar ayuda profesional", action: "breakup_professional" },
            ],
        )),
        ("breakup_friends", FlowResponse::text(
            "Los amigos son fundamentales en una ruptura:\n\n👥 CONSEJOS PARA APOYARTE EN AMIGOS:\n• Contales cómo te sentís honestamente\n• Pediles que te distraigan cuando necesites\n• Dejá que te acompañen sin presionar\n• No tengas vergüenza de llorar con ellos\n\n⚠️ COSAS A EVITAR:\n• Hablar MAL de tu ex constantemente (está bien al principio, pero no eternamente)\n• Stalkear juntos sus redes sociales\n• Compararte con su nueva relación si la hay\n\n💡 IDEAS:\n• Planificá salidas nuevas (cine, caminatas, etc.)\n• Retomá hobbies en grupo\n• Conocé gente nueva en contextos sociales\n\nTus amigos quieren ayudarte. Déjalos. 🤝",
        )),
        ("breakup_professional", FlowResponse::text(
            "A veces una ruptura puede dejar heridas más profundas que requieren apoyo profesional.\n\n🏥 CONSIDERA TERAPIA SI:\n• La tristeza persiste más de 2 meses intensamente\n• Afecta tu rendimiento académico o laboral\n• Tienes pensamientos de hacerte daño\n• No puedes dormir o comer regularmente\n• Sientes que no puedes funcionar normalmente\n\nUn psicólogo puede ayudarte a:\n✓ Procesar el duelo de manera saludable\n✓ Identificar patrones en tus relaciones\n✓ Trabajar tu autoestima\n✓ Desarrollar habilidades de afrontamiento\n\n¿Te gustaría información sobre cómo acceder a ayuda profesional?",
        )),
        ("breakup_plan", FlowResponse::text(
            "Plan de superación paso a paso:\n\n📅 SEMANA 1-2: SUPERVIVENCIA\n• Permitite sentir el dolor\n• Mantén rutinas básicas (comer, dormir)\n• Contacto mínimo o nulo con tu ex\n• Apoyo de amigos/familia diario\n\n📅 SEMANA 3-4: PROCESAMIENTO\n• Escribe una carta que nunca enviarás\n• Haz lista de cosas que NO funcionaban en la relación\n• Retoma 1 actividad que disfrutabas\n• Ejercicio físico 3 veces/semana\n\n📅 MES 2-3: RECONSTRUCCIÓN\n• Establece 1 meta personal nueva\n• Conoce gente nueva (sin presión romántica)\n• Reflexiona sobre qué aprendiste\n• Celebra pequeños progresos\n\n📅 MES 4+: CRECIMIENTO\n• Evalúa qué quieres en futuras relaciones\n• Fortalece tu identidad individual\n• Perdónate y perdona (no significa olvidar)\n• Abre tu corazón gradualmente\n\nRecuerda: No hay un tiempo 'correcto'. Avanzá a tu ritmo. 💚\n\n¿En qué fase sientes que estás?",
        )),
    ],
};

pub(super) static SADNESS: Flow = Flow {
    keywords: &[
        "triste",
        "tristeza",
        "deprimido",
        "deprimida",
        "llorar",
        "lloro",
        "vacio",
        "vacío",
        "sin energia",
        "sin energía",
        "desmotivado",
        "desmotivada",
        "mal",
        "terrible",
        "desanimado",
        "desanimada",
        "bajoneado",
        "bajoneada",
    ],
    initial: FlowNode {
        text: "Lamento que estés pasando por esto. Las emociones difíciles son parte de ser humano. ¿Te gustaría:",
        options: &[
            FlowOption { id: "sadness_uplift", label: "a) Algunas ideas para levantar el ánimo", action: "sadness_uplift" },
            FlowOption { id: "sadness_talk", label: "b) Hablar de lo que específicamente me entristece", action: "sadness_talk" },
            FlowOption { id: "sadness_space", label: "c) Un espacio seguro para desahogarme", action: "sadness_space" },
            FlowOption { id: "sadness_relational", label: "d) Es por una relación o amistad", action: "sadness_relational" },
        ],
    },
    responses: &[
        ("sadness_uplift", FlowResponse::text(
            "Pequeñas acciones que pueden ayudar:\n🎵 Escucha tu música favorita\n📝 Escribe 3 cosas por las que estás agradecido hoy\n🚶 Da un paseo breve aunque no tengas ganas\n💛 Haz algo amable por alguien más\n💪 Recuerda un momento donde superaste algo difícil\n\nNo tenés que hacer todo. Elegí solo una cosa que te parezca posible hoy.",
        )),
        ("sadness_talk", FlowResponse::text(
            "Estoy aquí para escucharte 💜\n\nHablar de lo que nos entristece puede ayudarnos a procesarlo mejor. No hay juicios aquí, solo apoyo.\n\nContame: ¿qué es lo que te tiene así?",
        )),
        ("sadness_space", FlowResponse::text(
            "Este es tu espacio seguro 🌈\n\nPodés expresar todo lo que sentís. Llorar está bien. Sentirse triste está bien. Son emociones válidas.\n\nEstá bien no estar bien a veces.\n\nSi necesitás hablar, aquí estoy. Si solo necesitás que alguien esté presente, también estoy aquí. 💙",
        )),
        ("sadness_relational", FlowResponse::with_options(
            "Lamento mucho que estés pasando por esto. El dolor por las relaciones o amistades duele profundamente. Es completamente normal sentirse así cuando alguien importante en nuestra vida se va o la relación cambia.\n\nEn estos momentos difíciles, ¿qué tipo de apoyo necesitas más?",
            &[
                FlowOption { id: "relational_validation", label: "a) Validación y espacio para desahogarme", action: "relational_validation" },
                FlowOption { id: "relational_strategies", label: "b) Estrategias para manejar el dolor emocional", action: "relational_strategies" },
                FlowOption { id: "relational_rebuild", label: "c) Consejos para reconstruir mi bienestar", action: "relational_rebuild" },
                FlowOption { id: "relational_support", label: "d) Conexión con apoyo humano", action: "relational_support" },
            ],
        )),
        ("relational_validation", FlowResponse::text(
            "Cuéntame más. Estoy aquí para escucharte sin juzgar.\n\n💙 Frases importantes para recordar:\n\n• El duelo por una relación es real, aunque otros no lo vean\n• Es natural extrañar a alguien que fue importante en tu vida\n• No estás exagerando - estas pérdidas duelen profundamente\n• Tomó valor compartir esto conmigo\n\nSi querés, podés contarme:\n• ¿Qué es lo que más extrañas de esa persona/relación?\n• ¿Hay algo que te gustaría haber dicho y no pudiste?\n• ¿Cómo te está afectando esto en tu día a día?\n\nTus sentimientos son válidos y importantes. 💜",
        )),
        ("relational_strategies", FlowResponse::text(
            "El dolor emocional duele físicamente también. Te sugiero:\n\n💔 PARA EL DOLOR AGUDO:\n• Permítete llorar si lo necesitas - las lágrimas liberan estrés\n• Escribe una carta que nunca enviarás - expresa todo lo que sientes\n• Crea un ritual de despedida simbólico (soltar un globo, quemar una carta)\n\n🧠 PARA LOS PENSAMIENTOS REPETITIVOS:\n• Establece 'tiempos de preocupación' - solo piensas en esto 15 min al día\n• Cuando venga el recuerdo, di 'gracias mente, pero ahora elijo enfocarme en...'\n• Interrumpe pensamientos con actividad física (10 saltos, estiramientos)\n\n👥 PARA LA SOLEDAD:\n• Haz lista de otras personas que sí están presentes en tu vida\n• Planifica una actividad pequeña con un amigo/familiar esta semana\n• Únete a un grupo donde puedas conocer gente nueva gradualmente\n\n¿Alguna de estas te resuena para probar?",
        )),
        ("relational_rebuild", FlowResponse::text(
            "Poco a poco puedes reconstruir tu vida. Empecemos con cosas pequeñas:\n\n🌱 RECONEXIÓN CONTIGO MISMO:\n• ¿Qué actividades disfrutabas antes de esta relación que podrías retomar?\n• Haz una lista de tus cualidades positivas que siguen siendo tuyas\n• Establece una meta personal pequeña para esta semana\n\n💆 RUTINA DE AUTOCUIDADO:\n• Baño caliente con música tranquila\n• Preparar tu comida favorita\n• Salir a caminar 15 minutos diarios\n• Escribir 3 cosas buenas del día antes de dormir\n\n🔄 REENCUADRE COGNITIVO:\n• ¿Qué aprendiste de esta relación?\n• ¿Qué cualidades quieres en futuras relaciones?\n• ¿Cómo te hizo crecer esta experiencia, aunque duela ahora?\n\nRecuerda: el tiempo no cura todo, pero sí suaviza los bordes afilados del dolor. 💚",
        )),
        ("relational_support", FlowResponse::with_options(
            "Estos momentos son cuando más necesitamos a nuestra red de apoyo.",
            &[
                FlowOption { id: "notify_trusted_adult", label: "👤 Contactar adulto de confianza", action: "notify_trusted_adult" },
                FlowOption { id: "peer_support", label: "👥 Buscar apoyo grupal", action: "peer_support" },
            ],
        )),
        ("peer_support", FlowResponse::text(
            "Muchas escuelas tienen grupos de apoyo entre pares para estos temas.\n\nHablar con otras personas que están pasando o pasaron por situaciones similares puede ayudarte a sentirte menos solo/a y darte nuevas perspectivas.\n\n¿Te gustaría que te ayude a buscar información sobre grupos de apoyo disponibles en tu escuela?\n\nMientras tanto, recordá:\n• No compares tu proceso de sanación con el de otros\n• Algunos días serán mejores que otros - eso es normal\n• Mereces amor y conexión, incluso cuando duele\n\nEstaré aquí para acompañarte en este proceso cuando me necesites. 💙",
        )),
    ],
};

pub(super) static TIREDNESS: Flow = Flow {
    keywords: &[
        "cansado",
        "cansada",
        "agotado",
        "agotada",
        "exhausto",
        "exhausta",
        "sin energía",
        "sin energia",
        "fatigado",
        "fatigada",
        "rendido",
        "rendida",
    ],
    initial: FlowNode {
        text: "El cansancio puede ser señal de que necesitas un descanso. ¿Qué tal si probamos:",
        options: &[
            FlowOption { id: "tiredness_break", label: "a) Un break consciente", action: "tiredness_break" },
            FlowOption { id: "tiredness_sleep", label: "b) Revisar tu rutina de sueño", action: "tiredness_sleep" },
            FlowOption { id: "tiredness_academic", label: "c) Estrategias para manejar carga académica", action: "tiredness_academic" },
        ],
    },
    responses: &[
        ("tiredness_break", FlowResponse::text(
            "Tómate 5 minutos para:\n🧘 Estirar suavemente brazos y piernas\n💧 Beber un vaso de agua\n🪟 Mirar por la ventana y observar sin juzgar\n🌬️ Respirar profundamente 3 veces\n💭 Decirte 'merezco descansar'\n\nEl descanso no es pereza, es autocuidado necesario.",
        )),
        ("tiredness_sleep", FlowResponse::text(
            "El sueño es fundamental para tu bienestar:\n\n🕐 Intenta dormir 8-9 horas por noche\n📱 Evita pantallas 1 hora antes de dormir\n⏰ Mantén horarios regulares (incluso fines de semana)\n🛏️ Tu habitación: fresca, oscura y silenciosa\n☕ Evita cafeína después de las 4 PM\n\n¿Cómo ha sido tu sueño últimamente?",
        )),
        ("tiredness_academic", FlowResponse::text(
            "Manejar la carga académica sin agotarte:\n\n📅 Prioriza: ¿qué es urgente vs importante?\n⏱️ Técnica Pomodoro: 25 min trabajo + 5 min descanso\n🎯 Una tarea a la vez (no multitasking)\n🙅 Aprende a decir 'no' a lo que no es prioritario\n🤝 Pide ayuda cuando la necesites\n\n¿Hay alguna materia específica que te esté demandando más?",
        )),
    ],
};

/// Quick-response buttons: an exact label match short-circuits every other
/// turn rule, including classification.
pub static QUICK_RESPONSES: &[(&str, &str)] = &[
    (
        "🆘 Necesito ayuda ahora",
        "Estoy aquí para vos 💙\n\nRecordá que no estás solo/a.\n\n¿Podés contarme qué está pasando?\n\nSi es una emergencia, contactá a tu adulto de confianza o la línea 144.",
    ),
    (
        "😰 Me siento ansioso/a",
        "La ansiedad puede ser muy abrumadora 🌸\n\nProbemos juntos una técnica:\nInhalá por 4, mantené 7, exhalá por 8.\n\n¿Qué situación específica te está generando ansiedad?",
    ),
    (
        "😔 Estoy triste hoy",
        "Lamento que estés pasando por un momento difícil 💜\n\nEs completamente normal sentirse triste.\n\nEstá bien permitirte sentir.\n\n¿Querés contarme qué te tiene así?",
    ),
    (
        "💭 Quiero desahogarme",
        "Este es tu espacio seguro 💙\n\nPodés contarme lo que sea, sin juicios.\n\nTe escucho con toda mi atención.\n\n¿Qué es lo que te está pesando?",
    ),
    (
        "💪 Necesito motivación",
        "¡Me encanta que busques motivación! 🌟\n\nEso ya muestra tu fortaleza.\n\nHas superado el 100% de tus días difíciles hasta ahora.\n\n¿En qué área específica necesitás ese empujón extra?",
    ),
    (
        "😌 Quiero relajarme",
        "Excelente idea cuidar tu bienestar 🌸\n\nCerrá los ojos, respirá profundo.\n\nImaginá un lugar donde te sientas completamente en paz.\n\n¿Qué lugar elegirías?",
    ),
];

/// Fallback pool used when no keyword set matches; one entry is drawn
/// pseudo-randomly per turn.
pub static GENERAL_RESPONSES: &[&str] = &[
    "Te escucho y estoy aquí para apoyarte 💙\n\nTus sentimientos son válidos.\n\nEs valiente de tu parte compartirlos.\n\n¿Podés contarme un poco más sobre cómo te sentís?",
    "Gracias por confiar en mí ✨\n\nRecordá que no estás solo/a.\n\nCada problema tiene una solución.\n\n¿Hay algo específico que te está preocupando hoy?",
    "Me alegra que hayas venido a hablar 🌟\n\nExpresar lo que sentimos es el primer paso.\n\n¿Qué es lo que más te gustaría que mejore en tu día a día?",
    "Entiendo que puedas estar pasando por un momento difícil 🤗\n\nSos más resiliente de lo que creés.\n\n¿Hay alguna situación particular que te esté afectando?",
    "Me parece genial que busques apoyo 💪\n\nEso muestra que te importa tu bienestar.\n\n¿Cómo ha sido tu día hasta ahora?",
    "Estoy aquí para lo que necesites 🌙\n\nNo hay nada demasiado pequeño o grande para conversar.\n\n¿Qué tenés en mente?",
];

/// Delayed closing remark appended after a terminal flow response
pub const CLOSING_REMARK_DELAY_MS: u64 = 1000;

pub static CLOSING_REMARK_GENERIC: &str = "Recuerda que estoy aquí para ti cuando me necesites. Cuidar de tu bienestar emocional es un acto de amor propio. ¿Hay algo más en lo que pueda apoyarte hoy?";

pub static CLOSING_REMARK_BREAKUP: &str = "Recuerda que la sanación toma tiempo. No hay un cronograma 'correcto'. Estoy aquí para ti cuando me necesites. ¿Hay algo más en lo que pueda apoyarte hoy?";
