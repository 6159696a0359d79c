//! Fixed system prompts. Every template, tone and channel maps to its own
//! instruction through an exhaustive match.

use prospecta_core::{Channel, OutreachTemplate, ReplyTone};

/// Which instruction block to add after the base policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Outreach(OutreachTemplate),
    Reply(ReplyTone),
}

const BASE_POLICY: &str = "\
Eres el vendedor de una agencia de desarrollo web que contacta negocios locales. \
Escribes en español, con un tono natural y cercano, como una persona real.

REGLAS ESTRICTAS:
- Nunca inventes clientes, proyectos, experiencia, resultados, cifras, precios ni testimonios.
- Usa únicamente la información del negocio que se te proporciona.
- No prometas plazos ni garantías.
- Si no sabes algo, no lo menciones.
- No uses plantillas genéricas ni frases de relleno; personaliza con los datos del negocio.";

const WHATSAPP_FORMAT: &str = "\
FORMATO (WhatsApp):
- Máximo 3 a 4 líneas cortas.
- Sin asunto, sin saludos formales largos y sin firmas.
- Como mucho un emoji.";

const EMAIL_FORMAT: &str = "\
FORMATO (email):
- Primera línea: el asunto, sin la palabra \"Asunto\".
- Segunda línea: exactamente ---
- Después: el cuerpo del correo, breve, en párrafos cortos, con una llamada a la acción clara.";

fn channel_format(channel: Channel) -> &'static str {
    match channel {
        Channel::Whatsapp => WHATSAPP_FORMAT,
        Channel::Email => EMAIL_FORMAT,
    }
}

fn template_instruction(template: OutreachTemplate) -> &'static str {
    match template {
        OutreachTemplate::Presentacion => {
            "OBJETIVO: primer contacto. Preséntate brevemente, menciona algo concreto del \
             negocio (reseñas, categoría, ubicación) y plantea un problema típico de su nicho \
             que podamos resolver. Termina con una pregunta abierta."
        }
        OutreachTemplate::Seguimiento => {
            "OBJETIVO: seguimiento de un contacto previo sin respuesta. Sé breve, no reproches \
             la falta de respuesta, aporta una idea nueva y útil para su negocio y ofrece una \
             llamada corta."
        }
        OutreachTemplate::SinWeb => {
            "OBJETIVO: el negocio no tiene sitio web. Explica con tacto lo que pierden sin \
             presencia en línea usando los problemas de su nicho, y propone una solución \
             concreta de las que ofrecemos."
        }
    }
}

fn tone_instruction(tone: ReplyTone) -> &'static str {
    match tone {
        ReplyTone::Amigable => {
            "TONO: amigable y cercano. Responde directamente a lo que dijo el cliente, \
             con calidez y sin presionar."
        }
        ReplyTone::Profesional => {
            "TONO: profesional y claro. Responde cada punto del cliente con precisión \
             y sin tecnicismos innecesarios."
        }
        ReplyTone::CerrarCita => {
            "TONO: orientado a cerrar una cita. Responde lo que preguntó el cliente y \
             propone dos opciones concretas de día y hora para una llamada o reunión."
        }
    }
}

/// System prompt: base policy, channel format and mode instruction.
#[must_use]
pub fn system_prompt(mode: PromptMode, channel: Channel) -> String {
    let instruction = match mode {
        PromptMode::Outreach(template) => template_instruction(template),
        PromptMode::Reply(tone) => tone_instruction(tone),
    };
    format!("{BASE_POLICY}\n\n{}\n\n{instruction}", channel_format(channel))
}

/// User prompt for a cold outreach message.
#[must_use]
pub fn outreach_user_prompt(brief: &str, channel: Channel) -> String {
    format!(
        "{brief}\n\nRedacta el mensaje de {} para este negocio.",
        channel_name(channel)
    )
}

/// User prompt for a reply inside an ongoing conversation.
#[must_use]
pub fn reply_user_prompt(
    brief: &str,
    conversation_history: &str,
    client_messages: &[String],
    channel: Channel,
) -> String {
    let history = if conversation_history.trim().is_empty() {
        "(sin mensajes previos)"
    } else {
        conversation_history.trim()
    };
    let pending = client_messages
        .iter()
        .enumerate()
        .map(|(i, message)| format!("{}. {}", i + 1, message.trim()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{brief}\n\nHISTORIAL DE LA CONVERSACIÓN\n{history}\n\n\
         MENSAJES DEL CLIENTE POR RESPONDER\n{pending}\n\n\
         Redacta la respuesta de {} a estos mensajes.",
        channel_name(channel)
    )
}

fn channel_name(channel: Channel) -> &'static str {
    match channel {
        Channel::Whatsapp => "WhatsApp",
        Channel::Email => "email",
    }
}
