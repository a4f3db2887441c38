//! Stateless single-turn conversation assembly.
//!
//! Every request becomes exactly one system turn (the persona) and one user
//! turn (text, optionally paired with a viewport screenshot). No history is
//! retained between requests.

use crate::types::{Role, Turn};

/// Default behavioral instruction supplied verbatim as the system turn.
///
/// The model's compliance with this instruction is not verified; reply text
/// is treated as untrusted free-form output either way.
pub const DEFAULT_PERSONA: &str = "\
Ты — голосовой ассистент браузера. Отвечай на русском языке, коротко и по делу.

Правила работы:
1. Когда пользователь даёт команду (открыть сайт, найти что-то, кликнуть, напечатать) — \
СНАЧАЛА вызови подходящий инструмент, комментарий только после этого.
2. Когда пользователь спрашивает, что видно на экране — опиши скриншот точно.
3. НИКОГДА не выдумывай URL. Если точный адрес неизвестен — используй google_search.
4. Отвечай коротко (1-3 предложения), если не просят подробностей.";

/// Strip a `data:...;base64,` prefix if present, returning the bare payload.
pub fn strip_data_uri(data: &str) -> &str {
    match data.split_once(',') {
        Some((prefix, payload)) if prefix.starts_with("data:") => payload,
        _ => data,
    }
}

/// Assemble the two-turn conversation for one request.
///
/// Empty `text` is passed through as-is; rejection is the caller's choice.
/// Screenshots are always treated as PNG viewport captures.
pub fn assemble_turns(persona: &str, text: &str, image_base64: Option<&str>) -> Vec<Turn> {
    let system = Turn::new(Role::System).with_text(persona);

    let user = match image_base64 {
        Some(image) => Turn::new(Role::User)
            .with_text(text)
            .with_image_base64("image/png", strip_data_uri(image)),
        None => Turn::new(Role::User).with_text(text),
    };

    vec![system, user]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Part;

    #[test]
    fn test_assemble_text_only() {
        let turns = assemble_turns(DEFAULT_PERSONA, "привет", None);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[0].parts[0].text(), Some(DEFAULT_PERSONA));
        assert_eq!(turns[1].role, Role::User);
        assert_eq!(turns[1].parts.len(), 1);
        assert!(!turns[1].has_image());
    }

    #[test]
    fn test_assemble_with_screenshot() {
        let turns = assemble_turns(DEFAULT_PERSONA, "что на экране?", Some("iVBORw0KGgo="));
        assert_eq!(turns.len(), 2);
        let user = &turns[1];
        assert_eq!(user.parts.len(), 2);
        assert_eq!(user.parts[0].text(), Some("что на экране?"));
        assert!(matches!(
            &user.parts[1],
            Part::ImageBase64 { mime_type, data_base64 }
                if mime_type == "image/png" && data_base64 == "iVBORw0KGgo="
        ));
    }

    #[test]
    fn test_persona_override() {
        let turns = assemble_turns("You are a pirate.", "hi", None);
        assert_eq!(turns[0].parts[0].text(), Some("You are a pirate."));
    }

    #[test]
    fn test_strip_data_uri_prefix() {
        assert_eq!(strip_data_uri("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri("AAAA"), "AAAA");
        // A bare comma without a data: scheme is left alone
        assert_eq!(strip_data_uri("AA,AA"), "AA,AA");
    }

    #[test]
    fn test_empty_text_not_rejected() {
        let turns = assemble_turns(DEFAULT_PERSONA, "", None);
        assert_eq!(turns[1].parts[0].text(), Some(""));
    }
}
