use serde::{Deserialize, Serialize};

/// Role of one conversation turn. The gateway is single-turn: every request
/// produces exactly one system turn and one user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    /// Base64-encoded still image of the browser viewport.
    ///
    /// Kept in its base64 form end to end so the provider adapter can embed
    /// it in a data URI without a decode/re-encode round trip.
    ImageBase64 {
        mime_type: String,
        data_base64: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn new(role: Role) -> Self {
        Self { role, parts: Vec::new() }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text { text: text.into() });
        self
    }

    pub fn with_image_base64(
        mut self,
        mime_type: impl Into<String>,
        data_base64: impl Into<String>,
    ) -> Self {
        self.parts
            .push(Part::ImageBase64 { mime_type: mime_type.into(), data_base64: data_base64.into() });
        self
    }

    /// Returns true if any part of this turn carries an image.
    pub fn has_image(&self) -> bool {
        self.parts.iter().any(|p| matches!(p, Part::ImageBase64 { .. }))
    }
}

impl Part {
    /// Returns the text content if this is a Text part, None otherwise
    pub fn text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Part::ImageBase64 { mime_type, .. } => Some(mime_type.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_creation() {
        let turn = Turn::new(Role::User).with_text("Hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.parts.len(), 1);
        assert!(!turn.has_image());
    }

    #[test]
    fn test_turn_with_image() {
        let turn = Turn::new(Role::User)
            .with_text("What is on the screen?")
            .with_image_base64("image/png", "iVBORw0KGgo=");
        assert_eq!(turn.parts.len(), 2);
        assert!(turn.has_image());
        assert!(
            matches!(&turn.parts[1], Part::ImageBase64 { mime_type, .. } if mime_type == "image/png")
        );
    }

    #[test]
    fn test_part_accessors() {
        let text = Part::Text { text: "hi".to_string() };
        assert_eq!(text.text(), Some("hi"));
        assert_eq!(text.mime_type(), None);

        let image = Part::ImageBase64 {
            mime_type: "image/png".to_string(),
            data_base64: "AAAA".to_string(),
        };
        assert_eq!(image.text(), None);
        assert_eq!(image.mime_type(), Some("image/png"));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
