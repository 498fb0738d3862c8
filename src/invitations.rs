use serde::{Deserialize, Serialize};

use crate::overlay::{PartialTextOverlayConfig, TextOverlayConfig};
use crate::rsvp::Rsvp;

/// An invitation row as the backend stores it. The six `text_*` columns are
/// nullable; absent values fall back to the overlay defaults at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: String,
    #[serde(default)]
    pub event_time: String,
    pub location: String,
    #[serde(default)]
    pub design_id: Option<String>,
    pub share_token: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub overlay: InvitationOverlayColumns,
    #[serde(default)]
    pub designs: Option<Design>,
    #[serde(default)]
    pub default_templates: Option<DefaultTemplate>,
    #[serde(default)]
    pub rsvps: Vec<Rsvp>,
}

/// The overlay columns under their database names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationOverlayColumns {
    pub text_overlay_style: Option<crate::overlay::OverlayStyle>,
    pub text_position: Option<crate::overlay::TextPosition>,
    pub text_size: Option<crate::overlay::TextSize>,
    pub text_shadow: Option<bool>,
    pub text_background: Option<bool>,
    pub text_background_opacity: Option<f64>,
}

/// A design image uploaded by the organizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub image_url: String,
    pub created_at: String,
}

/// A stock template offered to every user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultTemplate {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

/// The design or template an invitation renders with, unified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvitationDesign {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl Invitation {
    /// Overlay config for this invitation, with defaults filled in.
    pub fn overlay_config(&self) -> TextOverlayConfig {
        self.overlay_partial().resolve()
    }

    pub fn overlay_partial(&self) -> PartialTextOverlayConfig {
        PartialTextOverlayConfig {
            style: self.overlay.text_overlay_style,
            position: self.overlay.text_position,
            size: self.overlay.text_size,
            shadow: self.overlay.text_shadow,
            background: self.overlay.text_background,
            background_opacity: self.overlay.text_background_opacity,
        }
    }

    /// Custom designs win over stock templates.
    pub fn design(&self) -> Option<InvitationDesign> {
        if let Some(design) = &self.designs {
            return Some(InvitationDesign {
                id: design.id.clone(),
                name: design.name.clone(),
                image_url: design.image_url.clone(),
            });
        }
        self.default_templates
            .as_ref()
            .map(|template| InvitationDesign {
                id: template.id.clone(),
                name: template.name.clone(),
                image_url: template.image_url.clone(),
            })
    }

    pub fn image_url(&self) -> Option<String> {
        self.design().map(|design| design.image_url)
    }

    pub fn design_name(&self) -> Option<String> {
        self.design().map(|design| design.name)
    }

    pub fn has_design(&self) -> bool {
        self.designs.is_some() || self.default_templates.is_some()
    }

    /// True when a stock template is in use and no custom design shadows it.
    pub fn uses_template(&self) -> bool {
        self.default_templates.is_some() && self.designs.is_none()
    }
}

#[cfg(test)]
pub(crate) fn sample_invitation() -> Invitation {
    Invitation {
        id: "inv-1".to_string(),
        user_id: "user-1".to_string(),
        title: "Summer Party".to_string(),
        description: "Bring sunscreen".to_string(),
        event_date: "2026-09-12".to_string(),
        event_time: "18:00".to_string(),
        location: "Riverside Park".to_string(),
        design_id: None,
        share_token: "tok123".to_string(),
        created_at: "2026-08-01T00:00:00Z".to_string(),
        updated_at: "2026-08-01T00:00:00Z".to_string(),
        overlay: InvitationOverlayColumns::default(),
        designs: None,
        default_templates: None,
        rsvps: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{OverlayStyle, TextPosition, TextSize};

    fn design() -> Design {
        Design {
            id: "design-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Watercolor".to_string(),
            image_url: "https://cdn.example/watercolor.png".to_string(),
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    fn template() -> DefaultTemplate {
        DefaultTemplate {
            id: "template-1".to_string(),
            name: "Confetti".to_string(),
            image_url: "https://cdn.example/confetti.png".to_string(),
        }
    }

    #[test]
    fn custom_design_wins_over_template() {
        let mut invitation = sample_invitation();
        invitation.designs = Some(design());
        invitation.default_templates = Some(template());
        let chosen = invitation.design().unwrap();
        assert_eq!(chosen.id, "design-1");
        assert!(!invitation.uses_template());
    }

    #[test]
    fn template_used_when_no_custom_design() {
        let mut invitation = sample_invitation();
        invitation.default_templates = Some(template());
        assert_eq!(invitation.design_name().as_deref(), Some("Confetti"));
        assert!(invitation.uses_template());
        assert!(invitation.has_design());
    }

    #[test]
    fn no_design_at_all() {
        let invitation = sample_invitation();
        assert_eq!(invitation.design(), None);
        assert_eq!(invitation.image_url(), None);
        assert!(!invitation.has_design());
    }

    #[test]
    fn overlay_config_falls_back_to_defaults() {
        let invitation = sample_invitation();
        assert_eq!(
            invitation.overlay_config(),
            crate::overlay::TextOverlayConfig::default()
        );
    }

    #[test]
    fn overlay_columns_deserialize_flattened() {
        let mut invitation = sample_invitation();
        invitation.overlay = InvitationOverlayColumns {
            text_overlay_style: Some(OverlayStyle::Vibrant),
            text_position: Some(TextPosition::Top),
            text_size: Some(TextSize::ExtraLarge),
            text_shadow: Some(false),
            text_background: Some(true),
            text_background_opacity: Some(0.5),
        };
        let json = serde_json::to_string(&invitation).unwrap();
        assert!(json.contains("\"text_overlay_style\":\"vibrant\""));
        let parsed: Invitation = serde_json::from_str(&json).unwrap();
        let config = parsed.overlay_config();
        assert_eq!(config.style, OverlayStyle::Vibrant);
        assert_eq!(config.position, TextPosition::Top);
        assert_eq!(config.size, TextSize::ExtraLarge);
        assert!(!config.shadow);
        assert!(config.background);
        assert_eq!(config.background_opacity, 0.5);
    }
}
