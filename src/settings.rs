use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::overlay::{OverlayStyle, PartialTextOverlayConfig, TextPosition, TextSize};

const DEFAULT_SETTINGS_TOML: &str = include_str!("../settings.toml");

#[derive(Debug, Clone)]
pub struct Settings {
    pub site_name: String,
    pub site_base_url: String,
    pub site_description: String,
    pub email_sender: String,
    pub email_sender_name: String,
    pub email_reply_to: Option<String>,
    pub email_api_key: Option<String>,
    /// Site-wide overlay defaults layered under per-invitation overrides.
    pub overlay_defaults: PartialTextOverlayConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Simple Evite".to_string(),
            site_base_url: "http://localhost:3008".to_string(),
            site_description: "Create stunning, personalized event invitations with RSVP tracking."
                .to_string(),
            email_sender: "Simple Evite <onboarding@resend.dev>".to_string(),
            email_sender_name: "Simple Evite".to_string(),
            email_reply_to: None,
            email_api_key: None,
            overlay_defaults: PartialTextOverlayConfig::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    site: Option<SiteSettings>,
    email: Option<EmailSettings>,
    overlay: Option<OverlaySettings>,
}

#[derive(Debug, Default, Deserialize)]
struct SiteSettings {
    name: Option<String>,
    base_url: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct EmailSettings {
    sender: Option<String>,
    sender_name: Option<String>,
    reply_to: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OverlaySettings {
    style: Option<OverlayStyle>,
    position: Option<TextPosition>,
    size: Option<TextSize>,
    shadow: Option<bool>,
    background: Option<bool>,
    background_opacity: Option<f64>,
}

pub fn load_settings(extra_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();
    ensure_home_settings_file()?;

    let mut ordered_paths = Vec::new();
    ordered_paths.push(PathBuf::from("settings.toml"));
    ordered_paths.push(PathBuf::from("settings.local.toml"));

    if let Some(home) = home_dir() {
        ordered_paths.push(home.join("settings.toml"));
        ordered_paths.push(home.join("settings.local.toml"));
    }

    if let Some(extra) = extra_path {
        if !extra.exists() {
            return Err(anyhow!("settings file not found: {}", extra.display()));
        }
        ordered_paths.push(extra.to_path_buf());
    }

    for path in ordered_paths {
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            let parsed: SettingsFile = toml::from_str(&content)
                .with_context(|| format!("failed to parse settings: {}", path.display()))?;
            settings.merge(parsed);
        }
    }

    Ok(settings)
}

impl Settings {
    fn merge(&mut self, incoming: SettingsFile) {
        if let Some(site) = incoming.site {
            if let Some(name) = site.name {
                if !name.trim().is_empty() {
                    self.site_name = name;
                }
            }
            if let Some(base_url) = site.base_url {
                if !base_url.trim().is_empty() {
                    self.site_base_url = base_url;
                }
            }
            if let Some(description) = site.description {
                if !description.trim().is_empty() {
                    self.site_description = description;
                }
            }
        }
        if let Some(email) = incoming.email {
            if let Some(sender) = email.sender {
                if !sender.trim().is_empty() {
                    self.email_sender = sender;
                }
            }
            if let Some(sender_name) = email.sender_name {
                if !sender_name.trim().is_empty() {
                    self.email_sender_name = sender_name;
                }
            }
            if let Some(reply_to) = email.reply_to {
                if !reply_to.trim().is_empty() {
                    self.email_reply_to = Some(reply_to);
                }
            }
            if let Some(api_key) = email.api_key {
                if !api_key.trim().is_empty() {
                    self.email_api_key = Some(api_key);
                }
            }
        }
        if let Some(overlay) = incoming.overlay {
            let defaults = &mut self.overlay_defaults;
            defaults.style = overlay.style.or(defaults.style);
            defaults.position = overlay.position.or(defaults.position);
            defaults.size = overlay.size.or(defaults.size);
            defaults.shadow = overlay.shadow.or(defaults.shadow);
            defaults.background = overlay.background.or(defaults.background);
            defaults.background_opacity =
                overlay.background_opacity.or(defaults.background_opacity);
        }
    }
}

fn ensure_home_settings_file() -> Result<()> {
    let Some(home) = home_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&home)
        .with_context(|| format!("failed to create settings directory: {}", home.display()))?;
    let path = home.join("settings.toml");
    if !path.exists() {
        fs::write(&path, DEFAULT_SETTINGS_TOML)
            .with_context(|| format!("failed to write settings: {}", path.display()))?;
    }
    Ok(())
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().and_then(|home| {
        let home = home.trim();
        if home.is_empty() {
            None
        } else {
            Some(Path::new(home).join(".simple-evite"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_temp_home;

    #[test]
    fn defaults_when_no_files_exist() {
        with_temp_home(|_| {
            let settings = load_settings(None).unwrap();
            assert_eq!(settings.site_name, "Simple Evite");
            assert_eq!(settings.overlay_defaults, PartialTextOverlayConfig::default());
        });
    }

    #[test]
    fn home_settings_file_is_seeded() {
        with_temp_home(|home| {
            load_settings(None).unwrap();
            assert!(home.join(".simple-evite").join("settings.toml").exists());
        });
    }

    #[test]
    fn extra_path_overrides_earlier_layers() {
        with_temp_home(|home| {
            let extra = home.join("override.toml");
            fs::write(
                &extra,
                r#"
[site]
name = "Party Central"

[overlay]
style = "vibrant"
background = true
"#,
            )
            .unwrap();
            let settings = load_settings(Some(&extra)).unwrap();
            assert_eq!(settings.site_name, "Party Central");
            assert_eq!(settings.overlay_defaults.style, Some(OverlayStyle::Vibrant));
            assert_eq!(settings.overlay_defaults.background, Some(true));
            assert_eq!(settings.overlay_defaults.size, None);
        });
    }

    #[test]
    fn missing_extra_path_is_an_error() {
        with_temp_home(|home| {
            let missing = home.join("nope.toml");
            assert!(load_settings(Some(&missing)).is_err());
        });
    }

    #[test]
    fn blank_values_do_not_clobber_defaults() {
        with_temp_home(|home| {
            let extra = home.join("blank.toml");
            fs::write(&extra, "[site]\nname = \"  \"\n").unwrap();
            let settings = load_settings(Some(&extra)).unwrap();
            assert_eq!(settings.site_name, "Simple Evite");
        });
    }
}
