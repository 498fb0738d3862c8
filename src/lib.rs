use anyhow::{Context, Result, anyhow};
use std::path::Path;

pub mod dates;
pub mod email;
pub mod invitations;
pub mod logging;
pub mod overlay;
pub mod rsvp;
pub mod server;
pub mod settings;
pub mod share;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_util;

#[derive(Debug, Clone)]
pub struct Config {
    pub style: Option<String>,
    pub position: Option<String>,
    pub size: Option<String>,
    pub shadow: Option<bool>,
    pub background: Option<bool>,
    pub background_opacity: Option<f64>,
    pub settings_path: Option<String>,
    pub show_style_options: bool,
    pub show_position_options: bool,
    pub show_size_options: bool,
    pub new_share_token: bool,
    pub preview_reminder: bool,
    pub send_reminder: bool,
}

pub async fn run(config: Config, input: Option<String>) -> Result<String> {
    let settings_path = config.settings_path.as_deref().map(Path::new);
    let settings = settings::load_settings(settings_path)?;

    if config.show_style_options || config.show_position_options || config.show_size_options {
        return Ok(format_show_output(&config));
    }
    if config.new_share_token {
        return Ok(share::generate_share_token());
    }
    if config.preview_reminder || config.send_reminder {
        return run_reminder(&config, &settings, input).await;
    }

    resolve_overlay(&config, &settings, input)
}

fn format_show_output(config: &Config) -> String {
    let mut sections = Vec::new();

    if config.show_style_options {
        sections.push(format_options(&overlay::style_options()));
    }
    if config.show_position_options {
        sections.push(format_options(&overlay::position_options()));
    }
    if config.show_size_options {
        sections.push(format_options(&overlay::size_options()));
    }

    sections.join("\n")
}

fn format_options(options: &[overlay::OverlayOption]) -> String {
    options
        .iter()
        .map(|option| format!("{}\t{}\t{}", option.value, option.label, option.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve_overlay(
    config: &Config,
    settings: &settings::Settings,
    input: Option<String>,
) -> Result<String> {
    let mut partial = match input.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            serde_json::from_str::<overlay::PartialTextOverlayConfig>(raw)
                .with_context(|| "failed to parse overlay config from stdin")?
        }
        _ => overlay::PartialTextOverlayConfig::default(),
    };

    if let Some(style) = config.style.as_deref() {
        partial.style = Some(
            overlay::OverlayStyle::parse(style)
                .ok_or_else(|| anyhow!("unknown style '{}'", style))?,
        );
    }
    if let Some(position) = config.position.as_deref() {
        partial.position = Some(
            overlay::TextPosition::parse(position)
                .ok_or_else(|| anyhow!("unknown position '{}'", position))?,
        );
    }
    if let Some(size) = config.size.as_deref() {
        partial.size = Some(
            overlay::TextSize::parse(size).ok_or_else(|| anyhow!("unknown size '{}'", size))?,
        );
    }
    if let Some(shadow) = config.shadow {
        partial.shadow = Some(shadow);
    }
    if let Some(background) = config.background {
        partial.background = Some(background);
    }
    if let Some(opacity) = config.background_opacity {
        partial.background_opacity = Some(opacity);
    }

    let resolved = partial.resolve_over(&settings.overlay_defaults);
    serde_json::to_string_pretty(&overlay::derive_all(&resolved))
        .with_context(|| "failed to serialize overlay descriptors")
}

async fn run_reminder(
    config: &Config,
    settings: &settings::Settings,
    input: Option<String>,
) -> Result<String> {
    let raw = input.unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow!("stdin is empty (expected reminder JSON)"));
    }
    let params: email::ReminderParams =
        serde_json::from_str(raw).with_context(|| "failed to parse reminder JSON from stdin")?;

    if config.send_reminder {
        let api_key = email::resolve_api_key(settings)?;
        let client = reqwest::Client::new();
        let id = email::send_reminder(&client, &api_key, settings, &params).await?;
        return Ok(format!("sent: {}", id));
    }

    let rendered = email::render_reminder(&params, settings)?;
    serde_json::to_string_pretty(&serde_json::json!({
        "subject": rendered.subject,
        "html": rendered.html,
        "text": rendered.text,
    }))
    .with_context(|| "failed to serialize reminder preview")
}
