use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::settings::Settings;

pub const SHARE_TOKEN_LEN: usize = 32;

/// Random alphanumeric token identifying a public invitation link.
pub fn generate_share_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SHARE_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Base URL for outbound links. `SITE_URL` wins over the settings value so
/// deployments can override without editing files.
pub fn base_url(settings: &Settings) -> String {
    let from_env = std::env::var("SITE_URL").ok();
    let raw = from_env
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(&settings.site_base_url);
    raw.trim_end_matches('/').to_string()
}

pub fn build_url(settings: &Settings, path: &str) -> String {
    let base = base_url(settings);
    if path.is_empty() {
        return base;
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Public invitation page for a share token.
pub fn invite_url(settings: &Settings, share_token: &str) -> String {
    build_url(settings, &format!("/invite/{}", share_token))
}

pub fn canonical_url(settings: &Settings, path: &str) -> String {
    build_url(settings, path)
}
