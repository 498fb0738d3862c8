use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tera::{Context as TeraContext, Tera};

use crate::dates;
use crate::invitations::Invitation;
use crate::rsvp::{Rsvp, RsvpResponse};
use crate::settings::Settings;
use crate::share;

const REMINDER_HTML: &str = include_str!("email/templates/reminder.html.tera");
const REMINDER_TEXT: &str = include_str!("email/templates/reminder.txt.tera");

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Everything the reminder templates need for one guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderParams {
    pub to: String,
    pub guest_name: String,
    pub event_title: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub invite_url: String,
    #[serde(default)]
    pub organizer_name: Option<String>,
}

/// Builds reminder params for one RSVP, or `None` when the guest should not
/// receive email: not a "yes", no address, or reminders opted out.
pub fn prepare_reminder(
    rsvp: &Rsvp,
    invitation: &Invitation,
    organizer_name: Option<&str>,
    settings: &Settings,
) -> Option<ReminderParams> {
    if rsvp.response != RsvpResponse::Yes {
        return None;
    }
    let to = rsvp.email.as_deref()?.trim().to_string();
    if to.is_empty() {
        return None;
    }
    if let Some(preferences) = rsvp.notification_preferences {
        if !preferences.email {
            return None;
        }
    }

    let description = Some(invitation.description.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Some(ReminderParams {
        to,
        guest_name: rsvp.name.clone(),
        event_title: invitation.title.clone(),
        event_date: invitation.event_date.clone(),
        event_time: invitation.event_time.clone(),
        location: invitation.location.clone(),
        description,
        invite_url: share::invite_url(settings, &invitation.share_token),
        organizer_name: organizer_name.map(str::to_string),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReminder {
    pub subject: String,
    pub html: String,
    pub text: String,
}

pub fn render_reminder(params: &ReminderParams, settings: &Settings) -> Result<RenderedReminder> {
    let formatted_date = dates::format_display_date(&params.event_date)
        .unwrap_or_else(|_| params.event_date.clone());

    let mut context = TeraContext::new();
    context.insert("guest_name", &params.guest_name);
    context.insert("event_title", &params.event_title);
    context.insert("event_date", &formatted_date);
    context.insert("event_time", &params.event_time);
    context.insert("location", &params.location);
    context.insert("description", &params.description);
    context.insert("invite_url", &params.invite_url);
    context.insert("organizer_name", &params.organizer_name);
    context.insert("site_name", &settings.site_name);
    context.insert("base_url", &share::base_url(settings));

    let html = Tera::one_off(REMINDER_HTML, &context, true)
        .with_context(|| "failed to render reminder html")?;
    let text = Tera::one_off(REMINDER_TEXT, &context, false)
        .with_context(|| "failed to render reminder text")?;

    Ok(RenderedReminder {
        subject: format!("Reminder: {} is coming up soon! 🎉", params.event_title),
        html,
        text: text.trim().to_string(),
    })
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResendResponse {
    id: Option<String>,
    error: Option<ResendError>,
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

pub fn resolve_api_key(settings: &Settings) -> Result<String> {
    if let Some(key) = settings.email_api_key.as_deref() {
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }
    std::env::var("RESEND_API_KEY")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| anyhow!("no email API key found (set RESEND_API_KEY or [email].api_key)"))
}

/// Sends a rendered reminder through the transactional provider and returns
/// the provider message id.
pub async fn send_reminder(
    client: &reqwest::Client,
    api_key: &str,
    settings: &Settings,
    params: &ReminderParams,
) -> Result<String> {
    let rendered = render_reminder(params, settings)?;
    let request = ResendRequest {
        from: &settings.email_sender,
        to: &params.to,
        reply_to: settings.email_reply_to.as_deref(),
        subject: &rendered.subject,
        html: &rendered.html,
        text: &rendered.text,
    };

    let response = client
        .post(RESEND_ENDPOINT)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await
        .with_context(|| "failed to reach email provider")?;

    let status = response.status();
    let body: ResendResponse = response
        .json()
        .await
        .with_context(|| "failed to parse email provider response")?;

    if let Some(error) = body.error {
        return Err(anyhow!("email provider rejected the send: {}", error.message));
    }
    if !status.is_success() {
        return Err(anyhow!("email provider returned status {}", status));
    }
    body.id
        .ok_or_else(|| anyhow!("email provider response is missing a message id"))
}
