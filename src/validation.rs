use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use time::Date;

use crate::dates;
use crate::rsvp::RsvpResponse;

const MAX_TEXT_LEN: usize = 1000;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-'.]{1,100}$").expect("name pattern"));

static DANGEROUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"<script",
        r"javascript:",
        r"on\w+\s*=",
        r"data:text/html",
        r"vbscript:",
        r"<iframe",
        r"<object",
        r"<embed",
        r"<link",
        r"<meta",
    ]
    .iter()
    .map(|pattern| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("dangerous content pattern")
    })
    .collect()
});

/// Field-keyed validation errors. Empty means the payload passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_string()).or_insert(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Trims, strips angle brackets, and caps length for safe storage.
pub fn sanitize_text(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| *ch != '<' && *ch != '>')
        .take(MAX_TEXT_LEN)
        .collect()
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn contains_dangerous_content(input: &str) -> bool {
    DANGEROUS_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(input))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationInput {
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvitationValidation {
    pub is_valid: bool,
    pub errors: ValidationErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized: Option<InvitationInput>,
}

/// Validates an invitation payload against the create/edit rules. `today`
/// anchors the past-date check so callers (and tests) control the clock.
pub fn validate_invitation(input: &InvitationInput, today: Date) -> InvitationValidation {
    let mut errors = ValidationErrors::default();

    let title = input.title.trim();
    if title.is_empty() {
        errors.push("title", "Event title is required");
    } else if title.chars().count() < 3 || title.chars().count() > 100 {
        errors.push("title", "Title must be between 3 and 100 characters");
    }

    if input.description.chars().count() > 500 {
        errors.push("description", "Description must be less than 500 characters");
    }

    if input.event_date.trim().is_empty() {
        errors.push("event_date", "Event date is required");
    } else {
        match dates::is_in_past(&input.event_date, today) {
            Ok(true) => errors.push("event_date", "Event date cannot be in the past"),
            Ok(false) => {}
            Err(_) => errors.push("event_date", "Invalid event date"),
        }
    }

    let location = input.location.trim();
    if location.is_empty() {
        errors.push("location", "Event location is required");
    } else if location.chars().count() > 200 {
        errors.push("location", "Location must be less than 200 characters");
    }

    let is_valid = errors.is_empty();
    let sanitized = is_valid.then(|| InvitationInput {
        title: sanitize_text(&input.title),
        description: sanitize_text(&input.description),
        event_date: input.event_date.trim().to_string(),
        event_time: input.event_time.trim().to_string(),
        location: sanitize_text(&input.location),
    });

    InvitationValidation {
        is_valid,
        errors,
        sanitized,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsvpInput {
    pub name: String,
    pub response: Option<RsvpResponse>,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsvpValidation {
    pub is_valid: bool,
    pub errors: ValidationErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized: Option<SanitizedRsvp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizedRsvp {
    pub name: String,
    pub response: RsvpResponse,
    pub comment: String,
}

pub fn validate_rsvp(input: &RsvpInput) -> RsvpValidation {
    let mut errors = ValidationErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.push("name", "Name is required");
    } else if name.chars().count() < 2 || name.chars().count() > 50 {
        errors.push("name", "Name must be between 2 and 50 characters");
    } else if !NAME_PATTERN.is_match(name) {
        errors.push("name", "Name contains invalid characters");
    }

    if input.response.is_none() {
        errors.push("response", "Please select a valid response");
    }

    if input.comment.chars().count() > 300 {
        errors.push("comment", "Comment must be less than 300 characters");
    }

    let is_valid = errors.is_empty();
    let sanitized = match (is_valid, input.response) {
        (true, Some(response)) => Some(SanitizedRsvp {
            name: sanitize_text(&input.name),
            response,
            comment: sanitize_text(&input.comment),
        }),
        _ => None,
    };

    RsvpValidation {
        is_valid,
        errors,
        sanitized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn valid_invitation() -> InvitationInput {
        InvitationInput {
            title: "Summer Party".to_string(),
            description: "Bring sunscreen".to_string(),
            event_date: "2026-09-12".to_string(),
            event_time: "18:00".to_string(),
            location: "Riverside Park".to_string(),
        }
    }

    const TODAY: Date = date!(2026 - 08 - 29);

    #[test]
    fn valid_invitation_passes_and_is_sanitized() {
        let mut input = valid_invitation();
        input.title = "  Summer <b>Party</b>  ".to_string();
        let result = validate_invitation(&input, TODAY);
        assert!(result.is_valid);
        assert_eq!(result.sanitized.unwrap().title, "Summer bParty/b");
    }

    #[test]
    fn invitation_title_rules() {
        let mut input = valid_invitation();
        input.title = "".to_string();
        let result = validate_invitation(&input, TODAY);
        assert_eq!(result.errors.get("title"), Some("Event title is required"));

        input.title = "Hi".to_string();
        let result = validate_invitation(&input, TODAY);
        assert_eq!(
            result.errors.get("title"),
            Some("Title must be between 3 and 100 characters")
        );
    }

    #[test]
    fn invitation_date_rules() {
        let mut input = valid_invitation();
        input.event_date = "2026-08-01".to_string();
        let result = validate_invitation(&input, TODAY);
        assert_eq!(
            result.errors.get("event_date"),
            Some("Event date cannot be in the past")
        );

        input.event_date = "not-a-date".to_string();
        let result = validate_invitation(&input, TODAY);
        assert_eq!(result.errors.get("event_date"), Some("Invalid event date"));

        input.event_date = String::new();
        let result = validate_invitation(&input, TODAY);
        assert_eq!(result.errors.get("event_date"), Some("Event date is required"));
    }

    #[test]
    fn invitation_length_limits() {
        let mut input = valid_invitation();
        input.description = "d".repeat(501);
        input.location = "l".repeat(201);
        let result = validate_invitation(&input, TODAY);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.sanitized.is_none());
    }

    #[test]
    fn rsvp_validation_rules() {
        let input = RsvpInput {
            name: "Jamie O'Neil".to_string(),
            response: Some(RsvpResponse::Yes),
            comment: "See you there".to_string(),
        };
        let result = validate_rsvp(&input);
        assert!(result.is_valid);
        assert_eq!(result.sanitized.unwrap().response, RsvpResponse::Yes);

        let bad = RsvpInput {
            name: "X".to_string(),
            response: None,
            comment: "c".repeat(301),
        };
        let result = validate_rsvp(&bad);
        assert_eq!(
            result.errors.get("name"),
            Some("Name must be between 2 and 50 characters")
        );
        assert_eq!(
            result.errors.get("response"),
            Some("Please select a valid response")
        );
        assert_eq!(
            result.errors.get("comment"),
            Some("Comment must be less than 300 characters")
        );
    }

    #[test]
    fn rsvp_name_character_set() {
        let input = RsvpInput {
            name: "Bad<Name>".to_string(),
            response: Some(RsvpResponse::No),
            comment: String::new(),
        };
        let result = validate_rsvp(&input);
        assert_eq!(
            result.errors.get("name"),
            Some("Name contains invalid characters")
        );
    }

    #[test]
    fn sanitize_strips_angle_brackets_and_caps_length() {
        assert_eq!(sanitize_text("  <hello>  "), "hello");
        let long = "a".repeat(1200);
        assert_eq!(sanitize_text(&long).chars().count(), 1000);
    }

    #[test]
    fn email_format() {
        assert!(validate_email("guest@example.com"));
        assert!(!validate_email("guest@example"));
        assert!(!validate_email("not an email"));
    }

    #[test]
    fn dangerous_content_detection() {
        assert!(contains_dangerous_content("<SCRIPT>alert(1)</script>"));
        assert!(contains_dangerous_content("<img onerror=hack()>"));
        assert!(contains_dangerous_content("javascript:void(0)"));
        assert!(!contains_dangerous_content("Dinner at 7, bring drinks"));
    }
}
