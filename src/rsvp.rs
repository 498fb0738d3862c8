use serde::{Deserialize, Serialize};

use crate::invitations::Invitation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpResponse {
    Yes,
    No,
    Maybe,
}

impl RsvpResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpResponse::Yes => "yes",
            RsvpResponse::No => "no",
            RsvpResponse::Maybe => "maybe",
        }
    }
}

/// A guest response to one invitation. Email and notification preferences are
/// only present for guests who opted in to reminders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    pub id: String,
    pub invitation_id: String,
    pub name: String,
    pub response: RsvpResponse,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notification_preferences: Option<NotificationPreferences>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub email: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self { email: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RsvpStats {
    pub yes: usize,
    pub no: usize,
    pub maybe: usize,
    pub total: usize,
}

pub fn stats(rsvps: &[Rsvp]) -> RsvpStats {
    let mut stats = RsvpStats::default();
    for rsvp in rsvps {
        match rsvp.response {
            RsvpResponse::Yes => stats.yes += 1,
            RsvpResponse::No => stats.no += 1,
            RsvpResponse::Maybe => stats.maybe += 1,
        }
        stats.total += 1;
    }
    stats
}

/// Stats over every RSVP across a dashboard's invitations.
pub fn global_stats(invitations: &[Invitation]) -> RsvpStats {
    let mut combined = RsvpStats::default();
    for invitation in invitations {
        let per = stats(&invitation.rsvps);
        combined.yes += per.yes;
        combined.no += per.no;
        combined.maybe += per.maybe;
        combined.total += per.total;
    }
    combined
}

pub fn total_count(invitations: &[Invitation]) -> usize {
    invitations
        .iter()
        .map(|invitation| invitation.rsvps.len())
        .sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedCounts {
    pub yes_count: String,
    pub maybe_count: String,
    pub no_count: String,
}

pub fn formatted_counts(rsvps: &[Rsvp]) -> FormattedCounts {
    let stats = stats(rsvps);
    FormattedCounts {
        yes_count: format!("{} Yes", stats.yes),
        maybe_count: format!("{} Maybe", stats.maybe),
        no_count: format!("{} No", stats.no),
    }
}

/// Newest first. `created_at` is an ISO 8601 timestamp, so lexical order is
/// chronological order.
pub fn sorted_by_date(rsvps: &[Rsvp]) -> Vec<Rsvp> {
    let mut sorted = rsvps.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

pub fn filter_by_response(rsvps: &[Rsvp], response: RsvpResponse) -> Vec<Rsvp> {
    rsvps
        .iter()
        .filter(|rsvp| rsvp.response == response)
        .cloned()
        .collect()
}

pub fn most_recent(rsvps: &[Rsvp]) -> Option<Rsvp> {
    sorted_by_date(rsvps).into_iter().next()
}

pub fn has_responses(invitation: &Invitation) -> bool {
    !invitation.rsvps.is_empty()
}

/// Per-response Tailwind classes used across dashboard and public views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseColorClasses {
    pub text: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
}

pub fn response_color_classes(response: RsvpResponse) -> ResponseColorClasses {
    match response {
        RsvpResponse::Yes => ResponseColorClasses {
            text: "text-green-600",
            bg: "bg-green-50",
            border: "border-green-200",
        },
        RsvpResponse::No => ResponseColorClasses {
            text: "text-red-600",
            bg: "bg-red-50",
            border: "border-red-200",
        },
        RsvpResponse::Maybe => ResponseColorClasses {
            text: "text-yellow-600",
            bg: "bg-yellow-50",
            border: "border-yellow-200",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsvp(id: &str, response: RsvpResponse, created_at: &str) -> Rsvp {
        Rsvp {
            id: id.to_string(),
            invitation_id: "inv-1".to_string(),
            name: format!("Guest {}", id),
            response,
            comment: None,
            email: None,
            notification_preferences: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn stats_count_each_response() {
        let rsvps = vec![
            rsvp("1", RsvpResponse::Yes, "2026-08-01T10:00:00Z"),
            rsvp("2", RsvpResponse::Yes, "2026-08-02T10:00:00Z"),
            rsvp("3", RsvpResponse::No, "2026-08-03T10:00:00Z"),
            rsvp("4", RsvpResponse::Maybe, "2026-08-04T10:00:00Z"),
        ];
        let stats = stats(&rsvps);
        assert_eq!(stats.yes, 2);
        assert_eq!(stats.no, 1);
        assert_eq!(stats.maybe, 1);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn formatted_counts_read_like_badges() {
        let rsvps = vec![rsvp("1", RsvpResponse::Yes, "2026-08-01T10:00:00Z")];
        let counts = formatted_counts(&rsvps);
        assert_eq!(counts.yes_count, "1 Yes");
        assert_eq!(counts.maybe_count, "0 Maybe");
        assert_eq!(counts.no_count, "0 No");
    }

    #[test]
    fn sorted_by_date_is_newest_first_and_leaves_input_alone() {
        let rsvps = vec![
            rsvp("old", RsvpResponse::Yes, "2026-08-01T10:00:00Z"),
            rsvp("new", RsvpResponse::No, "2026-08-05T10:00:00Z"),
            rsvp("mid", RsvpResponse::Maybe, "2026-08-03T10:00:00Z"),
        ];
        let sorted = sorted_by_date(&rsvps);
        assert_eq!(sorted[0].id, "new");
        assert_eq!(sorted[2].id, "old");
        assert_eq!(rsvps[0].id, "old");
        assert_eq!(most_recent(&rsvps).unwrap().id, "new");
    }

    #[test]
    fn most_recent_of_empty_is_none() {
        assert_eq!(most_recent(&[]), None);
    }

    #[test]
    fn filter_keeps_only_matching_responses() {
        let rsvps = vec![
            rsvp("1", RsvpResponse::Yes, "2026-08-01T10:00:00Z"),
            rsvp("2", RsvpResponse::No, "2026-08-02T10:00:00Z"),
        ];
        let yes = filter_by_response(&rsvps, RsvpResponse::Yes);
        assert_eq!(yes.len(), 1);
        assert_eq!(yes[0].id, "1");
    }

    #[test]
    fn global_stats_spans_invitations() {
        let mut first = crate::invitations::sample_invitation();
        first.rsvps = vec![rsvp("1", RsvpResponse::Yes, "2026-08-01T10:00:00Z")];
        let mut second = crate::invitations::sample_invitation();
        second.rsvps = vec![
            rsvp("2", RsvpResponse::Maybe, "2026-08-02T10:00:00Z"),
            rsvp("3", RsvpResponse::Yes, "2026-08-03T10:00:00Z"),
        ];
        let invitations = vec![first, second];
        let stats = global_stats(&invitations);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.yes, 2);
        assert_eq!(total_count(&invitations), 3);
        assert!(has_responses(&invitations[0]));
    }

    #[test]
    fn response_colors_are_per_response() {
        assert_eq!(
            response_color_classes(RsvpResponse::Yes).text,
            "text-green-600"
        );
        assert_eq!(response_color_classes(RsvpResponse::No).bg, "bg-red-50");
        assert_eq!(
            response_color_classes(RsvpResponse::Maybe).border,
            "border-yellow-200"
        );
    }
}
