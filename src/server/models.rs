use serde::{Deserialize, Serialize};

use crate::overlay::OverlayOption;
use crate::rsvp::{FormattedCounts, Rsvp, RsvpStats};

#[derive(Debug, Serialize)]
pub(crate) struct OverlayOptionsResponse {
    pub(crate) styles: Vec<OverlayOption>,
    pub(crate) positions: Vec<OverlayOption>,
    pub(crate) sizes: Vec<OverlayOption>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RsvpStatsRequest {
    pub(crate) rsvps: Vec<Rsvp>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RsvpStatsResponse {
    pub(crate) stats: RsvpStats,
    pub(crate) counts: FormattedCounts,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReminderPreviewResponse {
    pub(crate) subject: String,
    pub(crate) html: String,
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: String,
}
