use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, Response, StatusCode};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::info;

use crate::overlay::{self, OverlayDescriptors, PartialTextOverlayConfig};
use crate::settings;
use crate::validation::{InvitationInput, RsvpInput, validate_invitation, validate_rsvp};
use crate::{dates, email, rsvp};

use super::models::{
    ErrorResponse, OverlayOptionsResponse, ReminderPreviewResponse, RsvpStatsRequest,
    RsvpStatsResponse,
};
use super::state::ServerState;

pub async fn run_server(settings: settings::Settings, addr: String) -> Result<()> {
    let state = Arc::new(ServerState { settings });
    let app = Router::new()
        .route("/health", get(health))
        .route("/overlay/resolve", post(overlay_resolve))
        .route("/overlay/options", get(overlay_options))
        .route("/invitations/validate", post(invitations_validate))
        .route("/rsvp/validate", post(rsvp_validate))
        .route("/rsvp/stats", post(rsvp_stats))
        .route("/reminder/preview", post(reminder_preview))
        .with_state(state)
        .layer(axum::middleware::from_fn(cors_middleware));
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| "failed to bind server address")?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

async fn cors_middleware(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::NO_CONTENT;
        apply_cors_headers(response.headers_mut());
        return Ok(response);
    }
    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut());
    Ok(response)
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type,authorization"),
    );
}

async fn overlay_resolve(
    State(state): State<Arc<ServerState>>,
    Json(partial): Json<PartialTextOverlayConfig>,
) -> Json<OverlayDescriptors> {
    let config = partial.resolve_over(&state.settings.overlay_defaults);
    Json(overlay::derive_all(&config))
}

async fn overlay_options() -> Json<OverlayOptionsResponse> {
    Json(OverlayOptionsResponse {
        styles: overlay::style_options(),
        positions: overlay::position_options(),
        sizes: overlay::size_options(),
    })
}

async fn invitations_validate(Json(input): Json<InvitationInput>) -> impl IntoResponse {
    let result = validate_invitation(&input, dates::today_utc());
    let status = if result.is_valid {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result))
}

async fn rsvp_validate(Json(input): Json<RsvpInput>) -> impl IntoResponse {
    let result = validate_rsvp(&input);
    let status = if result.is_valid {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result))
}

async fn rsvp_stats(Json(request): Json<RsvpStatsRequest>) -> Json<RsvpStatsResponse> {
    Json(RsvpStatsResponse {
        stats: rsvp::stats(&request.rsvps),
        counts: rsvp::formatted_counts(&request.rsvps),
    })
}

async fn reminder_preview(
    State(state): State<Arc<ServerState>>,
    Json(params): Json<email::ReminderParams>,
) -> Result<Json<ReminderPreviewResponse>, (StatusCode, Json<ErrorResponse>)> {
    let rendered = email::render_reminder(&params, &state.settings).map_err(|err| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
    })?;
    Ok(Json(ReminderPreviewResponse {
        subject: rendered.subject,
        html: rendered.html,
        text: rendered.text,
    }))
}
