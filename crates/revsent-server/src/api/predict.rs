use axum::{extract::State, response::Html, Extension, Form};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{page, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ReviewForm {
    pub review: String,
}

pub(super) async fn home() -> Html<String> {
    page::render(None)
}

pub(super) async fn predict(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Form(form): Form<ReviewForm>,
) -> Result<Html<String>, ApiError> {
    let prediction = state.service.predict(&form.review).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "sentiment inference failed");
        ApiError::new(req_id.0.clone(), "inference_error", "sentiment inference failed")
    })?;

    tracing::info!(
        request_id = %req_id.0,
        positive = prediction.is_positive(),
        review_chars = form.review.chars().count(),
        "review scored"
    );

    Ok(page::render(Some(&prediction)))
}
