//! Axum route handlers for the Proposal API.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    Json,
};

use crate::errors::AppError;
use crate::generation::generator::generate_proposals;
use crate::models::proposal::ProposalSet;
use crate::models::site::SiteParams;
use crate::report::render_report;
use crate::state::AppState;

/// PDF download filename: 建築提案書.pdf (RFC 5987 encoding), with an ASCII
/// fallback for clients that ignore `filename*`.
const REPORT_CONTENT_DISPOSITION: &str = "attachment; filename=\"proposal.pdf\"; \
     filename*=UTF-8''%E5%BB%BA%E7%AF%89%E6%8F%90%E6%A1%88%E6%9B%B8.pdf";

/// POST /api/v1/proposals
///
/// Runs the full pipeline and returns the proposal set as JSON: one record
/// per allowed structural type, the cost-comparison table, and any zoning or
/// generation warnings.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(params): Json<SiteParams>,
) -> Result<Json<ProposalSet>, AppError> {
    let set = generate_proposals(&state.llm, &params).await?;
    Ok(Json(set))
}

/// POST /api/v1/proposals/report
///
/// Same pipeline, then renders the proposal set as a paginated PDF and
/// returns it as a download. Rendering problems (missing font, encoding)
/// surface as errors — never a silently corrupted document.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(params): Json<SiteParams>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let set = generate_proposals(&state.llm, &params).await?;
    let pdf = render_report(&set, &state.config.font_path)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(REPORT_CONTENT_DISPOSITION),
    );
    Ok((headers, pdf))
}
