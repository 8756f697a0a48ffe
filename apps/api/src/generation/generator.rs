//! Proposal generation — orchestrates the full submission pipeline.
//!
//! Flow: validate → filter structures against zoning → per allowed structure:
//!       build prompt → LLM call → floor-area extraction → cost estimate.
//!
//! Calls run sequentially, one per structural type, with no retry. A failure
//! for one structural type is recorded as a warning and the remaining types
//! still run; the submission only fails outright when every type fails.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::extract::{extract_floor_area, fallback_floor_area};
use crate::generation::prompts::{build_proposal_prompt, PROPOSAL_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::proposal::{FloorAreaSource, ProposalRecord, ProposalSet};
use crate::models::site::SiteParams;
use crate::zoning::{filter_structures, StructuralType};

/// Runs the full proposal pipeline for one submission.
///
/// Steps:
/// 1. validate site parameters
/// 2. filter the selection against the district's permitted set
///    (empty result halts here — no external call is made)
/// 3. for each allowed structure: prompt → LLM → extract/fallback → cost
/// 4. fail only if no structural type produced a proposal
pub async fn generate_proposals(
    llm: &LlmClient,
    params: &SiteParams,
) -> Result<ProposalSet, AppError> {
    params.validate()?;

    let outcome = filter_structures(&params.structures, params.zoning_district);
    if !outcome.excluded.is_empty() {
        warn!(
            "Zoning filter excluded {} structure(s) for {}",
            outcome.excluded.len(),
            params.zoning_district.label()
        );
    }
    if outcome.allowed.is_empty() {
        return Err(AppError::Validation(
            "有効な構造がありません。用途地域と構造の組み合わせを確認してください。".to_string(),
        ));
    }

    let mut set = ProposalSet::from_outcome(&outcome);
    let mut failures = 0usize;

    for &structure in &outcome.allowed {
        info!("Generating proposal for {}", structure.label());
        let prompt = build_proposal_prompt(params, structure);

        match llm.call(&prompt, PROPOSAL_SYSTEM).await {
            Ok(text) => match assemble_record(params, structure, text) {
                Ok(record) => {
                    info!(
                        "Proposal for {}: floor_area={}m² ({:?}), cost={} yen",
                        structure.label(),
                        record.floor_area_m2,
                        record.floor_area_source,
                        record.estimated_cost
                    );
                    set.push(record);
                }
                Err(e) => {
                    warn!("Cost estimation failed for {}: {e}", structure.label());
                    failures += 1;
                    set.warnings.push(format!(
                        "「{}」の概算費用を算出できませんでした: {e}",
                        structure.label()
                    ));
                }
            },
            Err(e) => {
                warn!("Proposal generation failed for {}: {e}", structure.label());
                failures += 1;
                set.warnings.push(format!(
                    "「{}」の提案生成に失敗しました: {e}",
                    structure.label()
                ));
            }
        }
    }

    if set.records.is_empty() {
        return Err(AppError::Llm(format!(
            "Proposal generation failed for all {failures} allowed structural type(s)"
        )));
    }

    Ok(set)
}

/// Builds one immutable proposal record from generated text: extracts the
/// floor-area figure (or falls back to the deterministic estimate) and
/// computes the exact cost. Pure — no I/O.
///
/// The cost multiply is checked: a floor area large enough to overflow u64
/// yen (whether extracted from model output or produced by the fallback from
/// an absurd site area) is an error, never a wrapped figure.
pub fn assemble_record(
    params: &SiteParams,
    structure: StructuralType,
    proposal_text: String,
) -> Result<ProposalRecord, AppError> {
    let (floor_area_m2, floor_area_source) = match extract_floor_area(&proposal_text) {
        Some(area) => (area, FloorAreaSource::Extracted),
        None => (
            fallback_floor_area(params.site_area_m2, params.floor_area_ratio_pct),
            FloorAreaSource::Fallback,
        ),
    };
    let unit_price = structure.unit_price();
    let estimated_cost = floor_area_m2.checked_mul(unit_price).ok_or_else(|| {
        AppError::Validation(format!(
            "floor area {} m² for {} puts the estimated cost outside the supported range",
            floor_area_m2,
            structure.label()
        ))
    })?;

    Ok(ProposalRecord {
        structure,
        floor_area_m2,
        unit_price,
        estimated_cost,
        floor_area_source,
        proposal_text,
    })
}
