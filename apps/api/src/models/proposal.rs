//! Per-structure proposal records and the cost-comparison table.

use serde::{Deserialize, Serialize};

use crate::zoning::{StructuralType, StructureFilterOutcome};

/// Where a record's floor-area figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorAreaSource {
    /// Parsed out of the generated proposal text.
    Extracted,
    /// floor(site_area × floor_area_ratio / 100) — used when the text
    /// carries no recognizable floor-area figure.
    Fallback,
}

/// One generated proposal for one structural type. Created once per allowed
/// structural type per submission and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub structure: StructuralType,
    /// Estimated total floor area in m².
    pub floor_area_m2: u64,
    /// Unit price in yen per m² for this structural type.
    pub unit_price: u64,
    /// Exactly floor_area_m2 × unit_price, in yen.
    pub estimated_cost: u64,
    pub floor_area_source: FloorAreaSource,
    /// The full generated proposal text, whitespace-trimmed.
    pub proposal_text: String,
}

/// One row of the cost-comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct CostLine {
    pub structure: StructuralType,
    pub floor_area_m2: u64,
    pub unit_price: u64,
    pub estimated_cost: u64,
}

impl From<&ProposalRecord> for CostLine {
    fn from(record: &ProposalRecord) -> Self {
        CostLine {
            structure: record.structure,
            floor_area_m2: record.floor_area_m2,
            unit_price: record.unit_price,
            estimated_cost: record.estimated_cost,
        }
    }
}

/// The complete result of one submission: records in generation order plus
/// the warnings accumulated along the way.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalSet {
    pub records: Vec<ProposalRecord>,
    pub cost_table: Vec<CostLine>,
    /// Structures excluded by the zoning filter, surfaced as warnings.
    pub excluded: Vec<StructuralType>,
    /// Human-readable warnings (zoning exclusions, per-structure generation
    /// failures that did not abort the submission).
    pub warnings: Vec<String>,
}

impl ProposalSet {
    pub fn from_outcome(outcome: &StructureFilterOutcome) -> Self {
        let mut warnings = Vec::new();
        if !outcome.excluded.is_empty() {
            let names: Vec<&str> = outcome.excluded.iter().map(|s| s.label()).collect();
            warnings.push(format!(
                "以下の構造は用途地域の制限により除外されました: {}",
                names.join("、")
            ));
        }
        ProposalSet {
            records: Vec::new(),
            cost_table: Vec::new(),
            excluded: outcome.excluded.clone(),
            warnings,
        }
    }

    pub fn push(&mut self, record: ProposalRecord) {
        self.cost_table.push(CostLine::from(&record));
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoning::filter_structures;
    use crate::zoning::ZoningDistrict;

    #[test]
    fn test_cost_line_mirrors_record() {
        let record = ProposalRecord {
            structure: StructuralType::Wood,
            floor_area_m2: 300,
            unit_price: 350_000,
            estimated_cost: 105_000_000,
            floor_area_source: FloorAreaSource::Fallback,
            proposal_text: "木造3階建ての住宅を提案します。".to_string(),
        };
        let line = CostLine::from(&record);
        assert_eq!(line.structure, StructuralType::Wood);
        assert_eq!(line.floor_area_m2, 300);
        assert_eq!(line.estimated_cost, 105_000_000);
    }

    #[test]
    fn test_exclusion_warning_lists_structure_labels() {
        let outcome = filter_structures(
            &[StructuralType::Wood, StructuralType::Steel],
            ZoningDistrict::LowRiseResidential1,
        );
        let set = ProposalSet::from_outcome(&outcome);
        assert_eq!(set.excluded, vec![StructuralType::Steel]);
        assert_eq!(set.warnings.len(), 1);
        assert!(set.warnings[0].contains("S造（鉄骨造）"));
    }

    #[test]
    fn test_no_warning_when_nothing_excluded() {
        let outcome = filter_structures(&[StructuralType::Wood], ZoningDistrict::Commercial);
        let set = ProposalSet::from_outcome(&outcome);
        assert!(set.warnings.is_empty());
    }

    #[test]
    fn test_push_keeps_table_in_step_with_records() {
        let outcome = filter_structures(&[StructuralType::Steel], ZoningDistrict::Commercial);
        let mut set = ProposalSet::from_outcome(&outcome);
        set.push(ProposalRecord {
            structure: StructuralType::Steel,
            floor_area_m2: 120,
            unit_price: 400_000,
            estimated_cost: 48_000_000,
            floor_area_source: FloorAreaSource::Extracted,
            proposal_text: "提案".to_string(),
        });
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.cost_table.len(), 1);
        assert_eq!(set.cost_table[0].estimated_cost, 48_000_000);
    }
}
