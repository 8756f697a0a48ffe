//! Zoning rule tables and the structure filter.
//!
//! All tables are static and immutable: district descriptions, the
//! district → permitted-structure mapping, and per-structure unit prices
//! are baked in at compile time and never mutated at runtime.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Structural types
// ────────────────────────────────────────────────────────────────────────────

/// Primary structural system of a building. Wire labels are the Japanese
/// names used on the form and in generated reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralType {
    #[serde(rename = "木造")]
    Wood,
    #[serde(rename = "RC造（鉄筋コンクリート造）")]
    ReinforcedConcrete,
    #[serde(rename = "S造（鉄骨造）")]
    Steel,
}

impl StructuralType {
    pub const ALL: [StructuralType; 3] = [
        StructuralType::Wood,
        StructuralType::ReinforcedConcrete,
        StructuralType::Steel,
    ];

    /// Display label, identical to the wire label.
    pub fn label(&self) -> &'static str {
        match self {
            StructuralType::Wood => "木造",
            StructuralType::ReinforcedConcrete => "RC造（鉄筋コンクリート造）",
            StructuralType::Steel => "S造（鉄骨造）",
        }
    }

    /// Construction unit price in yen per m² of floor area.
    pub fn unit_price(&self) -> u64 {
        match self {
            StructuralType::Wood => 350_000,
            StructuralType::ReinforcedConcrete => 500_000,
            StructuralType::Steel => 400_000,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fire-zone designation
// ────────────────────────────────────────────────────────────────────────────

/// Fire-zone designation of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireZone {
    #[serde(rename = "なし")]
    None,
    #[serde(rename = "準防火地域")]
    SemiFire,
    #[serde(rename = "防火地域")]
    Fire,
}

impl FireZone {
    pub fn label(&self) -> &'static str {
        match self {
            FireZone::None => "なし",
            FireZone::SemiFire => "準防火地域",
            FireZone::Fire => "防火地域",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Zoning districts
// ────────────────────────────────────────────────────────────────────────────

/// The 12 statutory zoning districts (用途地域) under the City Planning Act
/// plus the unzoned catch-all. Wire labels are the statutory Japanese names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoningDistrict {
    #[serde(rename = "第一種低層住居専用地域")]
    LowRiseResidential1,
    #[serde(rename = "第二種低層住居専用地域")]
    LowRiseResidential2,
    #[serde(rename = "第一種中高層住居専用地域")]
    MidHighRiseResidential1,
    #[serde(rename = "第二種中高層住居専用地域")]
    MidHighRiseResidential2,
    #[serde(rename = "第一種住居地域")]
    Residential1,
    #[serde(rename = "第二種住居地域")]
    Residential2,
    #[serde(rename = "準住居地域")]
    QuasiResidential,
    #[serde(rename = "近隣商業地域")]
    NeighborhoodCommercial,
    #[serde(rename = "商業地域")]
    Commercial,
    #[serde(rename = "準工業地域")]
    QuasiIndustrial,
    #[serde(rename = "工業地域")]
    Industrial,
    #[serde(rename = "工業専用地域")]
    ExclusiveIndustrial,
    #[serde(rename = "用途地域外（白地）")]
    Unzoned,
}

impl ZoningDistrict {
    pub const ALL: [ZoningDistrict; 13] = [
        ZoningDistrict::LowRiseResidential1,
        ZoningDistrict::LowRiseResidential2,
        ZoningDistrict::MidHighRiseResidential1,
        ZoningDistrict::MidHighRiseResidential2,
        ZoningDistrict::Residential1,
        ZoningDistrict::Residential2,
        ZoningDistrict::QuasiResidential,
        ZoningDistrict::NeighborhoodCommercial,
        ZoningDistrict::Commercial,
        ZoningDistrict::QuasiIndustrial,
        ZoningDistrict::Industrial,
        ZoningDistrict::ExclusiveIndustrial,
        ZoningDistrict::Unzoned,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ZoningDistrict::LowRiseResidential1 => "第一種低層住居専用地域",
            ZoningDistrict::LowRiseResidential2 => "第二種低層住居専用地域",
            ZoningDistrict::MidHighRiseResidential1 => "第一種中高層住居専用地域",
            ZoningDistrict::MidHighRiseResidential2 => "第二種中高層住居専用地域",
            ZoningDistrict::Residential1 => "第一種住居地域",
            ZoningDistrict::Residential2 => "第二種住居地域",
            ZoningDistrict::QuasiResidential => "準住居地域",
            ZoningDistrict::NeighborhoodCommercial => "近隣商業地域",
            ZoningDistrict::Commercial => "商業地域",
            ZoningDistrict::QuasiIndustrial => "準工業地域",
            ZoningDistrict::Industrial => "工業地域",
            ZoningDistrict::ExclusiveIndustrial => "工業専用地域",
            ZoningDistrict::Unzoned => "用途地域外（白地）",
        }
    }

    /// Informational rule summary for the district. Embedded in prompts and
    /// shown to the user; carries no machine-checked semantics.
    pub fn description(&self) -> &'static str {
        match self {
            ZoningDistrict::LowRiseResidential1 => {
                "建ぺい率30〜60%、容積率50〜100%、高さ制限10mまたは12m、日影規制あり、住居専用"
            }
            ZoningDistrict::LowRiseResidential2 => "第一種と同様だが、小規模店舗・事務所も可",
            ZoningDistrict::MidHighRiseResidential1 => {
                "住居を中心、共同住宅可、学校・病院なども可、日影制限あり"
            }
            ZoningDistrict::MidHighRiseResidential2 => {
                "第一種よりやや用途が広く、店舗もある程度可"
            }
            ZoningDistrict::Residential1 => "住居中心、大規模店舗は不可",
            ZoningDistrict::Residential2 => "第一種より広範、ホテル・カラオケ等も可",
            ZoningDistrict::QuasiResidential => "幹線道路沿いの用途混在可、商業・住宅併用可",
            ZoningDistrict::NeighborhoodCommercial => "小規模商業＋住居可、騒音規制あり",
            ZoningDistrict::Commercial => "商業中心、住宅・共同住宅可、高容積率、防火地域あり",
            ZoningDistrict::QuasiIndustrial => "工場・住宅・商業混在可、環境悪化施設不可",
            ZoningDistrict::Industrial => "住宅も建築可、用途制限あり、規模の大きな施設可",
            ZoningDistrict::ExclusiveIndustrial => "住宅建築不可、工場専用、高容積率",
            ZoningDistrict::Unzoned => "用途制限なし（都市計画区域外）",
        }
    }

    /// Structural types permitted in this district, in canonical order.
    pub fn permitted_structures(&self) -> &'static [StructuralType] {
        use StructuralType::*;
        match self {
            ZoningDistrict::LowRiseResidential1 | ZoningDistrict::LowRiseResidential2 => {
                &[Wood, ReinforcedConcrete]
            }
            ZoningDistrict::QuasiIndustrial
            | ZoningDistrict::Industrial
            | ZoningDistrict::ExclusiveIndustrial => &[ReinforcedConcrete, Steel],
            _ => &[Wood, ReinforcedConcrete, Steel],
        }
    }

    pub fn permits(&self, structure: StructuralType) -> bool {
        self.permitted_structures().contains(&structure)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Structure filter
// ────────────────────────────────────────────────────────────────────────────

/// Result of intersecting the user's selection with a district's permitted set.
#[derive(Debug, Clone, Serialize)]
pub struct StructureFilterOutcome {
    /// Selection ∩ permitted set, in selection order, deduplicated.
    pub allowed: Vec<StructuralType>,
    /// Selected structures the district restricts. Reported as a warning.
    pub excluded: Vec<StructuralType>,
}

/// Intersects the selected structural types with the district's permitted set.
///
/// `allowed` is always a subset of both the selection and the permitted set.
/// An empty `allowed` set means the submission cannot proceed; the caller
/// halts before any external call is made.
pub fn filter_structures(
    selection: &[StructuralType],
    district: ZoningDistrict,
) -> StructureFilterOutcome {
    let mut allowed = Vec::new();
    let mut excluded = Vec::new();
    for &structure in selection {
        if allowed.contains(&structure) || excluded.contains(&structure) {
            continue;
        }
        if district.permits(structure) {
            allowed.push(structure);
        } else {
            excluded.push(structure);
        }
    }
    StructureFilterOutcome { allowed, excluded }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
