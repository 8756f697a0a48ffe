//! Submitted site parameters. Immutable once validated.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::zoning::{FireZone, StructuralType, ZoningDistrict};

/// One form submission: the site conditions plus the structural types the
/// user wants compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteParams {
    /// Site area in m². Must be positive.
    pub site_area_m2: f64,
    /// Building coverage ratio (建ぺい率) in percent.
    pub coverage_ratio_pct: f64,
    /// Floor-area ratio (容積率) in percent.
    pub floor_area_ratio_pct: f64,
    /// Front road width (前面道路幅員) in metres.
    pub road_width_m: f64,
    /// Intended building use, free text (e.g. 住宅).
    pub building_use: String,
    pub fire_zone: FireZone,
    pub zoning_district: ZoningDistrict,
    /// Structural types to compare. Filtered against the district's
    /// permitted set before any generation happens.
    pub structures: Vec<StructuralType>,
}

impl SiteParams {
    /// Rejects submissions the pipeline cannot work with. The fallback
    /// floor-area estimate depends on site area and floor-area ratio being
    /// finite and non-negative, so those are hard requirements.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.site_area_m2.is_finite() || self.site_area_m2 <= 0.0 {
            return Err(AppError::Validation(
                "site_area_m2 must be a positive number".to_string(),
            ));
        }
        if !self.coverage_ratio_pct.is_finite() || self.coverage_ratio_pct < 0.0 {
            return Err(AppError::Validation(
                "coverage_ratio_pct must be a non-negative number".to_string(),
            ));
        }
        if !self.floor_area_ratio_pct.is_finite() || self.floor_area_ratio_pct < 0.0 {
            return Err(AppError::Validation(
                "floor_area_ratio_pct must be a non-negative number".to_string(),
            ));
        }
        if !self.road_width_m.is_finite() || self.road_width_m < 0.0 {
            return Err(AppError::Validation(
                "road_width_m must be a non-negative number".to_string(),
            ));
        }
        if self.building_use.trim().is_empty() {
            return Err(AppError::Validation(
                "building_use cannot be empty".to_string(),
            ));
        }
        if self.structures.is_empty() {
            return Err(AppError::Validation(
                "at least one structural type must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> SiteParams {
        SiteParams {
            site_area_m2: 150.0,
            coverage_ratio_pct: 60.0,
            floor_area_ratio_pct: 200.0,
            road_width_m: 4.0,
            building_use: "住宅".to_string(),
            fire_zone: FireZone::None,
            zoning_district: ZoningDistrict::LowRiseResidential1,
            structures: vec![StructuralType::Wood],
        }
    }

    #[test]
    fn test_valid_params_pass() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_zero_site_area_rejected() {
        let mut p = valid_params();
        p.site_area_m2 = 0.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_nan_ratio_rejected() {
        let mut p = valid_params();
        p.floor_area_ratio_pct = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_blank_building_use_rejected() {
        let mut p = valid_params();
        p.building_use = "  ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_empty_structure_selection_rejected() {
        let mut p = valid_params();
        p.structures.clear();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_site_params_deserializes_from_form_json() {
        let json = serde_json::json!({
            "site_area_m2": 150,
            "coverage_ratio_pct": 60,
            "floor_area_ratio_pct": 200,
            "road_width_m": 4.0,
            "building_use": "住宅",
            "fire_zone": "準防火地域",
            "zoning_district": "第一種低層住居専用地域",
            "structures": ["木造", "RC造（鉄筋コンクリート造）"]
        });
        let params: SiteParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.fire_zone, FireZone::SemiFire);
        assert_eq!(params.zoning_district, ZoningDistrict::LowRiseResidential1);
        assert_eq!(params.structures.len(), 2);
    }
}
