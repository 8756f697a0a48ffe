//! Prompt constants for proposal generation.
//!
//! Templates use `{placeholder}` markers filled via `str::replace`.

use crate::models::site::SiteParams;
use crate::zoning::StructuralType;

/// System role for every proposal call: a licensed architect versed in
/// building codes.
pub const PROPOSAL_SYSTEM: &str = "あなたは建築法規に詳しい一級建築士です。";

pub const PROPOSAL_PROMPT_TEMPLATE: &str = "\
あなたは建築士です。
以下の敷地条件に基づき、「{structure}」構造で建てる場合の提案を出してください：

- 用途地域：{zone}
- 敷地面積：{site_area}㎡、建ぺい率：{coverage}%、容積率：{far}%
- 前面道路幅員：{road_width}m、防火指定：{fire_zone}
- 用途：{usage}

【用途地域に関する補足】
{zone_rule}

以下を含めてください：
1. 建築可能階数
2. 延床面積（概算、㎡）
3. 構造の特徴・用途例・法的注意点
4. 説明文章
";

/// Builds the per-structure user prompt from the submitted site parameters.
pub fn build_proposal_prompt(params: &SiteParams, structure: StructuralType) -> String {
    PROPOSAL_PROMPT_TEMPLATE
        .replace("{structure}", structure.label())
        .replace("{zone}", params.zoning_district.label())
        .replace("{site_area}", &fmt_number(params.site_area_m2))
        .replace("{coverage}", &fmt_number(params.coverage_ratio_pct))
        .replace("{far}", &fmt_number(params.floor_area_ratio_pct))
        .replace("{road_width}", &fmt_number(params.road_width_m))
        .replace("{fire_zone}", params.fire_zone.label())
        .replace("{usage}", params.building_use.trim())
        .replace("{zone_rule}", params.zoning_district.description())
}

/// Formats a numeric form value for prompt text: whole numbers without a
/// trailing ".0", fractional values as-is.
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoning::{FireZone, ZoningDistrict};

    fn params() -> SiteParams {
        SiteParams {
            site_area_m2: 150.0,
            coverage_ratio_pct: 60.0,
            floor_area_ratio_pct: 200.0,
            road_width_m: 4.5,
            building_use: "住宅".to_string(),
            fire_zone: FireZone::SemiFire,
            zoning_district: ZoningDistrict::LowRiseResidential1,
            structures: vec![StructuralType::Wood],
        }
    }

    #[test]
    fn test_prompt_embeds_every_site_parameter() {
        let prompt = build_proposal_prompt(&params(), StructuralType::Wood);
        assert!(prompt.contains("「木造」構造"));
        assert!(prompt.contains("用途地域：第一種低層住居専用地域"));
        assert!(prompt.contains("敷地面積：150㎡"));
        assert!(prompt.contains("建ぺい率：60%"));
        assert!(prompt.contains("容積率：200%"));
        assert!(prompt.contains("前面道路幅員：4.5m"));
        assert!(prompt.contains("防火指定：準防火地域"));
        assert!(prompt.contains("用途：住宅"));
        assert!(prompt.contains(ZoningDistrict::LowRiseResidential1.description()));
    }

    #[test]
    fn test_prompt_leaves_no_unfilled_placeholders() {
        let prompt = build_proposal_prompt(&params(), StructuralType::Steel);
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains('}'));
    }

    #[test]
    fn test_fmt_number_drops_trailing_zero() {
        assert_eq!(fmt_number(150.0), "150");
        assert_eq!(fmt_number(4.5), "4.5");
        assert_eq!(fmt_number(0.0), "0");
    }
}
