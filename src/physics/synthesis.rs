//! # 合成方法推荐（规则引擎）
//!
//! 按直径阈值选择合成工艺：
//! - d < 1 nm → 激光烧蚀 / 电弧放电
//! - 1 ≤ d < 2 nm → CVD / PECVD
//! - d ≥ 2 nm → 纤维 / 多壁管生长

use serde::Serialize;

/// 推荐的合成方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SynthesisRecommendation {
    LaserAblationArcDischarge,
    CvdPecvd,
    FiberMwcntGrowth,
}

impl SynthesisRecommendation {
    /// 由直径（nm）选择
    pub fn for_diameter(diameter_nm: f64) -> Self {
        if diameter_nm < 1.0 {
            SynthesisRecommendation::LaserAblationArcDischarge
        } else if diameter_nm < 2.0 {
            SynthesisRecommendation::CvdPecvd
        } else {
            SynthesisRecommendation::FiberMwcntGrowth
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SynthesisRecommendation::LaserAblationArcDischarge => "Laser Ablation / Arc Discharge",
            SynthesisRecommendation::CvdPecvd => "CVD / PECVD",
            SynthesisRecommendation::FiberMwcntGrowth => "Fiber / MWCNT growth",
        }
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            SynthesisRecommendation::LaserAblationArcDischarge => "smaller diameter SWCNTs",
            SynthesisRecommendation::CvdPecvd => "alignment + chirality tuning",
            SynthesisRecommendation::FiberMwcntGrowth => "mechanical stability",
        }
    }
}

impl std::fmt::Display for SynthesisRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_at_one() {
        assert_eq!(
            SynthesisRecommendation::for_diameter(0.999_999),
            SynthesisRecommendation::LaserAblationArcDischarge
        );
        assert_eq!(
            SynthesisRecommendation::for_diameter(1.0),
            SynthesisRecommendation::CvdPecvd
        );
    }

    #[test]
    fn test_breakpoint_at_two() {
        assert_eq!(
            SynthesisRecommendation::for_diameter(1.999_999),
            SynthesisRecommendation::CvdPecvd
        );
        assert_eq!(
            SynthesisRecommendation::for_diameter(2.0),
            SynthesisRecommendation::FiberMwcntGrowth
        );
    }

    #[test]
    fn test_real_tubes() {
        use crate::physics::geometry::TubeGeometry;

        let small = TubeGeometry::new(10, 0).unwrap();
        let medium = TubeGeometry::new(12, 6).unwrap();
        let large = TubeGeometry::new(30, 0).unwrap();
        assert_eq!(
            SynthesisRecommendation::for_diameter(small.diameter_nm),
            SynthesisRecommendation::LaserAblationArcDischarge
        );
        assert_eq!(
            SynthesisRecommendation::for_diameter(medium.diameter_nm),
            SynthesisRecommendation::CvdPecvd
        );
        assert_eq!(
            SynthesisRecommendation::for_diameter(large.diameter_nm),
            SynthesisRecommendation::FiberMwcntGrowth
        );
    }
}
