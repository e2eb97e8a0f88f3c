//! # 能带结构近似
//!
//! 简化的 Dirac 锥 / 有效质量模型，不是真实的紧束缚能带：
//! - 金属管: E(k) = 0.2·k
//! - 半导体管: E(k) = √((Eg/2)² + 0.25·k²)
//!
//! ## 依赖关系
//! - 被 `explorer.rs` 和 `commands/bands.rs` 使用
//! - 使用 `physics/geometry.rs` 的 ElectronicType

use crate::physics::constants::{
    linspace, BAND_POINTS, K_MAX, METALLIC_SLOPE, SEMICONDUCTING_CURVATURE,
};
use crate::physics::geometry::{ElectronicType, TubeGeometry};

use serde::Serialize;

/// 能带曲线上的一个点
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandPoint {
    /// 波矢（a.u.）
    pub k: f64,
    /// 导带能量（eV）
    pub conduction: f64,
    /// 价带能量（eV）
    pub valence: f64,
}

/// 能带曲线
#[derive(Debug, Clone)]
pub struct BandCurve {
    pub electronic: ElectronicType,
    pub points: Vec<BandPoint>,
}

impl BandCurve {
    /// 在默认波矢网格上计算能带
    pub fn compute(tube: &TubeGeometry) -> Self {
        Self::compute_on(tube.electronic, &linspace(-K_MAX, K_MAX, BAND_POINTS))
    }

    /// 在给定波矢上计算能带
    pub fn compute_on(electronic: ElectronicType, ks: &[f64]) -> Self {
        let points = ks
            .iter()
            .map(|&k| {
                let e = dispersion(electronic, k);
                BandPoint {
                    k,
                    conduction: e,
                    valence: -e,
                }
            })
            .collect();
        Self { electronic, points }
    }

    /// 能量范围 (min, max)
    pub fn energy_range(&self) -> (f64, f64) {
        self.points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), p| {
                (
                    lo.min(p.conduction).min(p.valence),
                    hi.max(p.conduction).max(p.valence),
                )
            },
        )
    }
}

fn dispersion(electronic: ElectronicType, k: f64) -> f64 {
    match electronic {
        ElectronicType::Metallic => METALLIC_SLOPE * k,
        ElectronicType::Semiconducting { bandgap_ev } => {
            let half_gap = bandgap_ev / 2.0;
            (half_gap * half_gap + SEMICONDUCTING_CURVATURE * k * k).sqrt()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metallic_bands_are_linear() {
        let tube = TubeGeometry::new(12, 6).unwrap();
        let curve = BandCurve::compute(&tube);
        assert_eq!(curve.points.len(), 400);
        for p in &curve.points {
            assert_eq!(p.conduction, 0.2 * p.k);
            assert_eq!(p.valence, -p.conduction);
        }
        assert_eq!(curve.points[0].k, -3.0);
        assert_eq!(curve.points[399].k, 3.0);
    }

    #[test]
    fn test_semiconducting_bands_open_a_gap() {
        let tube = TubeGeometry::new(10, 0).unwrap();
        let curve = BandCurve::compute_on(tube.electronic, &[0.0, 1.0, -1.0]);
        let half_gap = tube.bandgap_ev() / 2.0;
        assert!((curve.points[0].conduction - half_gap).abs() < 1e-12);
        assert!((curve.points[0].valence + half_gap).abs() < 1e-12);
        // 对称
        assert_eq!(curve.points[1].conduction, curve.points[2].conduction);
        for p in &curve.points {
            assert!(p.conduction >= half_gap);
        }
    }

    #[test]
    fn test_energy_range() {
        let tube = TubeGeometry::new(12, 6).unwrap();
        let (lo, hi) = BandCurve::compute(&tube).energy_range();
        assert!((lo + 0.6).abs() < 1e-12);
        assert!((hi - 0.6).abs() < 1e-12);
    }
}
