//! # 几何模型
//!
//! 由手性指数 (n, m) 计算纳米管直径、电子类型与带隙。
//!
//! ## 公式
//! - 直径: d = (a / π) · √(n² + n·m + m²)
//! - 类型: (n − m) mod 3 == 0 → 金属性，否则半导体性
//! - 带隙: 金属性为 0，半导体性为 0.7 / d
//!
//! 单根管与手性图网格共用 [`lattice_point`]，两处调用只在
//! 退化点 (0, 0) 的处理策略上不同。
//!
//! ## 依赖关系
//! - 被 `physics/` 下其他模型和 `explorer.rs` 使用
//! - 使用 `physics/constants.rs`

use crate::error::{CntError, Result};
use crate::physics::constants::{
    BANDGAP_COEFFICIENT, GRID_FALLBACK_DIAMETER_NM, INDEX_MAX, LATTICE_CONSTANT_NM, M_MIN, N_MIN,
};

use serde::Serialize;
use std::f64::consts::PI;

/// 手性指数 (n, m)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChiralityIndices {
    pub n: u32,
    pub m: u32,
}

impl ChiralityIndices {
    /// 校验并创建手性指数
    ///
    /// (0, 0) 报告为退化管；其余越界值报告为 `OutOfRange`。
    pub fn new(n: u32, m: u32) -> Result<Self> {
        if n == 0 && m == 0 {
            return Err(CntError::DegenerateTube { n, m });
        }
        check_index("n", n, N_MIN)?;
        check_index("m", m, M_MIN)?;
        Ok(Self { n, m })
    }
}

impl std::fmt::Display for ChiralityIndices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}

fn check_index(name: &'static str, value: u32, min: u32) -> Result<()> {
    if value < min || value > INDEX_MAX {
        return Err(CntError::out_of_range(
            name,
            value as f64,
            min as f64,
            INDEX_MAX as f64,
        ));
    }
    Ok(())
}

/// 电子类型
///
/// 带隙只存在于半导体变体中，金属管不可能携带非零带隙。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElectronicType {
    Metallic,
    Semiconducting { bandgap_ev: f64 },
}

impl ElectronicType {
    /// 带隙（eV），金属管恰好为 0
    pub fn bandgap_ev(&self) -> f64 {
        match self {
            ElectronicType::Metallic => 0.0,
            ElectronicType::Semiconducting { bandgap_ev } => *bandgap_ev,
        }
    }

    pub fn is_metallic(&self) -> bool {
        matches!(self, ElectronicType::Metallic)
    }

    /// 显示用标签
    pub fn label(&self) -> &'static str {
        match self {
            ElectronicType::Metallic => "Metallic",
            ElectronicType::Semiconducting { .. } => "Semiconducting",
        }
    }
}

impl std::fmt::Display for ElectronicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// (0, 0) 退化点的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// 直接报错（单根管）
    Reject,
    /// 使用回退直径（手性图网格）
    Fallback,
}

/// 单个格点的计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    /// 直径（nm）
    pub diameter_nm: f64,
    pub electronic: ElectronicType,
}

/// 在整数格点 (i, j) 上求直径与电子类型
///
/// 单根管和手性图都走这里，保证两处公式一致。
pub fn lattice_point(i: u32, j: u32, policy: DegeneratePolicy) -> Result<LatticePoint> {
    let diameter_nm = if i == 0 && j == 0 {
        match policy {
            DegeneratePolicy::Reject => return Err(CntError::DegenerateTube { n: i, m: j }),
            DegeneratePolicy::Fallback => GRID_FALLBACK_DIAMETER_NM,
        }
    } else {
        diameter_from_indices(i, j)
    };

    let electronic = if is_metallic_pair(i, j) {
        ElectronicType::Metallic
    } else {
        ElectronicType::Semiconducting {
            bandgap_ev: BANDGAP_COEFFICIENT / diameter_nm,
        }
    };

    Ok(LatticePoint {
        diameter_nm,
        electronic,
    })
}

/// d = (a / π) · √(n² + n·m + m²)
fn diameter_from_indices(n: u32, m: u32) -> f64 {
    let (n, m) = (n as f64, m as f64);
    (LATTICE_CONSTANT_NM / PI) * (n * n + n * m + m * m).sqrt()
}

/// (n − m) mod 3 == 0，使用欧几里得取模
fn is_metallic_pair(n: u32, m: u32) -> bool {
    (n as i64 - m as i64).rem_euclid(3) == 0
}

/// 纳米管几何与电子结构
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    pub indices: ChiralityIndices,
    /// 直径（nm）
    pub diameter_nm: f64,
    pub electronic: ElectronicType,
}

impl TubeGeometry {
    /// 由 (n, m) 直接计算
    pub fn new(n: u32, m: u32) -> Result<Self> {
        Self::from_indices(ChiralityIndices::new(n, m)?)
    }

    /// 由已校验的手性指数计算
    pub fn from_indices(indices: ChiralityIndices) -> Result<Self> {
        let point = lattice_point(indices.n, indices.m, DegeneratePolicy::Reject)?;
        Ok(Self {
            indices,
            diameter_nm: point.diameter_nm,
            electronic: point.electronic,
        })
    }

    pub fn is_metallic(&self) -> bool {
        self.electronic.is_metallic()
    }

    pub fn bandgap_ev(&self) -> f64 {
        self.electronic.bandgap_ev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armchair_like_12_6_is_metallic() {
        let tube = TubeGeometry::new(12, 6).unwrap();
        assert!(
            (tube.diameter_nm - 1.2430).abs() < 1e-3,
            "(12,6) diameter should be ~1.2430 nm, got {}",
            tube.diameter_nm
        );
        assert!(tube.is_metallic());
        assert_eq!(tube.bandgap_ev(), 0.0);
    }

    #[test]
    fn test_zigzag_10_0_is_semiconducting() {
        let tube = TubeGeometry::new(10, 0).unwrap();
        assert!((tube.diameter_nm - 0.7831).abs() < 1e-3);
        assert!(!tube.is_metallic());
        assert!(
            (tube.bandgap_ev() - 0.8939).abs() < 1e-3,
            "(10,0) bandgap should be ~0.8939 eV, got {}",
            tube.bandgap_ev()
        );
    }

    #[test]
    fn test_smallest_tube_1_0() {
        let tube = TubeGeometry::new(1, 0).unwrap();
        assert!((tube.diameter_nm - 0.0783).abs() < 1e-4);
        assert!(!tube.is_metallic());
        assert!((tube.bandgap_ev() - 8.94).abs() < 0.01);
    }

    #[test]
    fn test_zero_zero_is_degenerate() {
        let err = TubeGeometry::new(0, 0).unwrap_err();
        assert!(matches!(err, CntError::DegenerateTube { n: 0, m: 0 }));
    }

    #[test]
    fn test_out_of_range_indices() {
        assert!(matches!(
            ChiralityIndices::new(0, 3),
            Err(CntError::OutOfRange { name: "n", .. })
        ));
        assert!(matches!(
            ChiralityIndices::new(201, 0),
            Err(CntError::OutOfRange { name: "n", .. })
        ));
        assert!(matches!(
            ChiralityIndices::new(5, 201),
            Err(CntError::OutOfRange { name: "m", .. })
        ));
        assert!(ChiralityIndices::new(200, 200).is_ok());
    }

    #[test]
    fn test_metallic_rule_and_bandgap_over_index_space() {
        for n in 1..=30u32 {
            for m in 0..=30u32 {
                let tube = TubeGeometry::new(n, m).unwrap();
                assert!(tube.diameter_nm > 0.0);
                if (n as i64 - m as i64).rem_euclid(3) == 0 {
                    assert!(tube.is_metallic(), "({},{}) should be metallic", n, m);
                    assert_eq!(tube.bandgap_ev(), 0.0);
                } else {
                    assert!(!tube.is_metallic(), "({},{}) should be semiconducting", n, m);
                    assert_eq!(tube.bandgap_ev(), 0.7 / tube.diameter_nm);
                    assert!(tube.bandgap_ev() > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_diameter_monotonic_in_norm() {
        let mut tubes: Vec<(f64, f64)> = Vec::new();
        for n in 1..=20u32 {
            for m in 0..=20u32 {
                let norm = ((n * n + n * m + m * m) as f64).sqrt();
                tubes.push((norm, TubeGeometry::new(n, m).unwrap().diameter_nm));
            }
        }
        tubes.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for pair in tubes.windows(2) {
            assert!(pair[1].1 >= pair[0].1);
        }
    }

    #[test]
    fn test_recompute_is_bit_identical() {
        let a = TubeGeometry::new(17, 4).unwrap();
        let b = TubeGeometry::new(17, 4).unwrap();
        assert_eq!(a.diameter_nm.to_bits(), b.diameter_nm.to_bits());
        assert_eq!(a.bandgap_ev().to_bits(), b.bandgap_ev().to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_fallback_policy_at_origin() {
        let point = lattice_point(0, 0, DegeneratePolicy::Fallback).unwrap();
        assert_eq!(point.diameter_nm, GRID_FALLBACK_DIAMETER_NM);
        // (0 - 0) mod 3 == 0，原点落在金属线上
        assert!(point.electronic.is_metallic());
        assert!(lattice_point(0, 0, DegeneratePolicy::Reject).is_err());
    }

    #[test]
    fn test_fallback_policy_matches_reject_elsewhere() {
        for (i, j) in [(1, 0), (3, 2), (7, 7), (0, 4)] {
            let a = lattice_point(i, j, DegeneratePolicy::Fallback).unwrap();
            let b = lattice_point(i, j, DegeneratePolicy::Reject).unwrap();
            assert_eq!(a, b);
        }
    }
}
