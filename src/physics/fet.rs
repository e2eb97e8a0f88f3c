//! # CNT-FET 电流估算（弹道近似）
//!
//! Vt = Eg / 2，Id = max(0, β·(Vg − Vt)·Vd)。
//! 亚阈值电流定义为严格的 0，不计泄漏。
//!
//! ## 依赖关系
//! - 被 `explorer.rs`, `physics/comparison.rs` 和 `commands/device/` 使用

use crate::error::{CntError, Result};
use crate::physics::constants::{FET_BETA, VOLTAGE_MAX, VOLTAGE_MIN};
use crate::physics::geometry::TubeGeometry;

/// 器件偏置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceBias {
    /// 栅压（V）
    pub gate_v: f64,
    /// 漏压（V）
    pub drain_v: f64,
}

impl DeviceBias {
    /// 校验并创建偏置，两个电压都必须在 [0, 2] V 内
    pub fn new(gate_v: f64, drain_v: f64) -> Result<Self> {
        check_voltage("gate voltage", gate_v)?;
        check_voltage("drain voltage", drain_v)?;
        Ok(Self { gate_v, drain_v })
    }
}

fn check_voltage(name: &'static str, value: f64) -> Result<()> {
    if !(VOLTAGE_MIN..=VOLTAGE_MAX).contains(&value) {
        return Err(CntError::out_of_range(name, value, VOLTAGE_MIN, VOLTAGE_MAX));
    }
    Ok(())
}

/// 漏极电流估算
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetEstimate {
    pub bias: DeviceBias,
    /// 阈值电压（V）
    pub threshold_v: f64,
    /// 漏极电流（A），恒为非负
    pub drain_current_a: f64,
}

impl FetEstimate {
    pub fn compute(tube: &TubeGeometry, bias: DeviceBias) -> Self {
        let threshold_v = threshold_voltage(tube.bandgap_ev());
        let drain_current_a =
            clamp_non_negative(FET_BETA * (bias.gate_v - threshold_v) * bias.drain_v);
        Self {
            bias,
            threshold_v,
            drain_current_a,
        }
    }
}

/// Vt = Eg / 2
pub fn threshold_voltage(bandgap_ev: f64) -> f64 {
    bandgap_ev / 2.0
}

/// 负值与 -0.0 一律变为 +0.0
pub(crate) fn clamp_non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metallic_tube_conducts_from_zero_gate() {
        let tube = TubeGeometry::new(12, 6).unwrap();
        let est = FetEstimate::compute(&tube, DeviceBias::new(1.0, 1.0).unwrap());
        assert_eq!(est.threshold_v, 0.0);
        assert!((est.drain_current_a - 1e-5).abs() < 1e-15);
    }

    #[test]
    fn test_subthreshold_current_is_exactly_zero() {
        // (1,0): Eg ≈ 8.94 eV, Vt ≈ 4.47 V > 2 V
        let tube = TubeGeometry::new(1, 0).unwrap();
        let est = FetEstimate::compute(&tube, DeviceBias::new(2.0, 2.0).unwrap());
        assert_eq!(est.drain_current_a, 0.0);
        assert!(est.drain_current_a.is_sign_positive());
    }

    #[test]
    fn test_zero_drain_gives_positive_zero() {
        let tube = TubeGeometry::new(10, 0).unwrap();
        let est = FetEstimate::compute(&tube, DeviceBias::new(0.0, 0.0).unwrap());
        assert_eq!(est.drain_current_a, 0.0);
        assert!(est.drain_current_a.is_sign_positive());
    }

    #[test]
    fn test_current_never_negative() {
        let voltages = [0.0, 0.1, 0.45, 0.5, 1.0, 1.5, 2.0];
        for (n, m) in [(1, 0), (5, 3), (10, 0), (12, 6), (40, 1)] {
            let tube = TubeGeometry::new(n, m).unwrap();
            for &vg in &voltages {
                for &vd in &voltages {
                    let est = FetEstimate::compute(&tube, DeviceBias::new(vg, vd).unwrap());
                    assert!(est.drain_current_a >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_bias_out_of_range_rejected() {
        assert!(matches!(
            DeviceBias::new(2.1, 1.0),
            Err(CntError::OutOfRange { name: "gate voltage", .. })
        ));
        assert!(matches!(
            DeviceBias::new(1.0, -0.1),
            Err(CntError::OutOfRange { name: "drain voltage", .. })
        ));
        assert!(DeviceBias::new(f64::NAN, 1.0).is_err());
    }
}
