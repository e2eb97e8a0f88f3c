//! # CNT-FET 与硅 MOSFET 对比（定性）
//!
//! - CNT-FET: Id = max(0, β·(V − Vt))
//! - Si MOSFET: Id = µ·Cox·(W/L)·V²，简化平方律，不考虑饱和
//!
//! ## 依赖关系
//! - 被 `explorer.rs` 和 `commands/device/compare.rs` 使用
//! - 使用 `physics/fet.rs` 的阈值电压与截断

use crate::physics::constants::{
    linspace, FET_BETA, SI_ASPECT_RATIO, SI_MOBILITY, SI_OXIDE_CAPACITANCE, SWEEP_POINTS,
    VOLTAGE_MAX, VOLTAGE_MIN,
};
use crate::physics::fet::{clamp_non_negative, threshold_voltage};
use crate::physics::geometry::TubeGeometry;

use serde::Serialize;

/// 扫描中的一个点
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// 栅压（V）
    pub voltage: f64,
    /// CNT-FET 电流（A）
    pub cnt_current: f64,
    /// 硅 MOSFET 电流（A）
    pub si_current: f64,
}

/// 对比曲线
#[derive(Debug, Clone)]
pub struct DeviceComparison {
    pub threshold_v: f64,
    pub points: Vec<SweepPoint>,
}

impl DeviceComparison {
    pub fn compute(tube: &TubeGeometry) -> Self {
        let threshold_v = threshold_voltage(tube.bandgap_ev());
        let points = linspace(VOLTAGE_MIN, VOLTAGE_MAX, SWEEP_POINTS)
            .into_iter()
            .map(|v| SweepPoint {
                voltage: v,
                cnt_current: clamp_non_negative(FET_BETA * (v - threshold_v)),
                si_current: SI_MOBILITY * SI_OXIDE_CAPACITANCE * SI_ASPECT_RATIO * v * v,
            })
            .collect();

        Self {
            threshold_v,
            points,
        }
    }

    /// 两条曲线中的最大电流
    pub fn max_current(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.cnt_current.max(p.si_current))
            .fold(0.0_f64, f64::max)
    }
}
