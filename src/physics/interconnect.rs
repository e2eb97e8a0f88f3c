//! # CNT 互连电阻估算
//!
//! R = ρ · (L_cm / d_cm)，其中 L_cm = L_µm × 1e-4，d_cm = d_nm × 1e-7。
//!
//! ## 依赖关系
//! - 被 `explorer.rs` 和 `commands/device/interconnect.rs` 使用

use crate::error::{CntError, Result};
use crate::physics::constants::{
    INTERCONNECT_RESISTIVITY, LENGTH_MAX_UM, LENGTH_MIN_UM, NM_TO_CM, UM_TO_CM,
};
use crate::physics::geometry::TubeGeometry;

/// 互连电阻估算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterconnectEstimate {
    /// 管长（µm）
    pub length_um: f64,
    /// 直径（nm）
    pub diameter_nm: f64,
    /// 电阻（Ω）
    pub resistance_ohm: f64,
}

impl InterconnectEstimate {
    /// 计算电阻，长度必须在 [0.1, 20] µm 内
    pub fn compute(tube: &TubeGeometry, length_um: f64) -> Result<Self> {
        if !(LENGTH_MIN_UM..=LENGTH_MAX_UM).contains(&length_um) {
            return Err(CntError::out_of_range(
                "length",
                length_um,
                LENGTH_MIN_UM,
                LENGTH_MAX_UM,
            ));
        }

        let length_cm = length_um * UM_TO_CM;
        let diameter_cm = tube.diameter_nm * NM_TO_CM;

        Ok(Self {
            length_um,
            diameter_nm: tube.diameter_nm,
            resistance_ohm: INTERCONNECT_RESISTIVITY * (length_cm / diameter_cm),
        })
    }
}
