//! # 物理常数与输入边界
//!
//! 所有模型使用的固定常数集中在此处。数值为教学用的近似值，不要修改。
//!
//! ## 依赖关系
//! - 被 `physics/` 下所有模型使用
//! - 被 `cli/` 用作参数范围

/// 石墨烯晶格常数 a（nm）
pub const LATTICE_CONSTANT_NM: f64 = 0.246;

/// 带隙经验系数：Eg = 0.7 / d（eV·nm）
pub const BANDGAP_COEFFICIENT: f64 = 0.7;

/// 网格 (0, 0) 处使用的回退直径（nm）
pub const GRID_FALLBACK_DIAMETER_NM: f64 = 0.0001;

// ─────────────────────────────────────────────────────────────
// 能带结构
// ─────────────────────────────────────────────────────────────

/// 金属管线性色散斜率 E = c1·k
pub const METALLIC_SLOPE: f64 = 0.2;
/// 半导体管双曲色散系数 E = √((Eg/2)² + c2·k²)
pub const SEMICONDUCTING_CURVATURE: f64 = 0.25;
/// 波矢范围 [-K_MAX, K_MAX]（a.u.）
pub const K_MAX: f64 = 3.0;
/// 波矢采样点数
pub const BAND_POINTS: usize = 400;

// ─────────────────────────────────────────────────────────────
// 器件
// ─────────────────────────────────────────────────────────────

/// CNT-FET 跨导系数 β（A/V²）
pub const FET_BETA: f64 = 10e-6;

/// 互连电阻率 ρ（Ω·cm）
pub const INTERCONNECT_RESISTIVITY: f64 = 1e-6;
/// µm → cm
pub const UM_TO_CM: f64 = 1e-4;
/// nm → cm
pub const NM_TO_CM: f64 = 1e-7;

/// 硅 MOSFET 迁移率 µ
pub const SI_MOBILITY: f64 = 200e-4;
/// 硅 MOSFET 栅氧电容 Cox
pub const SI_OXIDE_CAPACITANCE: f64 = 1e-3;
/// 硅 MOSFET 宽长比 W/L
pub const SI_ASPECT_RATIO: f64 = 10.0;
/// 对比扫描点数
pub const SWEEP_POINTS: usize = 50;

// ─────────────────────────────────────────────────────────────
// 输入边界
// ─────────────────────────────────────────────────────────────

pub const N_MIN: u32 = 1;
pub const M_MIN: u32 = 0;
pub const INDEX_MAX: u32 = 200;

pub const VOLTAGE_MIN: f64 = 0.0;
pub const VOLTAGE_MAX: f64 = 2.0;

pub const LENGTH_MIN_UM: f64 = 0.1;
pub const LENGTH_MAX_UM: f64 = 20.0;

pub const GRID_SIZE_MIN: usize = 10;
pub const GRID_SIZE_MAX: usize = 40;

/// 在闭区间 [min, max] 内均匀取 `count` 个点
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        max
                    } else {
                        min + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let k = linspace(-K_MAX, K_MAX, BAND_POINTS);
        assert_eq!(k.len(), 400);
        assert_eq!(k[0], -3.0);
        assert_eq!(k[399], 3.0);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }
}
