//! # 计算编排
//!
//! 一次完整的计算过程：先求一次几何模型，再把结果分发给其余六个模型，
//! 最后把所有结果交给渲染层。每次调用都从输入重新计算，不保留任何状态。
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 使用
//! - 使用 `physics/` 下所有模型

use crate::error::Result;
use crate::physics::{
    BandCurve, ChiralityGrid, DeviceBias, DeviceComparison, FetEstimate, InterconnectEstimate,
    SynthesisRecommendation, TubeGeometry,
};

/// 一次计算的全部输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerInputs {
    pub n: u32,
    pub m: u32,
    pub gate_v: f64,
    pub drain_v: f64,
    pub length_um: f64,
    pub grid_size: usize,
}

impl Default for ExplorerInputs {
    fn default() -> Self {
        Self {
            n: 12,
            m: 6,
            gate_v: 1.0,
            drain_v: 1.0,
            length_um: 5.0,
            grid_size: 20,
        }
    }
}

/// 一次计算的全部输出
#[derive(Debug, Clone)]
pub struct ExplorerReport {
    pub tube: TubeGeometry,
    pub bands: BandCurve,
    pub fet: FetEstimate,
    pub grid: ChiralityGrid,
    pub interconnect: InterconnectEstimate,
    pub comparison: DeviceComparison,
    pub synthesis: SynthesisRecommendation,
}

/// 执行完整的计算图
pub fn evaluate(inputs: &ExplorerInputs) -> Result<ExplorerReport> {
    let tube = TubeGeometry::new(inputs.n, inputs.m)?;
    let bias = DeviceBias::new(inputs.gate_v, inputs.drain_v)?;

    Ok(ExplorerReport {
        bands: BandCurve::compute(&tube),
        fet: FetEstimate::compute(&tube, bias),
        grid: ChiralityGrid::compute(inputs.grid_size)?,
        interconnect: InterconnectEstimate::compute(&tube, inputs.length_um)?,
        comparison: DeviceComparison::compute(&tube),
        synthesis: SynthesisRecommendation::for_diameter(tube.diameter_nm),
        tube,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CntError;

    #[test]
    fn test_default_inputs() {
        let report = evaluate(&ExplorerInputs::default()).unwrap();
        assert!(report.tube.is_metallic());
        assert_eq!(report.bands.points.len(), 400);
        assert_eq!(report.grid.size(), 20);
        assert_eq!(report.comparison.points.len(), 50);
        assert_eq!(report.synthesis, SynthesisRecommendation::CvdPecvd);
        assert!(report.fet.drain_current_a > 0.0);
        assert!(report.interconnect.resistance_ohm > 0.0);
    }

    #[test]
    fn test_downstream_models_share_one_geometry() {
        let inputs = ExplorerInputs {
            n: 10,
            m: 0,
            ..ExplorerInputs::default()
        };
        let report = evaluate(&inputs).unwrap();
        let half_gap = report.tube.bandgap_ev() / 2.0;
        assert_eq!(report.fet.threshold_v, half_gap);
        assert_eq!(report.comparison.threshold_v, half_gap);
        assert_eq!(report.interconnect.diameter_nm, report.tube.diameter_nm);
        assert_eq!(report.bands.electronic, report.tube.electronic);
    }

    #[test]
    fn test_degenerate_tube_fails_fast() {
        let inputs = ExplorerInputs {
            n: 0,
            m: 0,
            ..ExplorerInputs::default()
        };
        assert!(matches!(
            evaluate(&inputs),
            Err(CntError::DegenerateTube { .. })
        ));
    }

    #[test]
    fn test_out_of_range_inputs_propagate() {
        let bad_grid = ExplorerInputs {
            grid_size: 50,
            ..ExplorerInputs::default()
        };
        assert!(matches!(
            evaluate(&bad_grid),
            Err(CntError::OutOfRange { name: "grid size", .. })
        ));

        let bad_length = ExplorerInputs {
            length_um: 0.0,
            ..ExplorerInputs::default()
        };
        assert!(evaluate(&bad_length).is_err());
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let inputs = ExplorerInputs::default();
        let a = evaluate(&inputs).unwrap();
        let b = evaluate(&inputs).unwrap();
        assert_eq!(a.tube, b.tube);
        assert_eq!(a.fet, b.fet);
        assert_eq!(a.grid.bandgaps(), b.grid.bandgaps());
    }
}
