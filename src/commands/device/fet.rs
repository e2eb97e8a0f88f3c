//! # fet 子命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/device.rs` 定义的 FetArgs
//! - 使用 `physics/fet.rs`

use crate::cli::device::FetArgs;
use crate::error::Result;
use crate::physics::{DeviceBias, FetEstimate, TubeGeometry};
use crate::utils::output;

/// 执行 fet 子命令
pub fn execute(args: FetArgs) -> Result<()> {
    output::print_header("CNT-FET Current Estimator (Ballistic Approximation)");

    let tube = TubeGeometry::new(args.tube.n, args.tube.m)?;
    let bias = DeviceBias::new(args.vg, args.vd)?;
    let estimate = FetEstimate::compute(&tube, bias);

    output::print_info(&format!(
        "Tube {}: {}, Eg = {:.4} eV",
        tube.indices,
        tube.electronic,
        tube.bandgap_ev()
    ));
    output::print_info(&format!(
        "Vg = {:.2} V, Vd = {:.2} V, Vt = {:.4} V",
        bias.gate_v, bias.drain_v, estimate.threshold_v
    ));

    if estimate.drain_current_a == 0.0 {
        output::print_warning("Device is below threshold: drain current is zero");
    }
    output::print_success(&format!(
        "Estimated drain current: {:.6e} A",
        estimate.drain_current_a
    ));
    Ok(())
}
