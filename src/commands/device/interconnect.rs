//! # interconnect 子命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/device.rs` 定义的 InterconnectArgs
//! - 使用 `physics/interconnect.rs`

use crate::cli::device::InterconnectArgs;
use crate::error::Result;
use crate::physics::{InterconnectEstimate, TubeGeometry};
use crate::utils::output;

/// 执行 interconnect 子命令
pub fn execute(args: InterconnectArgs) -> Result<()> {
    output::print_header("CNT Interconnect Resistance Estimator");

    let tube = TubeGeometry::new(args.tube.n, args.tube.m)?;
    let estimate = InterconnectEstimate::compute(&tube, args.length)?;

    output::print_info(&format!(
        "Tube {}: d = {:.4} nm, L = {:.2} µm",
        tube.indices, estimate.diameter_nm, estimate.length_um
    ));
    output::print_success(&format!(
        "Estimated resistance: {:.4e} Ω",
        estimate.resistance_ohm
    ));
    Ok(())
}
