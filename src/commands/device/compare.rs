//! # compare 子命令实现
//!
//! CNT-FET 与硅 MOSFET 的定性对比曲线，输出图像或数据。
//!
//! ## 依赖关系
//! - 使用 `cli/device.rs` 定义的 CompareArgs
//! - 使用 `physics/comparison.rs`
//! - 使用 `render/plot.rs`, `render/export.rs`

use crate::cli::device::CompareArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::physics::{DeviceComparison, TubeGeometry};
use crate::render::{self, export, plot};
use crate::utils::output;

/// 执行 compare 子命令
pub fn execute(args: CompareArgs) -> Result<()> {
    output::print_header("CNT-FET vs Silicon MOSFET (Qualitative)");

    let tube = TubeGeometry::new(args.tube.n, args.tube.m)?;
    let comparison = DeviceComparison::compute(&tube);
    output::print_info(&format!(
        "Tube {}: Vt = {:.4} V, {} sweep points",
        tube.indices,
        comparison.threshold_v,
        comparison.points.len()
    ));

    let format = args
        .format
        .unwrap_or_else(|| render::guess_format_from_extension(&args.output));

    match format {
        OutputFormat::Png | OutputFormat::Svg => plot::generate_comparison_plot(
            &comparison,
            &args.output,
            "Comparison (Conceptual)",
            args.figure.size(),
            format == OutputFormat::Svg,
        )?,
        OutputFormat::Csv => export::comparison_to_csv(&comparison, &args.output)?,
        OutputFormat::Xy => export::comparison_to_xy(&comparison, &args.output)?,
    }

    output::print_success(&format!("Comparison saved to '{}'", args.output.display()));
    Ok(())
}
