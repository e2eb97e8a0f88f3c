//! # bands 命令实现
//!
//! 计算简化能带结构并输出为图像 (PNG/SVG) 或数据 (CSV/XY)。
//!
//! ## 依赖关系
//! - 使用 `cli/tube.rs` 定义的 BandsArgs
//! - 使用 `physics/bands.rs`
//! - 使用 `render/plot.rs`, `render/export.rs`

use crate::cli::tube::BandsArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::physics::{BandCurve, TubeGeometry};
use crate::render::{self, export, plot};
use crate::utils::output;

/// 执行 bands 命令
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Band Structure Approximation");

    let tube = TubeGeometry::new(args.tube.n, args.tube.m)?;
    output::print_info(&format!(
        "Tube {}: {} (Eg = {:.4} eV)",
        tube.indices,
        tube.electronic,
        tube.bandgap_ev()
    ));

    let curve = BandCurve::compute(&tube);
    let format = args
        .format
        .unwrap_or_else(|| render::guess_format_from_extension(&args.output));

    match format {
        OutputFormat::Png | OutputFormat::Svg => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| format!("CNT Band Structure {}", tube.indices));
            plot::generate_band_plot(
                &curve,
                &args.output,
                &title,
                args.figure.size(),
                format == OutputFormat::Svg,
            )?;
        }
        OutputFormat::Csv => export::bands_to_csv(&curve, &args.output)?,
        OutputFormat::Xy => {
            export::bands_to_xy(&curve, &tube.indices.to_string(), &args.output)?
        }
    }

    output::print_success(&format!(
        "Band structure ({} points) saved to '{}'",
        curve.points.len(),
        args.output.display()
    ));
    Ok(())
}
