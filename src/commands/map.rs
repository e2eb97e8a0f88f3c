//! # map 命令实现
//!
//! 计算 (n, m) → 带隙手性图，输出热图或 CSV。
//! 网格下标直接作为手性指数，与任何选中的管无关。
//!
//! ## 依赖关系
//! - 使用 `cli/explore.rs` 定义的 MapArgs
//! - 使用 `physics/chirality_map.rs`
//! - 使用 `render/heatmap.rs`, `render/export.rs`

use crate::cli::explore::MapArgs;
use crate::cli::OutputFormat;
use crate::error::{CntError, Result};
use crate::physics::ChiralityGrid;
use crate::render::{self, export, heatmap};
use crate::utils::output;

/// 执行 map 命令
pub fn execute(args: MapArgs) -> Result<()> {
    output::print_header("Chirality Explorer (n, m -> Bandgap Map)");

    let grid = ChiralityGrid::compute(args.size)?;
    output::print_info(&format!(
        "Grid {0}x{0}, max bandgap {1:.4} eV",
        grid.size(),
        grid.max_bandgap()
    ));

    let format = args
        .format
        .unwrap_or_else(|| render::guess_format_from_extension(&args.output));

    match format {
        OutputFormat::Png | OutputFormat::Svg => heatmap::generate_heatmap(
            &grid,
            &args.output,
            "Bandgap Heatmap (n vs m)",
            args.figure.size(),
            format == OutputFormat::Svg,
        )?,
        OutputFormat::Csv => export::grid_to_csv(&grid, &args.output)?,
        OutputFormat::Xy => {
            return Err(CntError::Other(
                "XY output is not available for the chirality map; use png, svg or csv"
                    .to_string(),
            ))
        }
    }

    output::print_success(&format!("Chirality map saved to '{}'", args.output.display()));
    Ok(())
}
