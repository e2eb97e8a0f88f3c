//! # report 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/report.rs`

use super::tube::TubeArgs;
use super::{parse_grid_size, parse_length, parse_voltage, FigureArgs};
use clap::Args;
use std::path::PathBuf;

/// report 子命令参数
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Gate voltage in V (0-2)
    #[arg(long, default_value_t = 1.0, value_parser = parse_voltage)]
    pub vg: f64,

    /// Drain voltage in V (0-2)
    #[arg(long, default_value_t = 1.0, value_parser = parse_voltage)]
    pub vd: f64,

    /// Interconnect length in µm (0.1-20)
    #[arg(long, default_value_t = 5.0, value_parser = parse_length)]
    pub length: f64,

    /// Chirality map grid size (10-40)
    #[arg(long, default_value_t = 20, value_parser = parse_grid_size)]
    pub size: usize,

    /// Directory for the generated figures
    #[arg(short = 'd', long, env = "CNTLAB_OUTPUT_DIR", default_value = "cntlab_report")]
    pub output_dir: PathBuf,

    /// Write SVG figures instead of PNG
    #[arg(long, default_value_t = false)]
    pub svg: bool,

    /// Write CSV data next to each figure
    #[arg(long, default_value_t = false)]
    pub with_data: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[command(flatten)]
    pub figure: FigureArgs,
}
