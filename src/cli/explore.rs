//! # map / scan 子命令 CLI 定义
//!
//! 浏览手性参数空间：
//! - `map`: 固定尺寸网格的带隙热图
//! - `scan`: 在指定的 n、m 范围内批量计算纳米管
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/map.rs`, `commands/scan.rs`

use super::{parse_grid_size, FigureArgs, OutputFormat};
use clap::Args;
use std::path::PathBuf;

/// map 子命令参数
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Grid size S: the map covers n, m in [0, S)
    #[arg(long, default_value_t = 20, value_parser = parse_grid_size)]
    pub size: usize,

    /// Output file path
    #[arg(short, long, default_value = "chirality_map.png")]
    pub output: PathBuf,

    /// Output format (png, svg or csv; auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub figure: FigureArgs,
}

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Range of n (inclusive, e.g., "1-20")
    #[arg(long, default_value = "1-20")]
    pub n_range: String,

    /// Range of m (inclusive, e.g., "0-20")
    #[arg(long, default_value = "0-20")]
    pub m_range: String,

    /// Only keep semiconducting tubes
    #[arg(long, default_value_t = false)]
    pub semiconducting_only: bool,

    /// Number of rows to print in the terminal table
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Write all results to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
