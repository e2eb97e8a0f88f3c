//! # summary / bands 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/summary.rs`, `commands/bands.rs`

use super::{FigureArgs, OutputFormat};
use clap::Args;
use std::path::PathBuf;

/// 手性指数参数
#[derive(Args, Debug, Clone, Copy)]
pub struct TubeArgs {
    /// Chirality index n
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..=200))]
    pub n: u32,

    /// Chirality index m
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=200))]
    pub m: u32,
}

/// summary 子命令参数
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Also print the learning notes on electronic type and transport
    #[arg(long, default_value_t = false)]
    pub notes: bool,
}

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Output file path
    #[arg(short, long, default_value = "band_structure.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Title for the plot (default: "CNT Band Structure (n, m)")
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub figure: FigureArgs,
}
