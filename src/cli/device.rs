//! # device 子命令 CLI 定义
//!
//! 器件估算统一入口，包含多个子命令：
//! - `fet`: CNT-FET 漏极电流（弹道近似）
//! - `interconnect`: CNT 互连电阻
//! - `compare`: CNT-FET 与硅 MOSFET 对比
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/device/` 相应模块

use super::tube::TubeArgs;
use super::{parse_length, parse_voltage, FigureArgs, OutputFormat};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// device 主命令参数
#[derive(Args, Debug)]
pub struct DeviceArgs {
    #[command(subcommand)]
    pub command: DeviceCommands,
}

/// device 子命令
#[derive(Subcommand, Debug)]
pub enum DeviceCommands {
    /// Estimate CNT-FET drain current (ballistic approximation)
    Fet(FetArgs),

    /// Estimate CNT interconnect resistance
    Interconnect(InterconnectArgs),

    /// Compare CNT-FET and silicon MOSFET current over a gate sweep
    Compare(CompareArgs),
}

/// fet 子命令参数
#[derive(Args, Debug)]
pub struct FetArgs {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Gate voltage in V (0-2)
    #[arg(long, default_value_t = 1.0, value_parser = parse_voltage)]
    pub vg: f64,

    /// Drain voltage in V (0-2)
    #[arg(long, default_value_t = 1.0, value_parser = parse_voltage)]
    pub vd: f64,
}

/// interconnect 子命令参数
#[derive(Args, Debug)]
pub struct InterconnectArgs {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Tube length in µm (0.1-20)
    #[arg(long, default_value_t = 5.0, value_parser = parse_length)]
    pub length: f64,
}

/// compare 子命令参数
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Output file path
    #[arg(short, long, default_value = "cnt_vs_si.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub figure: FigureArgs,
}
