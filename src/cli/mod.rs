//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `summary`: 纳米管结构摘要与合成推荐
//! - `bands`: 能带结构图
//! - `device`: 器件估算（嵌套子命令）
//!   - `fet`: CNT-FET 漏极电流
//!   - `interconnect`: 互连电阻
//!   - `compare`: CNT-FET 与硅 MOSFET 对比
//! - `map`: 手性图热图
//! - `scan`: 批量扫描手性指数范围
//! - `report`: 一次运行全部模型并输出所有图像
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: tube, device, explore, report

pub mod device;
pub mod explore;
pub mod report;
pub mod tube;

use crate::physics::constants::{
    GRID_SIZE_MAX, GRID_SIZE_MIN, LENGTH_MAX_UM, LENGTH_MIN_UM, VOLTAGE_MAX, VOLTAGE_MIN,
};
use crate::render::FigureSize;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// cntlab - 碳纳米管物理交互式学习工具
#[derive(Parser)]
#[command(name = "cntlab")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "An interactive carbon nanotube physics explorer", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Show diameter, electronic type, bandgap and synthesis advice for a tube
    Summary(tube::SummaryArgs),

    /// Plot or export the simplified band structure of a tube
    Bands(tube::BandsArgs),

    /// Device estimators (CNT-FET current, interconnect resistance, Si comparison)
    Device(device::DeviceArgs),

    /// Plot or export the (n, m) -> bandgap chirality map
    Map(explore::MapArgs),

    /// Evaluate every tube in a range of chirality indices
    Scan(explore::ScanArgs),

    /// Run every model once and write all figures to a directory
    Report(report::ReportArgs),
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
    /// XY data file (tab separated, '#' comments)
    Xy,
}

/// 图像尺寸参数
#[derive(Args, Debug, Clone, Copy)]
pub struct FigureArgs {
    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, env = "CNTLAB_FIG_WIDTH", default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, env = "CNTLAB_FIG_HEIGHT", default_value_t = 800)]
    pub height: u32,
}

impl FigureArgs {
    pub fn size(&self) -> FigureSize {
        FigureSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// 解析闭区间内的浮点数
fn parse_bounded(input: &str, what: &str, min: f64, max: f64) -> Result<f64, String> {
    let value: f64 = input
        .parse()
        .map_err(|_| format!("Invalid {} '{}': expected a number", what, input))?;
    if !(min..=max).contains(&value) {
        return Err(format!(
            "{} {} is out of range [{}, {}]",
            what, value, min, max
        ));
    }
    Ok(value)
}

/// 解析电压（V）
pub fn parse_voltage(input: &str) -> Result<f64, String> {
    parse_bounded(input, "voltage", VOLTAGE_MIN, VOLTAGE_MAX)
}

/// 解析管长（µm）
pub fn parse_length(input: &str) -> Result<f64, String> {
    parse_bounded(input, "length", LENGTH_MIN_UM, LENGTH_MAX_UM)
}

/// 解析网格尺寸
pub fn parse_grid_size(input: &str) -> Result<usize, String> {
    let size: usize = input
        .parse()
        .map_err(|_| format!("Invalid grid size '{}': expected an integer", input))?;
    if !(GRID_SIZE_MIN..=GRID_SIZE_MAX).contains(&size) {
        return Err(format!(
            "grid size {} is out of range [{}, {}]",
            size, GRID_SIZE_MIN, GRID_SIZE_MAX
        ));
    }
    Ok(size)
}
