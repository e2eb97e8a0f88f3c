//! # device 命令实现
//!
//! 器件估算统一入口，包含多个子命令：
//! - `fet`: CNT-FET 漏极电流
//! - `interconnect`: 互连电阻
//! - `compare`: CNT-FET 与硅 MOSFET 对比
//!
//! ## 依赖关系
//! - 使用 `cli/device.rs` 定义的参数
//! - 子模块: fet, interconnect, compare

pub mod compare;
pub mod fet;
pub mod interconnect;

use crate::cli::device::{DeviceArgs, DeviceCommands};
use crate::error::Result;

/// 执行 device 命令
pub fn execute(args: DeviceArgs) -> Result<()> {
    match args.command {
        DeviceCommands::Fet(fet_args) => fet::execute(fet_args),
        DeviceCommands::Interconnect(ic_args) => interconnect::execute(ic_args),
        DeviceCommands::Compare(cmp_args) => compare::execute(cmp_args),
    }
}
