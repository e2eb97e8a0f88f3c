//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `physics/`, `render/`, `utils/`
//! - 子模块: summary, bands, device, map, scan, report

pub mod bands;
pub mod device;
pub mod map;
pub mod report;
pub mod scan;
pub mod summary;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Summary(args) => summary::execute(args),
        Commands::Bands(args) => bands::execute(args),
        Commands::Device(args) => device::execute(args),
        Commands::Map(args) => map::execute(args),
        Commands::Scan(args) => scan::execute(args),
        Commands::Report(args) => report::execute(args),
    }
}
