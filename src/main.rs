//! # cntlab - 碳纳米管物理交互式学习工具
//!
//! 由手性指数 (n, m) 出发，用闭式近似公式推导纳米管的几何与电子性质，
//! 并给出能带、器件电流、互连电阻、手性图等图表与估算。
//!
//! ## 子命令
//! - `summary` - 结构摘要与合成推荐
//! - `bands`   - 能带结构近似
//! - `device`  - 器件估算
//!   - `fet`          - CNT-FET 漏极电流
//!   - `interconnect` - 互连电阻
//!   - `compare`      - 与硅 MOSFET 对比
//! - `map`     - 手性图热图
//! - `scan`    - 批量扫描手性指数
//! - `report`  - 运行全部模型并输出图像
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── explorer.rs (计算编排)
//!   │     ├── physics/    (物理模型)
//!   │     ├── render/     (绘图与导出)
//!   │     └── batch/      (并行批处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod explorer;
mod physics;
mod render;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
