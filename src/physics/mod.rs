//! # 纳米管物理模型
//!
//! 全部为纯函数式的闭式近似，没有状态也没有缓存。
//!
//! ## 子模块
//! - `constants`: 固定常数与输入边界
//! - `geometry`: (n, m) → 直径 / 电子类型 / 带隙
//! - `bands`: 能带结构近似
//! - `fet`: CNT-FET 漏极电流
//! - `chirality_map`: 手性图网格
//! - `interconnect`: 互连电阻
//! - `comparison`: CNT-FET 与硅 MOSFET 对比
//! - `synthesis`: 合成方法推荐
//!
//! ## 依赖关系
//! - 被 `explorer.rs` 和 `commands/` 使用
//! - 只依赖 `error.rs`

pub mod bands;
pub mod chirality_map;
pub mod comparison;
pub mod constants;
pub mod fet;
pub mod geometry;
pub mod interconnect;
pub mod synthesis;

pub use bands::BandCurve;
pub use chirality_map::ChiralityGrid;
pub use comparison::DeviceComparison;
pub use fet::{DeviceBias, FetEstimate};
pub use geometry::TubeGeometry;
pub use interconnect::InterconnectEstimate;
pub use synthesis::SynthesisRecommendation;
