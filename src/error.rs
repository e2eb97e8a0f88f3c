//! # 统一错误处理模块
//!
//! 定义 cntlab 的所有错误类型，使用 `thiserror` 派生。
//!
//! 物理核心只会产生两类错误：退化管（n = m = 0）与越界输入。
//! 其余变体只出现在渲染层（文件写入、CSV、绘图后端）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// cntlab 统一错误类型
#[derive(Error, Debug)]
pub enum CntError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Degenerate tube: chirality ({n}, {m}) has zero diameter")]
    DegenerateTube { n: u32, m: u32 },

    #[error("{name} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 渲染错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plot rendering failed: {0}")]
    Render(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl CntError {
    /// 构造越界错误
    pub fn out_of_range(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        CntError::OutOfRange {
            name,
            value,
            min,
            max,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CntError>;
