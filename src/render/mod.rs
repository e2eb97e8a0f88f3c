//! # 渲染模块
//!
//! 把物理模型的结果渲染为图像或数据文件。
//!
//! ## 子模块
//! - `plot`: 能带结构与器件对比折线图
//! - `heatmap`: 手性图热图与色标
//! - `export`: CSV / XY 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `physics/` 的结果结构
//! - 使用 `plotters`, `csv`

pub mod export;
pub mod heatmap;
pub mod plot;

use crate::cli::OutputFormat;
use std::path::Path;

/// 从文件扩展名推断输出格式
pub fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
        _ => OutputFormat::Png,
    }
}

/// 图像尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("a.svg")), OutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a.CSV")), OutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("a.dat")), OutputFormat::Xy);
        assert_eq!(guess_format_from_extension(Path::new("a.png")), OutputFormat::Png);
        assert_eq!(guess_format_from_extension(Path::new("noext")), OutputFormat::Png);
    }
}
