//! # report 命令实现
//!
//! 一次运行全部物理模型：先求几何，再分发给其余模型，
//! 打印所有标量结果并把三张图写入输出目录。
//!
//! ## 依赖关系
//! - 使用 `cli/report.rs` 定义的 ReportArgs
//! - 使用 `explorer.rs` 执行计算图
//! - 使用 `render/` 输出图像与数据

use crate::cli::report::ReportArgs;
use crate::commands::summary::print_summary_table;
use crate::error::{CntError, Result};
use crate::explorer::{self, ExplorerInputs, ExplorerReport};
use crate::render::{export, heatmap, plot, FigureSize};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 report 命令
pub fn execute(args: ReportArgs) -> Result<()> {
    output::print_header("CNT Explorer Report");

    let inputs = ExplorerInputs {
        n: args.tube.n,
        m: args.tube.m,
        gate_v: args.vg,
        drain_v: args.vd,
        length_um: args.length,
        grid_size: args.size,
    };
    let report = explorer::evaluate(&inputs)?;

    print_summary_table(&report.tube);
    print_device_metrics(&report);

    fs::create_dir_all(&args.output_dir).map_err(|e| CntError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let writer = FigureWriter {
        dir: &args.output_dir,
        size: args.figure.size(),
        use_svg: args.svg,
        overwrite: args.overwrite,
    };
    let written = writer.write_all(&report, args.with_data)?;

    output::print_separator();
    output::print_success(&format!(
        "{} files written to '{}'",
        written,
        args.output_dir.display()
    ));
    Ok(())
}

fn print_device_metrics(report: &ExplorerReport) {
    output::print_header("Device Estimates");
    output::print_metric(
        "Gate / drain voltage",
        &format!(
            "{:.2} / {:.2}",
            report.fet.bias.gate_v, report.fet.bias.drain_v
        ),
        "V",
    );
    output::print_metric(
        "Threshold voltage",
        &format!("{:.4}", report.fet.threshold_v),
        "V",
    );
    output::print_metric(
        "Drain current",
        &format!("{:.6e}", report.fet.drain_current_a),
        "A",
    );
    output::print_metric(
        "Interconnect length",
        &format!("{:.2}", report.interconnect.length_um),
        "µm",
    );
    output::print_metric(
        "Interconnect resistance",
        &format!("{:.4e}", report.interconnect.resistance_ohm),
        "Ω",
    );
    output::print_metric(
        "Synthesis",
        report.synthesis.label(),
        report.synthesis.rationale(),
    );
}

/// 输出目录中的图像写入器
struct FigureWriter<'a> {
    dir: &'a Path,
    size: FigureSize,
    use_svg: bool,
    overwrite: bool,
}

impl FigureWriter<'_> {
    /// 写入全部图像（以及可选的 CSV），返回写入的文件数
    fn write_all(&self, report: &ExplorerReport, with_data: bool) -> Result<usize> {
        let title = format!("CNT Band Structure {}", report.tube.indices);
        let mut written = 0;

        if let Some(path) = self.target(&figure_name("band_structure", self.use_svg)) {
            plot::generate_band_plot(&report.bands, &path, &title, self.size, self.use_svg)?;
            written += self.done(&path);
        }
        if let Some(path) = self.target(&figure_name("chirality_map", self.use_svg)) {
            heatmap::generate_heatmap(
                &report.grid,
                &path,
                "Bandgap Heatmap (n vs m)",
                self.size,
                self.use_svg,
            )?;
            written += self.done(&path);
        }
        if let Some(path) = self.target(&figure_name("cnt_vs_si", self.use_svg)) {
            plot::generate_comparison_plot(
                &report.comparison,
                &path,
                "Comparison (Conceptual)",
                self.size,
                self.use_svg,
            )?;
            written += self.done(&path);
        }

        if with_data {
            if let Some(path) = self.target("band_structure.csv") {
                export::bands_to_csv(&report.bands, &path)?;
                written += self.done(&path);
            }
            if let Some(path) = self.target("chirality_map.csv") {
                export::grid_to_csv(&report.grid, &path)?;
                written += self.done(&path);
            }
            if let Some(path) = self.target("cnt_vs_si.csv") {
                export::comparison_to_csv(&report.comparison, &path)?;
                written += self.done(&path);
            }
        }

        Ok(written)
    }

    /// 目标路径；文件已存在且不允许覆盖时返回 None
    fn target(&self, file_name: &str) -> Option<PathBuf> {
        let path = self.dir.join(file_name);
        if path.exists() && !self.overwrite {
            output::print_skip(&format!("Output exists, skipping: {}", path.display()));
            return None;
        }
        Some(path)
    }

    fn done(&self, path: &Path) -> usize {
        output::print_success(&format!("Saved '{}'", path.display()));
        1
    }
}

fn figure_name(stem: &str, use_svg: bool) -> String {
    format!("{}.{}", stem, if use_svg { "svg" } else { "png" })
}
