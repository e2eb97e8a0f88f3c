//! # 数据导出
//!
//! 把能带、对比曲线、手性图和批量扫描结果导出为 CSV 或 XY 格式。
//!
//! ## 支持格式
//! - CSV: 带表头的逗号分隔数据
//! - XY: `#` 注释头 + 制表符分隔列
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` 与 `serde` 写入 CSV 文件

use crate::error::{CntError, Result};
use crate::physics::{BandCurve, ChiralityGrid, DeviceComparison};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_err(path: &Path) -> impl Fn(std::io::Error) -> CntError + '_ {
    move |e| CntError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    }
}

/// 以 serde 序列化的行写入 CSV
pub fn rows_to_csv<T: Serialize>(rows: &[T], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(write_err(output_path))?;
    Ok(())
}

/// 能带导出为 CSV
pub fn bands_to_csv(curve: &BandCurve, output_path: &Path) -> Result<()> {
    rows_to_csv(&curve.points, output_path)
}

/// 对比曲线导出为 CSV
pub fn comparison_to_csv(comparison: &DeviceComparison, output_path: &Path) -> Result<()> {
    rows_to_csv(&comparison.points, output_path)
}

/// 手性图导出为 CSV（每行一个格点：n, m, diameter_nm, bandgap_ev）
pub fn grid_to_csv(grid: &ChiralityGrid, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(["n", "m", "diameter_nm", "bandgap_ev"])?;

    for i in 0..grid.size() {
        for j in 0..grid.size() {
            wtr.write_record(&[
                i.to_string(),
                j.to_string(),
                format!("{:.6}", grid.diameter(i, j)),
                format!("{:.6}", grid.bandgap(i, j)),
            ])?;
        }
    }

    wtr.flush().map_err(write_err(output_path))?;
    Ok(())
}

/// 能带导出为 XY 格式
pub fn bands_to_xy(curve: &BandCurve, label: &str, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(write_err(output_path))?;
    let mut out = BufWriter::new(file);

    let header = format!(
        "# Band structure: {} ({}, Eg = {:.4} eV)\n# Columns: k (a.u.), +E (eV), -E (eV)\n#",
        label,
        curve.electronic,
        curve.electronic.bandgap_ev()
    );
    writeln!(out, "{}", header).map_err(write_err(output_path))?;

    for p in &curve.points {
        writeln!(out, "{:.6}\t{:.6}\t{:.6}", p.k, p.conduction, p.valence)
            .map_err(write_err(output_path))?;
    }

    out.flush().map_err(write_err(output_path))?;
    Ok(())
}

/// 对比曲线导出为 XY 格式
pub fn comparison_to_xy(comparison: &DeviceComparison, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(write_err(output_path))?;
    let mut out = BufWriter::new(file);

    let header = format!(
        "# CNT-FET vs Silicon MOSFET (qualitative), Vt = {:.4} V\n# Columns: V (V), I_cnt (A), I_si (A)\n#",
        comparison.threshold_v
    );
    writeln!(out, "{}", header).map_err(write_err(output_path))?;

    for p in &comparison.points {
        writeln!(out, "{:.6}\t{:.6e}\t{:.6e}", p.voltage, p.cnt_current, p.si_current)
            .map_err(write_err(output_path))?;
    }

    out.flush().map_err(write_err(output_path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::TubeGeometry;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cntlab_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_bands_csv_has_header_and_all_points() {
        let tube = TubeGeometry::new(10, 0).unwrap();
        let curve = BandCurve::compute(&tube);
        let path = temp_path("bands.csv");

        bands_to_csv(&curve, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("k,conduction,valence"));
        assert_eq!(lines.count(), 400);
    }

    #[test]
    fn test_grid_csv_rows() {
        let grid = ChiralityGrid::compute(10).unwrap();
        let path = temp_path("grid.csv");

        grid_to_csv(&grid, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "n,m,diameter_nm,bandgap_ev");
        assert_eq!(lines.len(), 101);
        assert_eq!(lines[1], "0,0,0.000100,0.000000");
    }

    #[test]
    fn test_comparison_xy_header() {
        let tube = TubeGeometry::new(12, 6).unwrap();
        let cmp = DeviceComparison::compute(&tube);
        let path = temp_path("compare.xy");

        comparison_to_xy(&cmp, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(content.starts_with("# CNT-FET vs Silicon MOSFET"));
        let data: Vec<&str> = content.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 50);
        assert_eq!(data[0].split('\t').count(), 3);
    }

    #[test]
    fn test_bands_xy_label() {
        let tube = TubeGeometry::new(12, 6).unwrap();
        let curve = BandCurve::compute(&tube);
        let path = temp_path("bands.xy");

        bands_to_xy(&curve, "(12, 6)", &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(content.starts_with("# Band structure: (12, 6) (Metallic, Eg = 0.0000 eV)"));
    }
}
