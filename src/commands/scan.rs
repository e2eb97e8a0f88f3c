//! # scan 命令实现
//!
//! 在给定的 n、m 范围内批量计算纳米管性质。
//!
//! ## 功能
//! - 并行计算（rayon）
//! - 可选只保留半导体管
//! - 终端表格输出前若干行
//! - 可选导出完整 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/explore.rs` 定义的 ScanArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `physics/` 进行计算

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::explore::ScanArgs;
use crate::error::{CntError, Result};
use crate::physics::constants::{INDEX_MAX, M_MIN, N_MIN};
use crate::physics::fet::threshold_voltage;
use crate::physics::{SynthesisRecommendation, TubeGeometry};
use crate::render::export;
use crate::utils::output;

use serde::Serialize;
use tabled::{Table, Tabled};

/// 单根管的扫描结果
#[derive(Debug, Clone, Serialize)]
pub struct ScanRecord {
    pub n: u32,
    pub m: u32,
    pub diameter_nm: f64,
    #[serde(rename = "type")]
    pub electronic_type: &'static str,
    pub bandgap_ev: f64,
    pub threshold_v: f64,
    pub synthesis: &'static str,
}

impl ScanRecord {
    fn from_tube(tube: &TubeGeometry) -> Self {
        Self {
            n: tube.indices.n,
            m: tube.indices.m,
            diameter_nm: tube.diameter_nm,
            electronic_type: tube.electronic.label(),
            bandgap_ev: tube.bandgap_ev(),
            threshold_v: threshold_voltage(tube.bandgap_ev()),
            synthesis: SynthesisRecommendation::for_diameter(tube.diameter_nm).label(),
        }
    }
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Chirality Scan");

    let (n_min, n_max) = parse_index_range(&args.n_range, N_MIN)?;
    let (m_min, m_max) = parse_index_range(&args.m_range, M_MIN)?;

    let pairs: Vec<(u32, u32)> = (n_min..=n_max)
        .flat_map(|n| (m_min..=m_max).map(move |m| (n, m)))
        .collect();

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Evaluating {} tubes (n = {}-{}, m = {}-{}) on {} threads",
        pairs.len(),
        n_min,
        n_max,
        m_min,
        m_max,
        runner.jobs()
    ));

    let semiconducting_only = args.semiconducting_only;
    let result = runner.run(pairs, |&(n, m)| evaluate_pair(n, m, semiconducting_only))?;

    let mut records = result.outputs;
    records.sort_by_key(|r| (r.n, r.m));

    output::print_separator();
    output::print_success(&format!(
        "Scan complete: {} evaluated, {} skipped, {} failed",
        records.len(),
        result.skipped,
        result.failed
    ));

    for (pair, err) in result.failures.iter().take(10) {
        output::print_error(&format!("  {}: {}", pair, err));
    }

    print_scan_table(&records, args.top);

    if let Some(path) = &args.output {
        export::rows_to_csv(&records, path)?;
        output::print_success(&format!(
            "{} rows written to '{}'",
            records.len(),
            path.display()
        ));
    }

    Ok(())
}

fn evaluate_pair(n: u32, m: u32, semiconducting_only: bool) -> ProcessResult<ScanRecord> {
    match TubeGeometry::new(n, m) {
        Ok(tube) if semiconducting_only && tube.is_metallic() => {
            ProcessResult::Skipped(format!("({}, {}) is metallic", n, m))
        }
        Ok(tube) => ProcessResult::Success(ScanRecord::from_tube(&tube)),
        Err(CntError::DegenerateTube { .. }) => {
            ProcessResult::Skipped(format!("({}, {}) is degenerate", n, m))
        }
        Err(e) => ProcessResult::Failed(format!("({}, {})", n, m), e.to_string()),
    }
}

/// 解析 "A-B" 形式的闭区间手性指数范围
fn parse_index_range(range: &str, min_allowed: u32) -> Result<(u32, u32)> {
    let parts: Vec<&str> = range.split('-').map(str::trim).collect();
    let (lo, hi) = match parts.as_slice() {
        [single] => (*single, *single),
        [lo, hi] => (*lo, *hi),
        _ => return Err(CntError::InvalidRange(range.to_string())),
    };

    let lo: u32 = lo
        .parse()
        .map_err(|_| CntError::InvalidRange(range.to_string()))?;
    let hi: u32 = hi
        .parse()
        .map_err(|_| CntError::InvalidRange(range.to_string()))?;

    if lo < min_allowed || hi < lo || hi > INDEX_MAX {
        return Err(CntError::InvalidRange(format!(
            "{} (must be {} <= min <= max <= {})",
            range, min_allowed, INDEX_MAX
        )));
    }

    Ok((lo, hi))
}

/// 打印扫描结果表格
fn print_scan_table(records: &[ScanRecord], count: usize) {
    #[derive(Tabled)]
    struct ScanRow {
        #[tabled(rename = "(n, m)")]
        indices: String,
        #[tabled(rename = "d (nm)")]
        diameter: String,
        #[tabled(rename = "Type")]
        electronic_type: &'static str,
        #[tabled(rename = "Eg (eV)")]
        bandgap: String,
        #[tabled(rename = "Synthesis")]
        synthesis: &'static str,
    }

    let rows: Vec<ScanRow> = records
        .iter()
        .take(count)
        .map(|r| ScanRow {
            indices: format!("({}, {})", r.n, r.m),
            diameter: format!("{:.4}", r.diameter_nm),
            electronic_type: r.electronic_type,
            bandgap: format!("{:.4}", r.bandgap_ev),
            synthesis: r.synthesis,
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("First {} of {} tubes", rows.len(), records.len()));
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_range() {
        assert_eq!(parse_index_range("1-20", N_MIN).unwrap(), (1, 20));
        assert_eq!(parse_index_range(" 3 - 5 ", M_MIN).unwrap(), (3, 5));
        assert_eq!(parse_index_range("7", N_MIN).unwrap(), (7, 7));
        assert_eq!(parse_index_range("0-4", M_MIN).unwrap(), (0, 4));
    }

    #[test]
    fn test_parse_index_range_rejects_bad_input() {
        assert!(parse_index_range("0-4", N_MIN).is_err());
        assert!(parse_index_range("5-2", M_MIN).is_err());
        assert!(parse_index_range("1-201", M_MIN).is_err());
        assert!(parse_index_range("a-b", M_MIN).is_err());
        assert!(parse_index_range("1-2-3", M_MIN).is_err());
    }

    #[test]
    fn test_evaluate_pair_filters_metallic() {
        assert!(matches!(
            evaluate_pair(12, 6, true),
            ProcessResult::Skipped(_)
        ));
        assert!(matches!(
            evaluate_pair(12, 6, false),
            ProcessResult::Success(_)
        ));
        assert!(matches!(evaluate_pair(0, 0, false), ProcessResult::Skipped(_)));
        assert!(matches!(
            evaluate_pair(0, 5, false),
            ProcessResult::Failed(_, _)
        ));
    }

    #[test]
    fn test_scan_record_fields() {
        let tube = TubeGeometry::new(10, 0).unwrap();
        let rec = ScanRecord::from_tube(&tube);
        assert_eq!(rec.electronic_type, "Semiconducting");
        assert_eq!(rec.threshold_v, tube.bandgap_ev() / 2.0);
        assert_eq!(rec.synthesis, "Laser Ablation / Arc Discharge");
    }
}
