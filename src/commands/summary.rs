//! # summary 命令实现
//!
//! 打印纳米管结构摘要（直径、类型、带隙）与合成方法推荐。
//!
//! ## 依赖关系
//! - 使用 `cli/tube.rs` 定义的 SummaryArgs
//! - 使用 `physics/geometry.rs`, `physics/synthesis.rs`
//! - 使用 `utils/output.rs`

use crate::cli::tube::SummaryArgs;
use crate::error::Result;
use crate::physics::{SynthesisRecommendation, TubeGeometry};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 摘要表格行
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Property")]
    property: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 summary 命令
pub fn execute(args: SummaryArgs) -> Result<()> {
    output::print_header("CNT Structure Summary");

    let tube = TubeGeometry::new(args.tube.n, args.tube.m)?;
    print_summary_table(&tube);

    let advice = SynthesisRecommendation::for_diameter(tube.diameter_nm);
    output::print_info(&format!(
        "Synthesis: prefer {} ({})",
        advice.label(),
        advice.rationale()
    ));

    if args.notes {
        print_learning_notes();
    }

    Ok(())
}

/// 打印结构摘要表格
pub fn print_summary_table(tube: &TubeGeometry) {
    let rows = vec![
        SummaryRow {
            property: "Chirality (n, m)",
            value: tube.indices.to_string(),
        },
        SummaryRow {
            property: "Diameter (nm)",
            value: format!("{:.4}", tube.diameter_nm),
        },
        SummaryRow {
            property: "Type",
            value: tube.electronic.label().to_string(),
        },
        SummaryRow {
            property: "Bandgap (eV)",
            value: format!("{:.4}", tube.bandgap_ev()),
        },
    ];

    println!("{}", Table::new(&rows));
}

fn print_learning_notes() {
    output::print_header("Learning Notes");
    println!("Chirality & electronic type");
    println!("  (n, m) defines whether a CNT behaves as a metal or a semiconductor.");
    println!("  If (n - m) mod 3 = 0 -> metallic, else -> semiconducting.\n");
    println!("Ballistic transport");
    println!("  Electrons move with minimal scattering, enabling ultra-high current densities.\n");
    println!("CNT interconnects");
    println!("  CNTs can replace copper due to lower electromigration and high current capacity.");
}
