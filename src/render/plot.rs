//! # 折线图生成
//!
//! 使用 `plotters` 绘制能带结构图和 CNT-FET / 硅 MOSFET 对比图，
//! 支持 PNG 与 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs`, `commands/device/compare.rs`, `commands/report.rs` 调用
//! - 使用 `physics/bands.rs`, `physics/comparison.rs` 的结果结构

use crate::error::{CntError, Result};
use crate::physics::{BandCurve, DeviceComparison};
use crate::render::FigureSize;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const CONDUCTION_COLOR: RGBColor = RGBColor(0, 102, 204);
const VALENCE_COLOR: RGBColor = RGBColor(204, 85, 0);
const SILICON_COLOR: RGBColor = RGBColor(120, 120, 120);

fn render_err<E: std::fmt::Debug>(e: E) -> CntError {
    CntError::Render(format!("{:?}", e))
}

/// 生成能带结构图
pub fn generate_band_plot(
    curve: &BandCurve,
    output_path: &Path,
    title: &str,
    size: FigureSize,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_band_chart(&root, curve, title)?;
        root.present().map_err(render_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_band_chart(&root, curve, title)?;
        root.present().map_err(render_err)?;
    }
    Ok(())
}

/// 生成器件对比图
pub fn generate_comparison_plot(
    comparison: &DeviceComparison,
    output_path: &Path,
    title: &str,
    size: FigureSize,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_comparison_chart(&root, comparison, title)?;
        root.present().map_err(render_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_comparison_chart(&root, comparison, title)?;
        root.present().map_err(render_err)?;
    }
    Ok(())
}

fn draw_band_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curve: &BandCurve,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_err)?;

    let x_min = curve.points.first().map(|p| p.k).unwrap_or(-3.0);
    let x_max = curve.points.last().map(|p| p.k).unwrap_or(3.0);
    let (e_min, e_max) = curve.energy_range();
    let pad = ((e_max - e_min) * 0.05).max(0.05);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (e_min - pad)..(e_max + pad))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("k (a.u.)")
        .y_desc("Energy (eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            curve.points.iter().map(|p| (p.k, p.conduction)),
            CONDUCTION_COLOR.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("+E(k)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CONDUCTION_COLOR));

    chart
        .draw_series(LineSeries::new(
            curve.points.iter().map(|p| (p.k, p.valence)),
            VALENCE_COLOR.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("-E(k)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], VALENCE_COLOR));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn draw_comparison_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    comparison: &DeviceComparison,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_err)?;

    let x_max = comparison.points.last().map(|p| p.voltage).unwrap_or(2.0);
    let y_max = comparison.max_current().max(1e-9) * 1.05;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Gate Voltage (V)")
        .y_desc("Drain Current (A)")
        .y_label_formatter(&|v| format!("{:.1e}", v))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            comparison.points.iter().map(|p| (p.voltage, p.cnt_current)),
            CONDUCTION_COLOR.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("CNT-FET")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CONDUCTION_COLOR));

    chart
        .draw_series(LineSeries::new(
            comparison.points.iter().map(|p| (p.voltage, p.si_current)),
            SILICON_COLOR.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Silicon MOSFET")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SILICON_COLOR));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    Ok(())
}
