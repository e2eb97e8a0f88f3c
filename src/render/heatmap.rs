//! # 手性图热图
//!
//! 绘制 n × m 带隙热图（原点在左下），右侧附色标。
//!
//! ## 依赖关系
//! - 被 `commands/map.rs` 和 `commands/report.rs` 调用
//! - 使用 `physics/chirality_map.rs` 的 ChiralityGrid

use crate::error::{CntError, Result};
use crate::physics::ChiralityGrid;
use crate::render::FigureSize;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// viridis 色带的采样锚点
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

const COLORBAR_STEPS: usize = 100;

fn render_err<E: std::fmt::Debug>(e: E) -> CntError {
    CntError::Render(format!("{:?}", e))
}

/// 把 [0, 1] 的值映射为 viridis 颜色，超出范围会被截断
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - idx as f64;

    let (r0, g0, b0) = VIRIDIS[idx];
    let (r1, g1, b1) = VIRIDIS[idx + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// 生成热图
pub fn generate_heatmap(
    grid: &ChiralityGrid,
    output_path: &Path,
    title: &str,
    size: FigureSize,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_heatmap(&root, grid, title)?;
        root.present().map_err(render_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_heatmap(&root, grid, title)?;
        root.present().map_err(render_err)?;
    }
    Ok(())
}

fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grid: &ChiralityGrid,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_err)?;

    let (width, _) = root.dim_in_pixel();
    let (map_area, bar_area) = root.split_horizontally((width as f64 * 0.82) as u32);

    let n = grid.size();
    let max_gap = grid.max_bandgap().max(f64::EPSILON);

    let mut chart = ChartBuilder::on(&map_area)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("m")
        .y_desc("n")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(render_err)?;

    // 行下标 i 为 n（纵轴），列下标 j 为 m（横轴）
    let cells = (0..n).flat_map(|i| (0..n).map(move |j| (i, j)));
    chart
        .draw_series(cells.map(|(i, j)| {
            let color = viridis(grid.bandgap(i, j) / max_gap);
            Rectangle::new(
                [(j as f64, i as f64), (j as f64 + 1.0, i as f64 + 1.0)],
                color.filled(),
            )
        }))
        .map_err(render_err)?;

    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(70)
        .margin_bottom(80)
        .margin_right(20)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..max_gap)
        .map_err(render_err)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc("Bandgap (eV)")
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(render_err)?;

    let step = max_gap / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|s| {
        let lo = s as f64 * step;
        let color = viridis((s as f64 + 0.5) / COLORBAR_STEPS as f64);
        Rectangle::new([(0.0, lo), (1.0, lo + step)], color.filled())
    }))
    .map_err(render_err)?;

    Ok(())
}
