//! # 手性图（n, m → 带隙）
//!
//! 在 S×S 整数网格上重复几何模型的公式。网格直接把循环下标 (i, j)
//! 当作手性指数，与当前选中的管无关，用于浏览参数空间。
//!
//! 原点 (0, 0) 使用回退直径 1e-4 nm 而不是报错；由于 (0 − 0) mod 3 == 0，
//! 该格点仍落在金属线上，带隙为有限值 0。
//!
//! ## 依赖关系
//! - 被 `explorer.rs` 和 `commands/map.rs` 使用
//! - 使用 `physics/geometry.rs` 的 lattice_point

use crate::error::{CntError, Result};
use crate::physics::constants::{GRID_SIZE_MAX, GRID_SIZE_MIN};
use crate::physics::geometry::{lattice_point, DegeneratePolicy, LatticePoint};

/// 带隙网格，`cells[i][j]` 对应 (n = i, m = j)
#[derive(Debug, Clone)]
pub struct ChiralityGrid {
    size: usize,
    cells: Vec<Vec<LatticePoint>>,
}

impl ChiralityGrid {
    /// 计算 size×size 网格，size 必须在 [10, 40] 内
    pub fn compute(size: usize) -> Result<Self> {
        if !(GRID_SIZE_MIN..=GRID_SIZE_MAX).contains(&size) {
            return Err(CntError::out_of_range(
                "grid size",
                size as f64,
                GRID_SIZE_MIN as f64,
                GRID_SIZE_MAX as f64,
            ));
        }

        let mut cells = Vec::with_capacity(size);
        for i in 0..size as u32 {
            let mut row = Vec::with_capacity(size);
            for j in 0..size as u32 {
                row.push(lattice_point(i, j, DegeneratePolicy::Fallback)?);
            }
            cells.push(row);
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 格点 (i, j) 的带隙（eV）
    pub fn bandgap(&self, i: usize, j: usize) -> f64 {
        self.cells[i][j].electronic.bandgap_ev()
    }

    /// 格点 (i, j) 的直径（nm）
    pub fn diameter(&self, i: usize, j: usize) -> f64 {
        self.cells[i][j].diameter_nm
    }

    /// 带隙矩阵，行下标为 n，列下标为 m
    pub fn bandgaps(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.electronic.bandgap_ev()).collect())
            .collect()
    }

    /// 最大带隙，用于色标
    pub fn max_bandgap(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.electronic.bandgap_ev())
            .fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::geometry::TubeGeometry;

    #[test]
    fn test_grid_size_bounds() {
        assert!(ChiralityGrid::compute(9).is_err());
        assert!(ChiralityGrid::compute(41).is_err());
        assert_eq!(ChiralityGrid::compute(10).unwrap().size(), 10);
        assert_eq!(ChiralityGrid::compute(40).unwrap().bandgaps().len(), 40);
    }

    #[test]
    fn test_metallic_lines_are_zero() {
        let grid = ChiralityGrid::compute(20).unwrap();
        for i in 0..20 {
            for j in 0..20 {
                if (i as i64 - j as i64).rem_euclid(3) == 0 && i + j > 0 {
                    assert_eq!(grid.bandgap(i, j), 0.0, "({},{}) should be metallic", i, j);
                } else if i + j > 0 {
                    assert!(grid.bandgap(i, j) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_origin_uses_fallback_and_stays_finite() {
        let grid = ChiralityGrid::compute(10).unwrap();
        assert_eq!(grid.diameter(0, 0), 0.0001);
        assert!(grid.bandgap(0, 0).is_finite());
        assert_eq!(grid.bandgap(0, 0), 0.0);
        for row in grid.bandgaps() {
            assert!(row.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_grid_uses_raw_indices_not_selected_tube() {
        // 网格 (i, j) 与同指数单根管的结果一致
        let grid = ChiralityGrid::compute(15).unwrap();
        for (n, m) in [(1u32, 0u32), (10, 0), (7, 2), (14, 13)] {
            let tube = TubeGeometry::new(n, m).unwrap();
            assert_eq!(grid.bandgap(n as usize, m as usize), tube.bandgap_ev());
            assert_eq!(grid.diameter(n as usize, m as usize), tube.diameter_nm);
        }
    }

    #[test]
    fn test_grid_is_symmetric_in_magnitude() {
        // 直径对 (i, j) 对称，(i − j) mod 3 的判定也对称
        let grid = ChiralityGrid::compute(12).unwrap();
        for i in 0..12 {
            for j in 0..12 {
                assert_eq!(grid.bandgap(i, j), grid.bandgap(j, i));
            }
        }
    }

    #[test]
    fn test_max_bandgap_is_first_semiconducting_cell() {
        let grid = ChiralityGrid::compute(10).unwrap();
        assert_eq!(grid.max_bandgap(), grid.bandgap(1, 0));
    }
}
