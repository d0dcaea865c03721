use serde::{Deserialize, Serialize};

use crate::layout::KeyLayout;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned key rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Half-open on the right and bottom edges, so adjacent cells never
    /// both claim a boundary point.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// One rectangle per (row, col) of a layout, partitioning a bounding box.
/// Computed once at startup; recompute only when the bounds change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyGrid {
    rects: Vec<Vec<Rect>>,
}

impl KeyGrid {
    /// Splits `bounds` into equal-height bands, one per layout row, then
    /// splits each band evenly across that row's key count.
    pub fn compute(layout: &KeyLayout, bounds: Rect) -> Self {
        let row_count = layout.row_count().max(1);
        let key_height = bounds.h / row_count as f32;

        let rects = layout
            .rows()
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let key_width = bounds.w / row.len().max(1) as f32;
                (0..row.len())
                    .map(|col_idx| Rect {
                        x: bounds.x + col_idx as f32 * key_width,
                        y: bounds.y + row_idx as f32 * key_height,
                        w: key_width,
                        h: key_height,
                    })
                    .collect()
            })
            .collect();

        Self { rects }
    }

    pub fn rows(&self) -> &[Vec<Rect>] {
        &self.rects
    }

    pub fn rect_at(&self, row: usize, col: usize) -> Option<Rect> {
        self.rects.get(row)?.get(col).copied()
    }

    /// Row-major scan; the first containing rectangle wins. Regions are
    /// disjoint by construction, so scan order only matters as the
    /// tie-break if that invariant is ever violated.
    pub fn locate(&self, p: Point) -> Option<(usize, usize)> {
        for (row_idx, row) in self.rects.iter().enumerate() {
            for (col_idx, rect) in row.iter().enumerate() {
                if rect.contains(p) {
                    return Some((row_idx, col_idx));
                }
            }
        }
        None
    }
}
