use crate::foundation::{
    core::Field,
    math::{deg_to_rad, half_size},
};

/// A pixel expressed in patch-local coordinates.
///
/// `x` runs along the grating's direction of variation, `y` is orthogonal to
/// it, and `r` is the distance from the patch center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// `size x size` lattice centered at `(size / 2, size / 2)` and rotated by the
/// patch orientation. Rebuilt for every generation call.
#[derive(Clone, Debug)]
pub struct CoordinateGrid {
    size: u32,
    points: Vec<GridPoint>,
}

impl CoordinateGrid {
    pub fn new(size: u32, orientation_deg: f64) -> Self {
        let center = i64::from(half_size(size));
        let theta = deg_to_rad(orientation_deg);
        let n = size as usize;

        let mut points = Vec::with_capacity(n * n);
        for row in 0..i64::from(size) {
            let dy = (row - center) as f64;
            for col in 0..i64::from(size) {
                let dx = (col - center) as f64;
                let t = dy.atan2(dx) - theta;
                let r = (dx * dx + dy * dy).sqrt();
                points.push(GridPoint {
                    x: r * t.cos(),
                    y: r * t.sin(),
                    r,
                });
            }
        }

        Self { size, points }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Points in row-major order.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub(crate) fn map(&self, f: impl FnMut(&GridPoint) -> f64) -> Field {
        Field::from_vec(self.size, self.points.iter().map(f).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/grid.rs"]
mod tests;
