//! Snapping of field positions onto the hole lattice.
//!
//! The lattice consists of every point whose coordinates are multiples of
//! [`HoleGrid::SPACING`]. A lattice vertex is a *hole* when both of its grid
//! indices have the same parity, which gives the diamond pattern sketched
//! below (`o` is a hole, `.` is a peak):
//!
//! ```markdown
//!  o . o . o
//!  . o . o .
//!  o . o . o
//!  . o . o .
//!  o . o . o
//! ```
//!
//! Indices are taken from the absolute coordinate, so the pattern is mirrored
//! in both axes around the origin.
//!
//! Coordinates are `f64`. Results are exact for coordinates with an absolute
//! value up to [`HoleGrid::MAX_COORDINATE`], beyond that a single lattice step
//! is no longer representable.

use nalgebra::Point2;

/// The fixed diamond hole lattice.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoleGrid;

impl HoleGrid {
    /// Distance between two neighbouring lattice vertices along an axis.
    pub const SPACING: f64 = 10.0;

    /// Largest absolute coordinate for which snapping is exact.
    pub const MAX_COORDINATE: f64 = 1e15;

    /// Round each coordinate to the nearest multiple of [`Self::SPACING`].
    ///
    /// Halfway values are rounded away from zero, so `5.0` becomes `10.0` and
    /// `-5.0` becomes `-10.0`.
    ///
    /// ```
    /// use hole_grid::HoleGrid;
    /// use nalgebra::Point2;
    ///
    /// let rounded = HoleGrid::round_to_tens(Point2::new(12.0, -17.0));
    /// assert_eq!(rounded, Point2::new(10.0, -20.0));
    /// ```
    #[must_use]
    pub fn round_to_tens(point: Point2<f64>) -> Point2<f64> {
        point.map(round_axis)
    }

    /// Integer grid indices of a point, taken from the absolute coordinates.
    #[must_use]
    pub fn grid_indices(point: Point2<f64>) -> (u64, u64) {
        (grid_index(point.x) as u64, grid_index(point.y) as u64)
    }

    /// Whether a point that is already rounded to tens lies on a hole.
    #[must_use]
    pub fn is_hole(rounded: Point2<f64>) -> bool {
        is_odd(rounded.x) == is_odd(rounded.y)
    }

    /// Find the hole nearest to `point`.
    ///
    /// If the nearest lattice vertex is a peak, the point is moved one step
    /// to the neighbouring hole along the axis it deviates least from.
    ///
    /// ```
    /// use hole_grid::HoleGrid;
    /// use nalgebra::Point2;
    ///
    /// let hole = HoleGrid::nearest_hole(Point2::new(12.0, -17.0));
    /// assert_eq!(hole, Point2::new(10.0, -10.0));
    /// ```
    #[must_use]
    pub fn nearest_hole(point: Point2<f64>) -> Point2<f64> {
        let rounded = Self::round_to_tens(point);
        if Self::is_hole(rounded) {
            return rounded;
        }

        let diff = point - rounded;

        // closer to the vertical axis of the diamond
        if diff.x.abs() < diff.y.abs() {
            let step = if diff.y > 0.0 {
                Self::SPACING
            } else {
                -Self::SPACING
            };
            Point2::new(rounded.x, rounded.y + step)
        } else {
            let step = if diff.x > 0.0 {
                Self::SPACING
            } else {
                -Self::SPACING
            };
            Point2::new(rounded.x + step, rounded.y)
        }
    }
}

fn round_axis(c: f64) -> f64 {
    let sign = if c < 0.0 { -1.0 } else { 1.0 };
    let tens = ((c.abs() + HoleGrid::SPACING / 2.0) / HoleGrid::SPACING).floor();

    sign * tens * HoleGrid::SPACING
}

fn grid_index(c: f64) -> f64 {
    (c.abs() / HoleGrid::SPACING).trunc()
}

fn is_odd(c: f64) -> bool {
    grid_index(c) % 2.0 != 0.0
}
