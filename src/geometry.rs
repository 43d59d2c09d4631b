//! 2-D vectors and the 2x2 linear maps applied to them.

use crate::error::{PlotvecError, Result};
use ndarray::{array, Array2, ArrayView1};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

/// A 2-D vector (or point) with real components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians from the positive x-axis.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive x-axis, in `[0, 2π)`.
    pub fn angle(self) -> f64 {
        let angle = self.y.atan2(self.x);
        if angle < 0.0 {
            angle + std::f64::consts::TAU
        } else {
            angle
        }
    }

    /// Build a vector from a 1-D ndarray view of length 2.
    pub fn from_view(view: ArrayView1<'_, f64>) -> Result<Self> {
        match view.as_slice() {
            Some(s) => Self::try_from(s),
            None => Self::try_from(view.to_vec().as_slice()),
        }
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = PlotvecError;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(PlotvecError::vector_shape(&[values.len()])),
        }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"`, optionally wrapped in `[...]` or `(...)`. Whitespace
/// around components is ignored.
impl FromStr for Vector2 {
    type Err = PlotvecError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .or_else(|| s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')))
            .unwrap_or(s);
        let values = parse_numbers(inner)?;
        Self::try_from(values.as_slice())
    }
}

/// Parse a comma-separated list of numbers.
pub fn parse_numbers(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| PlotvecError::invalid_argument(format!("not a number: '{}'", part)))
        })
        .collect()
}

/// Parse `"a,b,c,d"` into the row-major 2x2 matrix `[[a, b], [c, d]]`.
pub fn parse_matrix(s: &str) -> Result<Array2<f64>> {
    let values = parse_numbers(s)?;
    Array2::from_shape_vec((2, 2), values.clone())
        .map_err(|_| PlotvecError::matrix_shape(&[values.len()]))
}

/// Check that `matrix` is 2x2.
pub fn check_matrix(matrix: &Array2<f64>) -> Result<()> {
    if matrix.shape() == [2, 2] {
        Ok(())
    } else {
        Err(PlotvecError::matrix_shape(matrix.shape()))
    }
}

/// Apply a (checked) 2x2 matrix to a vector.
pub fn apply(matrix: &Array2<f64>, v: Vector2) -> Vector2 {
    let out = matrix.dot(&array![v.x, v.y]);
    Vector2::new(out[0], out[1])
}

/// Whether `matrix` is exactly the 2x2 identity.
pub fn is_identity(matrix: &Array2<f64>) -> bool {
    matrix.shape() == [2, 2] && *matrix == Array2::<f64>::eye(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn parses_vectors() {
        assert_eq!("3,4".parse::<Vector2>().unwrap(), Vector2::new(3.0, 4.0));
        assert_eq!(" -1.5 , 2 ".parse::<Vector2>().unwrap(), Vector2::new(-1.5, 2.0));
        assert!(matches!(
            "1,2,3".parse::<Vector2>(),
            Err(PlotvecError::Shape { .. })
        ));
        assert!("a,b".parse::<Vector2>().is_err());
        assert_eq!("[-1,2]".parse::<Vector2>().unwrap(), Vector2::new(-1.0, 2.0));
        assert_eq!("(0.5, 1)".parse::<Vector2>().unwrap(), Vector2::new(0.5, 1.0));
        assert!("[1,2".parse::<Vector2>().is_err());
    }

    #[test]
    fn vector_from_view_checks_length() {
        let v = Vector2::from_view(arr1(&[1.0, 2.0]).view()).unwrap();
        assert_eq!(v, Vector2::new(1.0, 2.0));
        assert!(Vector2::from_view(arr1(&[1.0]).view()).is_err());
    }

    #[test]
    fn angle_is_non_negative() {
        assert_eq!(Vector2::new(1.0, 0.0).angle(), 0.0);
        let a = Vector2::new(0.0, -1.0).angle();
        assert!((a - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn matrix_parsing_and_application() {
        let m = parse_matrix("1,2,3,4").unwrap();
        assert_eq!(m, array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(apply(&m, Vector2::new(1.0, 1.0)), Vector2::new(3.0, 7.0));
        assert!(parse_matrix("1,2,3").is_err());
    }

    #[test]
    fn matrix_shape_check() {
        assert!(check_matrix(&Array2::eye(2)).is_ok());
        let err = check_matrix(&Array2::eye(3)).unwrap_err();
        assert!(matches!(err, PlotvecError::Shape { ref found, .. } if found == &vec![3, 3]));
    }

    #[test]
    fn identity_detection() {
        assert!(is_identity(&Array2::eye(2)));
        assert!(!is_identity(&array![[1.0, 0.0], [0.0, 2.0]]));
        assert!(!is_identity(&Array2::eye(3)));
    }
}
