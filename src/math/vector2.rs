use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Range, Sub};

use rand::Rng;
use rand_distr::{Distribution, UnitCircle};

use super::{Point2, Point3, EQUALITY_TOLERANCE};
use crate::error::{GeometryError, Result};

/// A point in two-dimensional space.
///
/// All arithmetic is component-wise and returns a new value. Equality is
/// tolerance based: two vectors are equal when both coordinate differences
/// are strictly less than [`EQUALITY_TOLERANCE`]. This relation is reflexive
/// and symmetric but not transitive, so `Vector2` implements neither `Eq`
/// nor `Hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl Vector2 {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Divides both components by the length, in place.
    ///
    /// A zero vector ends up with NaN components. Prefer [`Self::normalized`]
    /// or [`Self::try_normalized`].
    pub fn normalize(&mut self) {
        let len = self.length();
        self.x /= len;
        self.y /= len;
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// A zero vector yields NaN components.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the vector has zero length.
    pub fn try_normalized(&self) -> Result<Self> {
        let len = self.length();
        if len == 0.0 {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::new(self.x / len, self.y / len))
    }

    /// Returns `true` if both coordinate differences are below
    /// [`EQUALITY_TOLERANCE`]. Same relation as `==`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EQUALITY_TOLERANCE
            && (self.y - other.y).abs() < EQUALITY_TOLERANCE
    }

    /// Lifts the vector into 3D space at elevation `z`.
    #[must_use]
    pub fn to_vector3(&self, z: f64) -> Point3 {
        Point3::new(self.x, self.y, z)
    }

    /// Projects a 3D point onto the XY plane by dropping its z coordinate.
    #[must_use]
    pub fn from_point3(point: &Point3) -> Self {
        Self::new(point.x, point.y)
    }

    /// Linear interpolation `start + (end - start) * t`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(start: &Self, end: &Self, t: f64) -> Self {
        Self::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
        )
    }

    /// Returns a uniformly distributed random point on the circle of the
    /// given `radius` centred at this point.
    #[must_use]
    pub fn around<R: Rng>(&self, radius: f64, rng: &mut R) -> Self {
        let [dx, dy]: [f64; 2] = UnitCircle.sample(rng);
        Self::new(self.x + dx * radius, self.y + dy * radius)
    }

    /// Returns a uniformly distributed random point with `x` in `x_range`
    /// and `y` in `y_range`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRange` if either range is empty, has a
    /// non-finite bound, or spans more than `f64::MAX`.
    pub fn random_xy<R: Rng>(
        rng: &mut R,
        x_range: Range<f64>,
        y_range: Range<f64>,
    ) -> Result<Self> {
        check_range("x", &x_range)?;
        check_range("y", &y_range)?;
        Ok(Self::new(rng.gen_range(x_range), rng.gen_range(y_range)))
    }

    /// Component-wise sum, same as `+`.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(self, right: Self) -> Self {
        self + right
    }

    /// Component-wise difference, same as `-`.
    #[must_use]
    pub fn subtract(self, right: Self) -> Self {
        self - right
    }

    /// Component-wise product, same as `*`.
    #[must_use]
    pub fn multiply(self, right: Self) -> Self {
        self * right
    }

    /// Component-wise quotient, same as `/`.
    #[must_use]
    pub fn divide(self, right: Self) -> Self {
        self / right
    }

    /// Component-wise sum of two possibly absent operands.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MissingOperand` naming the first absent operand.
    pub fn checked_add(left: Option<&Self>, right: Option<&Self>) -> Result<Self> {
        let (l, r) = require_operands(left, right)?;
        Ok(*l + *r)
    }

    /// Component-wise difference of two possibly absent operands.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MissingOperand` naming the first absent operand.
    pub fn checked_subtract(left: Option<&Self>, right: Option<&Self>) -> Result<Self> {
        let (l, r) = require_operands(left, right)?;
        Ok(*l - *r)
    }

    /// Component-wise product of two possibly absent operands.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MissingOperand` naming the first absent operand.
    pub fn checked_multiply(left: Option<&Self>, right: Option<&Self>) -> Result<Self> {
        let (l, r) = require_operands(left, right)?;
        Ok(*l * *r)
    }

    /// Component-wise quotient of two possibly absent operands.
    ///
    /// Division by a zero component follows IEEE 754 and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MissingOperand` naming the first absent operand.
    pub fn checked_divide(left: Option<&Self>, right: Option<&Self>) -> Result<Self> {
        let (l, r) = require_operands(left, right)?;
        Ok(*l / *r)
    }
}

fn check_range(
    parameter: &'static str,
    range: &Range<f64>,
) -> std::result::Result<(), GeometryError> {
    if range.start < range.end && (range.end - range.start).is_finite() {
        return Ok(());
    }
    Err(GeometryError::InvalidRange {
        parameter,
        start: range.start,
        end: range.end,
    })
}

fn require_operands<'a>(
    left: Option<&'a Vector2>,
    right: Option<&'a Vector2>,
) -> std::result::Result<(&'a Vector2, &'a Vector2), GeometryError> {
    let left = left.ok_or(GeometryError::MissingOperand { operand: "left" })?;
    let right = right.ok_or(GeometryError::MissingOperand { operand: "right" })?;
    Ok((left, right))
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Vector2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<Point3> for Vector2 {
    fn from(point: Point3) -> Self {
        Self::from_point3(&point)
    }
}

impl From<Vector2> for Point3 {
    fn from(v: Vector2) -> Self {
        v.to_vector3(0.0)
    }
}

impl From<Point2> for Vector2 {
    fn from(point: Point2) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Vector2> for Point2 {
    fn from(v: Vector2) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
