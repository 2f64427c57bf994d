//! Geometric and radiometric value types.
//!
//! Positions and colors share the same three-float representation but play
//! different roles; [`Point3`] and [`Color`] wrap [`glam::Vec3A`] so a color
//! can never be handed to an API expecting a world position. Directions and
//! viewport spans stay raw `Vec3A`.

use glam::Vec3A;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(Vec3A);

impl Point3 {
    /// The world origin.
    pub const ZERO: Self = Self(Vec3A::ZERO);

    /// Create a point from coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3A::new(x, y, z))
    }
}

/// Displacement between two points.
impl Sub for Point3 {
    type Output = Vec3A;

    fn sub(self, rhs: Self) -> Vec3A {
        self.0 - rhs.0
    }
}

/// Translate a point by an offset.
impl Add<Vec3A> for Point3 {
    type Output = Self;

    fn add(self, rhs: Vec3A) -> Self {
        Self(self.0 + rhs)
    }
}

/// Linear RGB color.
///
/// Values live in linear light throughout the pipeline; gamma is applied only
/// by [`Color::to_rgb8`] when resolving to 8-bit output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(Vec3A);

impl Color {
    /// No light.
    pub const BLACK: Self = Self(Vec3A::ZERO);
    /// Full-intensity white.
    pub const WHITE: Self = Self(Vec3A::ONE);

    /// Create a color from linear RGB components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3A::new(r, g, b))
    }

    /// Red component.
    pub fn r(self) -> f32 {
        self.0.x
    }

    /// Green component.
    pub fn g(self) -> f32 {
        self.0.y
    }

    /// Blue component.
    pub fn b(self) -> f32 {
        self.0.z
    }

    /// Linear interpolation towards `rhs` by `t` in [0, 1].
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        Self(self.0.lerp(rhs.0, t))
    }

    /// Resolve to 8-bit RGB with gamma-2 correction.
    ///
    /// Components are clamped to [0, 1], square-rooted, and scaled to
    /// [0, 255].
    pub fn to_rgb8(self) -> [u8; 3] {
        let resolve = |c: f32| (255.0 * c.clamp(0.0, 1.0).sqrt()) as u8;
        [resolve(self.0.x), resolve(self.0.y), resolve(self.0.z)]
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Component-wise product; attenuation across bounces.
impl Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color(rhs.0 * self)
    }
}
