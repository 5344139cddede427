//! Affine draw matrix.
//!
//! [`GeoM`] maps a point with `x' = a*x + b*y + tx` and `y' = c*x + d*y + ty`.
//! Every operation is applied *after* the transform already accumulated, so a
//! sequence of calls reads in the order the effects happen to a point.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoM {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for GeoM {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GeoM {
    pub const IDENTITY: GeoM = GeoM {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.a *= x;
        self.b *= x;
        self.tx *= x;
        self.c *= y;
        self.d *= y;
        self.ty *= y;
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.tx += tx;
        self.ty += ty;
    }

    /// Rotate by `theta` radians around the origin.
    pub fn rotate(&mut self, theta: f64) {
        let (sin, cos) = theta.sin_cos();
        let (a, b, c, d, tx, ty) = (self.a, self.b, self.c, self.d, self.tx, self.ty);
        self.a = cos * a - sin * c;
        self.b = cos * b - sin * d;
        self.tx = cos * tx - sin * ty;
        self.c = sin * a + cos * c;
        self.d = sin * b + cos * d;
        self.ty = sin * tx + cos * ty;
    }

    /// Apply `other` after this matrix.
    pub fn concat(&mut self, other: &GeoM) {
        let (a, b, c, d, tx, ty) = (self.a, self.b, self.c, self.d, self.tx, self.ty);
        self.a = other.a * a + other.b * c;
        self.b = other.a * b + other.b * d;
        self.tx = other.a * tx + other.b * ty + other.tx;
        self.c = other.c * a + other.d * c;
        self.d = other.c * b + other.d * d;
        self.ty = other.c * tx + other.d * ty + other.ty;
    }

    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
