use bevy_math::Vec3;

/// Axis-aligned bounding box.
///
/// `min[i] <= max[i]` on every axis for any box built from at least one
/// point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// The zero-sized box at the origin, returned for empty input.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box holding every point, or `None` when there are none.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grows the box to contain `p`, one axis at a time.
    #[inline]
    pub fn include(&mut self, p: Vec3) {
        if p.x < self.min.x {
            self.min.x = p.x;
        }
        if p.x > self.max.x {
            self.max.x = p.x;
        }
        if p.y < self.min.y {
            self.min.y = p.y;
        }
        if p.y > self.max.y {
            self.max.y = p.y;
        }
        if p.z < self.min.z {
            self.min.z = p.z;
        }
        if p.z > self.max.z {
            self.max.z = p.z;
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Pads the box by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        let delta = Vec3::splat(margin);
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Radius of the sphere through the box corners: half the diagonal.
    pub fn radius(&self) -> f32 {
        self.size().length() / 2.0
    }

    /// Inclusive on faces.
    pub fn contains(&self, p: Vec3) -> bool {
        self.min.cmple(p).all() && p.cmple(self.max).all()
    }

    /// `[minx, miny, minz, maxx, maxy, maxz]`
    pub fn to_flat(&self) -> [f32; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::ZERO
    }
}
