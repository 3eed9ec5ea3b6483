//! Integer lattice geometry shared by the block, shape, and structure crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Signed integer 3-vector. Used both for block coordinates and for offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IVec3 {
    pub const ZERO: IVec3 = IVec3 { x: 0, y: 0, z: 0 };
    pub const ONE: IVec3 = IVec3 { x: 1, y: 1, z: 1 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v, z: v }
    }

    #[inline]
    pub fn min(self, rhs: IVec3) -> IVec3 {
        IVec3::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    #[inline]
    pub fn max(self, rhs: IVec3) -> IVec3 {
        IVec3::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    /// Squared euclidean length, widened so large radii cannot overflow.
    #[inline]
    pub fn length_sq(self) -> i64 {
        let (x, y, z) = (i64::from(self.x), i64::from(self.y), i64::from(self.z));
        x * x + y * y + z * z
    }

    /// Largest absolute component (Chebyshev norm).
    #[inline]
    pub fn max_abs(self) -> u32 {
        self.x
            .unsigned_abs()
            .max(self.y.unsigned_abs())
            .max(self.z.unsigned_abs())
    }

    /// `None` if any axis leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, rhs: IVec3) -> Option<IVec3> {
        Some(IVec3::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }

    /// Sums in `i64` and narrows once at the end, so partial sums may leave
    /// the `i32` range as long as the total does not.
    pub fn checked_sum<I>(parts: I) -> Option<IVec3>
    where
        I: IntoIterator<Item = IVec3>,
    {
        let (mut x, mut y, mut z) = (0i64, 0i64, 0i64);
        for p in parts {
            x = x.checked_add(i64::from(p.x))?;
            y = y.checked_add(i64::from(p.y))?;
            z = z.checked_add(i64::from(p.z))?;
        }
        Some(IVec3::new(
            i32::try_from(x).ok()?,
            i32::try_from(y).ok()?,
            i32::try_from(z).ok()?,
        ))
    }
}

impl Add for IVec3 {
    type Output = IVec3;
    #[inline]
    fn add(self, rhs: IVec3) -> IVec3 {
        IVec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for IVec3 {
    #[inline]
    fn add_assign(&mut self, rhs: IVec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for IVec3 {
    type Output = IVec3;
    #[inline]
    fn sub(self, rhs: IVec3) -> IVec3 {
        IVec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for IVec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: IVec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for IVec3 {
    type Output = IVec3;
    #[inline]
    fn neg(self) -> IVec3 {
        IVec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for IVec3 {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<IVec3> for (i32, i32, i32) {
    fn from(value: IVec3) -> Self {
        (value.x, value.y, value.z)
    }
}

/// Inclusive integer box: both `min` and `max` are occupied cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Aabb {
    pub min: IVec3,
    pub max: IVec3,
}

impl Aabb {
    /// Builds a box from two arbitrary corners, normalising each axis.
    #[inline]
    pub fn from_corners(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub const fn from_point(p: IVec3) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box covering every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = IVec3>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut aabb = Aabb::from_point(first);
        for p in it {
            aabb.include(p);
        }
        Some(aabb)
    }

    #[inline]
    pub fn include(&mut self, p: IVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    #[inline]
    pub fn union(self, other: Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Cell count along each axis (`max - min + 1`), widened so a box
    /// spanning the whole `i32` range still fits.
    #[inline]
    pub fn extent(self) -> (i64, i64, i64) {
        let axis = |lo: i32, hi: i32| i64::from(hi) - i64::from(lo) + 1;
        (
            axis(self.min.x, self.max.x),
            axis(self.min.y, self.max.y),
            axis(self.min.z, self.max.z),
        )
    }

    /// Each axis spans at most 2³² cells, so the product is taken in `i128`.
    #[inline]
    pub fn volume(self) -> i128 {
        let (x, y, z) = self.extent();
        i128::from(x) * i128::from(y) * i128::from(z)
    }

    #[inline]
    pub fn contains(self, p: IVec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    #[inline]
    pub fn intersects(self, other: Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    pub fn intersection(self, other: Aabb) -> Option<Aabb> {
        if !self.intersects(other) {
            return None;
        }
        Some(Aabb {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    /// `None` when either corner would leave the `i32` lattice.
    #[inline]
    pub fn translated(self, by: IVec3) -> Option<Aabb> {
        Some(Aabb {
            min: self.min.checked_add(by)?,
            max: self.max.checked_add(by)?,
        })
    }
}
