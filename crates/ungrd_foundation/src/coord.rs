//! Grid coordinates and positions.
//!
//! A [`Position`] is a plain fixed-size array of signed integer
//! [`Coordinate`]s. Grids are generic over the coordinate type and the
//! dimensionality, which is limited to 1, 2 or 3 (see [`Dim`]).

use std::fmt;
use std::hash::Hash;

/// A signed integer usable as one component of a grid position.
///
/// Arithmetic that could overflow the component type (bounding-box extents,
/// offsets) is carried out in `i128`, which holds the difference of any two
/// `i64` values.
pub trait Coordinate: Copy + Ord + Hash + Default + fmt::Debug + Send + Sync + 'static {
    /// Smallest representable component.
    const MIN: Self;
    /// Largest representable component.
    const MAX: Self;

    /// Losslessly widens the component.
    fn to_i128(self) -> i128;

    /// Narrows a wide value, `None` if it does not fit.
    fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_coordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coordinate for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_coordinate!(i8, i16, i32, i64);

/// An N-dimensional grid position.
pub type Position<C, const N: usize> = [C; N];

/// Compile-time guard on grid dimensionality.
///
/// Evaluating [`Dim::SUPPORTED`] fails to compile for any `N` outside `1..=3`.
pub struct Dim<const N: usize>;

impl<const N: usize> Dim<N> {
    /// Evaluates to `()` when `N` is a supported dimensionality.
    pub const SUPPORTED: () = assert!(N >= 1 && N <= 3, "grids support 1 to 3 dimensions");
}

/// The position with every component at its maximum.
#[must_use]
pub fn most_positive<C: Coordinate, const N: usize>() -> Position<C, N> {
    [C::MAX; N]
}

/// The position with every component at its minimum.
#[must_use]
pub fn most_negative<C: Coordinate, const N: usize>() -> Position<C, N> {
    [C::MIN; N]
}

/// Componentwise minimum of two positions.
#[must_use]
pub fn componentwise_min<C: Coordinate, const N: usize>(
    a: &Position<C, N>,
    b: &Position<C, N>,
) -> Position<C, N> {
    std::array::from_fn(|dim| a[dim].min(b[dim]))
}

/// Componentwise maximum of two positions.
#[must_use]
pub fn componentwise_max<C: Coordinate, const N: usize>(
    a: &Position<C, N>,
    b: &Position<C, N>,
) -> Position<C, N> {
    std::array::from_fn(|dim| a[dim].max(b[dim]))
}

/// Maps a continuous point to the grid cell containing it.
///
/// Cells are half-open cubes of side `cell_size` anchored at the origin, so
/// `-0.5` falls in cell `-1` for a cell size of `1.0`. Returns `None` when a
/// component is not finite, `cell_size` is not positive, or the cell index
/// does not fit in `C`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn grid_position<C: Coordinate, const N: usize>(
    point: [f64; N],
    cell_size: f64,
) -> Option<Position<C, N>> {
    if cell_size.is_nan() || cell_size <= 0.0 {
        return None;
    }

    let mut position = [C::default(); N];
    for dim in 0..N {
        let scaled = (point[dim] / cell_size).floor();
        if !scaled.is_finite() {
            return None;
        }
        position[dim] = C::from_i128(scaled as i128)?;
    }
    Some(position)
}
