use crate::wide::Int128;
use crate::{CrossScalar, EdgeScalar};

/// Largest coordinate magnitude accepted by [`should_flip`]: `2^30 - 1`.
///
/// Within this bound every i64 intermediate is exact: differences stay
/// below `2^31`, the per-edge dot and cross products below `2^63`, and the
/// final sine-sum terms below `2^127`.
pub const MAX_COORD: i32 = (1 << 30) - 1;

/// Decides whether the diagonal AC of the quadrilateral ABCD should be
/// flipped to BD so that a triangulation stays locally Delaunay.
///
/// This is the Cline & Renka angle test: flip when the angles ABC and CDA
/// sum to more than 180 degrees, i.e. when `sin(ABC + CDA) < 0`. Expanding
/// with `sin(x + y) = sin x cos y + cos x sin y` and expressing sines and
/// cosines through cross and dot products of the edge vectors (the edge
/// lengths cancel in the comparison) reduces the test to integer
/// arithmetic. Everything is evaluated exactly, in 64-bit and then 128-bit
/// precision, so the answer is correct even for near-cocircular inputs
/// where floating point gives the wrong sign. Exactly cocircular points do
/// not flip.
///
/// The caller must pass a simple convex quadrilateral with its vertices in
/// clockwise order and diagonal AC shared by triangles ABC and ACD, with
/// coordinate magnitudes of at most [`MAX_COORD`].
///
/// # Examples
///
/// ```rust
/// use delaunay_flip::should_flip;
///
/// // A clockwise square is already Delaunay: the corners are cocircular
/// // and the diagonal stays.
/// assert!(!should_flip(0, 0, 0, 10, 10, 10, 10, 0));
///
/// // Pulling D inside the circumcircle of ABC forces a flip.
/// assert!(should_flip(0, 0, 0, 10, 10, 10, 9, 1));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn should_flip(
  ax: i32,
  ay: i32,
  bx: i32,
  by: i32,
  cx: i32,
  cy: i32,
  dx: i32,
  dy: i32,
) -> bool {
  should_flip_with::<i64, Int128>(ax, ay, bx, by, cx, cy, dx, dy)
}

/// [`should_flip`], generalized over the integer types backing the two
/// precision roles: `E` holds the per-edge dot and cross products and `C`
/// holds the sine-sum terms, which are products of two `E` values.
///
/// Every conforming backend pair returns bit-for-bit identical booleans;
/// this is how the fixed-width kernel is validated against `BigInt`.
#[allow(clippy::too_many_arguments)]
pub fn should_flip_with<E, C>(
  ax: i32,
  ay: i32,
  bx: i32,
  by: i32,
  cx: i32,
  cy: i32,
  dx: i32,
  dy: i32,
) -> bool
where
  E: EdgeScalar,
  C: CrossScalar<E>,
{
  let abx = i64::from(ax) - i64::from(bx);
  let aby = i64::from(ay) - i64::from(by);
  let cbx = i64::from(cx) - i64::from(bx);
  let cby = i64::from(cy) - i64::from(by);
  let cdx = i64::from(cx) - i64::from(dx);
  let cdy = i64::from(cy) - i64::from(dy);
  let adx = i64::from(ax) - i64::from(dx);
  let ady = i64::from(ay) - i64::from(dy);

  let cos_abc = E::product(abx, cbx) + E::product(aby, cby);
  let cos_cda = E::product(cdx, adx) + E::product(cdy, ady);

  // Neither angle is obtuse: the sum cannot reach 180 degrees.
  if cos_abc >= E::zero() && cos_cda >= E::zero() {
    return false;
  }
  // Both angles are obtuse; for a simple convex quadrilateral the sum
  // exceeds 180 degrees.
  if cos_abc < E::zero() && cos_cda < E::zero() {
    return true;
  }

  let sin_abc = E::product(abx, cby) + (-E::product(cbx, aby));
  let sin_cda = E::product(cdx, ady) + (-E::product(adx, cdy));

  let sin_sum = C::product(&sin_abc, &cos_cda) + C::product(&cos_abc, &sin_cda);
  sin_sum < C::zero()
}
