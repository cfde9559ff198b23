use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::wide::Int128;
use crate::{CrossScalar, EdgeScalar};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from((x, y): (T, T)) -> Point<T> {
    Point::new([x, y])
  }
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

/// A simple convex quadrilateral ABCD with its vertices in clockwise
/// order. Triangles ABC and ACD share the diagonal AC; the candidate flip
/// replaces AC with BD.
///
/// Constructed per predicate call and not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad<T> {
  pub a: Point<T>,
  pub b: Point<T>,
  pub c: Point<T>,
  pub d: Point<T>,
}

impl<T> Quad<T> {
  pub const fn new(a: Point<T>, b: Point<T>, c: Point<T>, d: Point<T>) -> Quad<T> {
    Quad { a, b, c, d }
  }
}

impl Quad<i32> {
  /// See [`crate::should_flip`].
  pub fn should_flip(&self) -> bool {
    self.should_flip_with::<i64, Int128>()
  }

  /// See [`crate::should_flip_with`].
  pub fn should_flip_with<E, C>(&self) -> bool
  where
    E: EdgeScalar,
    C: CrossScalar<E>,
  {
    let [ax, ay] = self.a.array;
    let [bx, by] = self.b.array;
    let [cx, cy] = self.c.array;
    let [dx, dy] = self.d.array;
    crate::should_flip_with::<E, C>(ax, ay, bx, by, cx, cy, dx, dy)
  }
}

impl<T> Distribution<Quad<T>> for Standard
where
  Standard: Distribution<Point<T>>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Quad<T> {
    Quad {
      a: rng.gen(),
      b: rng.gen(),
      c: rng.gen(),
      d: rng.gen(),
    }
  }
}
