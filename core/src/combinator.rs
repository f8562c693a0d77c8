//! Combinators that transform or combine options. Every combinator is available as a method on [`Opt`] and as
//! a free function taking the option as its first argument.

use crate::option::Opt;
use crate::pair::Pair;

impl<T> Opt<T> {
  /// Applies `f` to the value if `Some`. `f` is not called on `None`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
    match self {
      Self::Some(value) => Opt::Some(f(value)),
      Self::None => Opt::None,
    }
  }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => f(value),
      Self::None => default,
    }
  }

  /// Returns `f(value)` if `Some`, or `default()` if `None`. Exactly one of the functions is called.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => f(value),
      Self::None => default(),
    }
  }

  /// Returns `f(value)` if `Some`, `None` otherwise. Also known as flat-map.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
    match self {
      Self::Some(value) => f(value),
      Self::None => Opt::None,
    }
  }

  /// Keeps the value only if `predicate` holds for it. `predicate` is not called on `None`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Some(value) => if predicate(&value) { Self::Some(value) } else { Self::None },
      Self::None => Self::None,
    }
  }

  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Self::Some(_) => self,
      Self::None => other,
    }
  }

  /// Returns `self` if `Some`, otherwise calls `f`.
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Some(_) => self,
      Self::None => f(),
    }
  }

  /// Calls `f` with a reference to the value if `Some`, then returns `self` unchanged. Panics in `f`
  /// propagate to the caller.
  #[inline]
  pub fn tap(self, f: impl FnOnce(&T)) -> Self {
    if let Self::Some(value) = &self {
      f(value);
    }
    self
  }

  /// Exhaustive case split: calls `on_some` with the value if `Some`, or `on_none` if `None`.
  #[inline]
  pub fn match_with<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
    match self {
      Self::Some(value) => on_some(value),
      Self::None => on_none(),
    }
  }

  /// Applies the fallible `f` to the value if `Some`.
  ///
  /// Returns `Ok(None)` if `self` is `None`, `Err` if `f` fails, and `Ok(Some(..))` otherwise.
  #[inline]
  pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Opt<U>, E> {
    match self {
      Self::Some(value) => f(value).map(Opt::Some),
      Self::None => Ok(Opt::None),
    }
  }

  /// Returns a [`Pair`] of both values if both options are `Some`, `None` otherwise.
  #[inline]
  pub fn zip<U>(self, other: Opt<U>) -> Opt<Pair<T, U>> {
    match (self, other) {
      (Self::Some(first), Opt::Some(second)) => Opt::Some(Pair { first, second }),
      _ => Opt::None,
    }
  }
}

impl<T> Opt<Opt<T>> {
  #[inline]
  pub fn flatten(self) -> Opt<T> {
    match self {
      Self::Some(inner) => inner,
      Self::None => Opt::None,
    }
  }
}


#[inline]
pub fn map<T, U>(o: Opt<T>, f: impl FnOnce(T) -> U) -> Opt<U> { o.map(f) }

#[inline]
pub fn map_or<T, U>(o: Opt<T>, default: U, f: impl FnOnce(T) -> U) -> U { o.map_or(default, f) }

#[inline]
pub fn map_or_else<T, U>(o: Opt<T>, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
  o.map_or_else(default, f)
}

#[inline]
pub fn and_then<T, U>(o: Opt<T>, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> { o.and_then(f) }

#[inline]
pub fn filter<T>(o: Opt<T>, predicate: impl FnOnce(&T) -> bool) -> Opt<T> { o.filter(predicate) }

#[inline]
pub fn or<T>(o: Opt<T>, other: Opt<T>) -> Opt<T> { o.or(other) }

#[inline]
pub fn or_else<T>(o: Opt<T>, f: impl FnOnce() -> Opt<T>) -> Opt<T> { o.or_else(f) }

#[inline]
pub fn flatten<T>(o: Opt<Opt<T>>) -> Opt<T> { o.flatten() }

#[inline]
pub fn tap<T>(o: Opt<T>, f: impl FnOnce(&T)) -> Opt<T> { o.tap(f) }

#[inline]
pub fn match_with<T, R>(o: Opt<T>, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
  o.match_with(on_some, on_none)
}

#[inline]
pub fn try_map<T, U, E>(o: Opt<T>, f: impl FnOnce(T) -> Result<U, E>) -> Result<Opt<U>, E> { o.try_map(f) }

/// Returns true if both options are `None`, or both are `Some` with values equal according to `T`'s `==`.
/// Non-reflexive equality is kept: `Some(f64::NAN)` is not equal to itself.
#[inline]
pub fn equals<T: PartialEq>(a: &Opt<T>, b: &Opt<T>) -> bool { a == b }

#[inline]
pub fn zip<T, U>(a: Opt<T>, b: Opt<U>) -> Opt<Pair<T, U>> { a.zip(b) }
