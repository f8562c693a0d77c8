/// Optional value: either [`Some`](Opt::Some) value of type `T`, or [`None`](Opt::None).
///
/// Values are immutable once constructed; every transformation creates a new `Opt`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Opt<T> {
  Some(T),
  None,
}

impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self { Self::None }
}

/// Creates an option containing `value`.
#[inline]
pub fn some<T>(value: T) -> Opt<T> { Opt::Some(value) }

/// Creates an option without a value.
#[inline]
pub fn none<T>() -> Opt<T> { Opt::None }


// Constructors

impl<T> Opt<T> {
  #[inline]
  pub const fn some(value: T) -> Self { Self::Some(value) }
  #[inline]
  pub const fn none() -> Self { Self::None }

  /// Creates an option holding a clone of the referenced value, or `None` if `value` is absent.
  #[inline]
  pub fn from_ref(value: Option<&T>) -> Self where T: Clone {
    match value {
      Some(value) => Self::Some(value.clone()),
      None => Self::None,
    }
  }

  /// Creates `Some(value)` if `present` is true, `None` otherwise. Mirrors the `(value, ok)` return
  /// convention, such as a map lookup that returns a zero value alongside a flag.
  #[inline]
  pub fn from_pair(value: T, present: bool) -> Self {
    if present { Self::Some(value) } else { Self::None }
  }

  /// Creates `Some` from an `Ok` value, or `None` from an `Err`, discarding the error.
  #[inline]
  pub fn from_result<E>(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Some(value),
      Err(_) => Self::None,
    }
  }

  /// Creates `Some(value)` if `present` is true, `None` otherwise.
  ///
  /// `value` is always evaluated, even when `present` is false. Do not pass an expression that fails when
  /// the condition does not hold; use `Opt::from(present.then(|| ..))` for lazy evaluation.
  #[inline]
  pub fn from_condition(present: bool, value: T) -> Self {
    Self::from_pair(value, present)
  }
}

impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Some(value),
      None => Self::None,
    }
  }
}

impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(value: Opt<T>) -> Self { value.into_option() }
}


// Inspection

impl<T> Opt<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  /// Returns `(value, true)` if `Some`, or `(T::default(), false)` if `None`.
  ///
  /// Prefer [as_option](Self::as_option) when no default value is needed.
  #[inline]
  pub fn get(&self) -> (T, bool) where T: Clone + Default {
    match self {
      Self::Some(value) => (value.clone(), true),
      Self::None => (T::default(), false),
    }
  }

  #[inline]
  pub const fn as_option(&self) -> Option<&T> {
    match self {
      Self::Some(value) => Some(value),
      Self::None => None,
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Some(value) => Some(value),
      Self::None => None,
    }
  }

  /// Returns a fresh heap-allocated copy of the value, or `None` if there is no value. Mutating the copy
  /// does not affect `self`.
  #[inline]
  pub fn to_boxed(&self) -> Option<Box<T>> where T: Clone {
    self.as_option().map(|value| Box::new(value.clone()))
  }
}


// Unwrapping

impl<T> Opt<T> {
  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with `Unwrap called on None` if `self` is `None`. Only call this when prior control flow
  /// proves a value is present.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => panic!("Unwrap called on None"),
    }
  }

  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with `msg` if `self` is `None`.
  #[inline]
  #[track_caller]
  pub fn expect(self, msg: &str) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => panic!("{}", msg),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default,
    }
  }

  /// Returns the value, or the result of `default` if `None`. `default` is only called when `None`.
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default(),
    }
  }
}
