/// Two values, produced by [zip](crate::Opt::zip).
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
  pub first: A,
  pub second: B,
}

impl<A, B> Pair<A, B> {
  #[inline]
  pub const fn new(first: A, second: B) -> Self { Self { first, second } }

  #[inline]
  pub fn into_tuple(self) -> (A, B) { (self.first, self.second) }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
  #[inline]
  fn from((first, second): (A, B)) -> Self { Self { first, second } }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
  #[inline]
  fn from(pair: Pair<A, B>) -> Self { pair.into_tuple() }
}
