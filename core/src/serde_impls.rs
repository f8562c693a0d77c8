use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::option::Opt;

/// Serializes `None` as none (`null` in JSON) and `Some(value)` as `value`.
impl<T: Serialize> Serialize for Opt<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_option().serialize(serializer)
  }
}

/// Deserializes none (`null` in JSON, or a missing struct field) as `None`, and anything else as
/// `Some(T::deserialize(..))`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Opt::from)
  }
}
