//! JSON encoding of options with [`serde_json`]. Built on [`encode_option`] and [`decode_option`], so empty input
//! also decodes to `None`, unlike [`serde_json::from_slice`] on an [`Opt`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{decode_option, encode_option, NULL_TEXT};
use crate::option::Opt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Failed to encode option value as JSON: {0}")]
  Encode(#[source] serde_json::Error),
  #[error("Failed to decode option value from JSON: {0}")]
  Decode(#[source] serde_json::Error),
}

pub fn to_vec<T: Serialize>(o: &Opt<T>) -> Result<Vec<u8>, Error> {
  encode_option(o, |value| serde_json::to_vec(value)).map_err(Error::Encode).inspect_err(log_error)
}

pub fn to_string<T: Serialize>(o: &Opt<T>) -> Result<String, Error> {
  match o {
    Opt::Some(value) => serde_json::to_string(value).map_err(Error::Encode).inspect_err(log_error),
    Opt::None => Ok(NULL_TEXT.to_string()),
  }
}

pub fn from_slice<T: DeserializeOwned>(data: &[u8]) -> Result<Opt<T>, Error> {
  decode_option(data, |data| serde_json::from_slice(data)).map_err(Error::Decode).inspect_err(log_error)
}

#[inline]
pub fn from_str<T: DeserializeOwned>(data: &str) -> Result<Opt<T>, Error> {
  from_slice(data.as_bytes())
}

#[inline]
fn log_error(_cause: &Error) {
  #[cfg(feature = "tracing")]
  tracing::debug!(cause = %_cause, "JSON conversion of option failed");
}
