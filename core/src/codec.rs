//! Conversion between options and a JSON-compatible byte encoding, using caller-supplied codec functions for
//! the contained value. `None` is encoded as `null`; input that is empty or `null` decodes to `None`.

use crate::option::Opt;

/// Encoding of `None`.
pub const NULL_TEXT: &str = "null";
/// Encoding of `None`, as bytes.
pub const NULL: &[u8] = NULL_TEXT.as_bytes();

/// Encodes `o` as `null` if `None`, or as `encode(value)` if `Some`. Errors from `encode` are returned as-is.
pub fn encode_option<T, E>(
  o: &Opt<T>,
  encode: impl FnOnce(&T) -> Result<Vec<u8>, E>,
) -> Result<Vec<u8>, E> {
  match o {
    Opt::Some(value) => encode(value).inspect_err(|_| {
      #[cfg(feature = "tracing")]
      tracing::debug!(error_type = std::any::type_name::<E>(), "failed to encode option value");
    }),
    Opt::None => Ok(NULL.to_vec()),
  }
}

/// Decodes `data` into an option.
///
/// If `data` is empty or `null` after trimming Unicode whitespace, returns `None` without calling `decode`.
/// Otherwise calls `decode` on the full, untrimmed `data`, returning `Some` of the decoded value, or the error
/// from `decode` if it fails.
pub fn decode_option<T, E>(
  data: &[u8],
  decode: impl FnOnce(&[u8]) -> Result<T, E>,
) -> Result<Opt<T>, E> {
  if is_null(data) {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = data.len(), "decoded empty or null input as None");
    return Ok(Opt::None);
  }
  match decode(data) {
    Ok(value) => Ok(Opt::Some(value)),
    Err(cause) => {
      #[cfg(feature = "tracing")]
      tracing::debug!(error_type = std::any::type_name::<E>(), "failed to decode option value");
      Err(cause)
    }
  }
}

/// Returns true if `data` is empty or exactly `null` after trimming whitespace.
///
/// Whitespace is Unicode whitespace, so `\x0b`, U+0085 and U+00A0 are trimmed as well. Invalid UTF-8 is
/// never whitespace.
#[inline]
fn is_null(data: &[u8]) -> bool {
  let text = String::from_utf8_lossy(data);
  let trimmed = text.trim();
  trimmed.is_empty() || trimmed == NULL_TEXT
}
