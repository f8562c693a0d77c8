pub mod option;
pub mod pair;
pub mod combinator;
pub mod codec;

#[cfg(feature = "serde")]
mod serde_impls;
#[cfg(feature = "json")]
pub mod json;

pub use option::{none, some, Opt};
pub use pair::Pair;
pub use codec::{decode_option, encode_option};
