//! Short identifier generation.
//!
//! The same generator backs both short URL codes and user ids. It gives no
//! uniqueness guarantee on its own; callers collision-check against their
//! store and retry, bounded by [`MAX_CODE_ATTEMPTS`].

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated identifiers.
pub const CODE_LENGTH: usize = 6;

/// Maximum collision-retry draws before a creation attempt fails.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Generates a random identifier of [`CODE_LENGTH`] ASCII-alphanumeric
/// characters.
///
/// Pure random draw with no side effects and no uniqueness guarantee.
///
/// # Examples
///
/// ```
/// use tinyapp::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
