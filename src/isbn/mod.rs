pub mod checksum;
pub mod normalize;
pub mod validator;

pub use checksum::{checksum_valid, compute_check_digit};
pub use normalize::normalize;
pub use validator::{check_shape, validate_shape, FormatError, IsbnValidator, Verdict};

/// ISBN-10 코드 길이
pub const ISBN10_LEN: usize = 10;
