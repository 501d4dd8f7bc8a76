pub mod adjust_case;
pub mod char_length;
pub mod normalize_filler_whitespace;

pub use adjust_case::{adjust_case, capitalize_first};
pub use char_length::char_length;
pub use normalize_filler_whitespace::normalize_filler_whitespace;
