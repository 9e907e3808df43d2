//! Rule-based extraction for German receipt text.

pub mod amounts;
pub mod items;
pub mod normalize;
pub mod patterns;
pub mod quantity;
pub mod total;

pub use amounts::{format_german_amount, parse_german_amount, sum_items};
pub use items::extract_items;
pub use normalize::normalize;
pub use quantity::{StrippedText, strip_quantity_blocks};
pub use total::{TotalMatch, extract_total};
