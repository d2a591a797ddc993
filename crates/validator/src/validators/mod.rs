//! Built-in validators
//!
//! One predicate per rule identifier understood by the
//! [`registry`](crate::registry):
//!
//! | Rule        | Type             | Arguments            |
//! |-------------|------------------|----------------------|
//! | `required`  | [`Required`]     | none                 |
//! | `equal`     | [`Equal`]        | value                |
//! | `min`       | [`Min`]          | bound                |
//! | `max`       | [`Max`]          | bound                |
//! | `alpha`     | [`Alpha`]        | none                 |
//! | `alpha-num` | [`AlphaNumeric`] | none                 |
//! | `int`       | [`Int`]          | none                 |
//! | `decimal`   | [`Decimal`]      | `[precision[:scale]]`|
//!
//! Each validator returns its default message from
//! [`messages`](crate::messages) on failure. None of them skip `null` on
//! their own; the registry wraps all but `required` in
//! [`Present`](crate::combinators::Present).

pub mod nullable;
pub mod numeric;
pub mod pattern;
pub mod range;

pub use nullable::{Required, required};
pub use numeric::{Decimal, Int, decimal, int};
pub use pattern::{Alpha, AlphaNumeric, alpha, alpha_num};
pub use range::{Equal, Max, Min, equal, max, min};
