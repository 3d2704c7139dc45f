mod empty;
mod items;
mod range;
mod repeat;

pub use empty::{empty, Empty};
pub use items::{Items, ItemsCursor};
pub use range::{range, Range, RangeCursor};
pub use repeat::{repeat, Repeat, RepeatCursor};
