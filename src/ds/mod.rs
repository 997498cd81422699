pub mod clock_hand;
pub mod ejectable_bitmap;
pub mod slot_table;

pub use clock_hand::ClockHand;
pub use ejectable_bitmap::{ALL_EJECTABLE, EjectableBitmap, WORD_BITS, keep_mask};
pub use slot_table::{Removed, Slot, SlotTable};
