// src/presentation/mod.rs
// DOCUMENTATION: UI-agnostic view models for the public pages
// PURPOSE: Carousel, category cards, room details and the price table

pub mod carousel;
pub mod category_card;
pub mod media_slot;
pub mod price_table;
pub mod room_details;

pub use carousel::*;
pub use category_card::*;
pub use media_slot::*;
pub use price_table::*;
pub use room_details::*;
