// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod gallery_repository;
pub mod price_repository;

pub use gallery_repository::{GalleryRepository, GalleryStore};
pub use price_repository::*;

#[cfg(test)]
pub(crate) use gallery_repository::test_support;

use crate::errors::HotelError;

/// Map a driver error to a DatabaseError
/// DOCUMENTATION: The sqlx error is logged; clients only see `message`
pub(crate) fn persistence_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> HotelError {
    move |e| {
        log::error!("{}: {}", message, e);
        HotelError::DatabaseError(message.to_string())
    }
}
