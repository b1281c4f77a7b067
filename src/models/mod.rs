// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod contact;
pub mod gallery;
pub mod media;
pub mod pricing;
pub mod room;

pub use contact::*;
pub use gallery::*;
pub use media::*;
pub use pricing::*;
pub use room::*;
