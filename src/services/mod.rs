// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod cloudinary_client;
pub mod gallery_service;
pub mod media_gateway;
pub mod media_host;
pub mod media_urls;
pub mod price_feed;

pub use cloudinary_client::*;
pub use gallery_service::*;
pub use media_gateway::*;
pub use media_host::*;
pub use media_urls::*;
pub use price_feed::*;
