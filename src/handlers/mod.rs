// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod admin;
pub mod contact;
pub mod form;
pub mod health;
pub mod prices;
pub mod upload;

pub use admin::config as admin_config;
pub use contact::config as contact_config;
pub use health::config as health_config;
pub use prices::config as prices_config;
pub use upload::config as upload_config;
