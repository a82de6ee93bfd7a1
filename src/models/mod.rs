pub mod application;
pub mod draft;
pub mod listing;
pub mod listing_status;
pub mod profile;
pub mod session;
