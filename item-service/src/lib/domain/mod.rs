pub mod auth;
pub mod item;
pub mod store;
pub mod user;
