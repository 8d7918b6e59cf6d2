pub mod auth;
pub mod avatar;
pub mod browse;
pub mod chat;
pub mod context;
pub mod translate;
