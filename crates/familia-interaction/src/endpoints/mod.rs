//! Endpoint groups of [`FamiliaClient`](crate::FamiliaClient).
//!
//! Each module adds one area of the API, either as a gateway trait impl or
//! as inherent methods. Response envelopes stay private to their module.

mod auth;
mod chat;
mod contests;
mod games;
mod matching;
mod profiles;
mod rooms;
mod safety;
mod translation;
