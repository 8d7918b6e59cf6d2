//! Persisted session snapshot and its repository seam.

pub mod model;
pub mod repository;

pub use model::SessionSnapshot;
pub use repository::SessionRepository;
