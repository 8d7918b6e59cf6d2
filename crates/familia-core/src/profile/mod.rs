//! Member profiles, relationships and notifications.

pub mod model;

pub use model::{
    LanguageInput, Notification, Partner, Profile, ProfileUpdate, Relationship, RelationshipDetails,
    RoleSelection,
};
