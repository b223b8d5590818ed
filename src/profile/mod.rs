pub mod models;
pub mod repository;

pub use models::Profile;
pub use repository::{InMemoryProfileRepository, PostgresProfileRepository, ProfileRepository};
