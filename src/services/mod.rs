pub mod activity_logger;
pub mod auth;

pub use activity_logger::ActivityLogger;
pub use auth::{AuthService, AuthedUser};
