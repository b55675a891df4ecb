//! Domain data types

pub mod avatar;
pub mod profile;
pub mod session;

pub use avatar::{AvatarImage, FileSelection};
pub use profile::{Profile, ProfileFields};
pub use session::Identity;
