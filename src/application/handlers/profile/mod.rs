//! Profile operation handlers.

mod init_profile;

pub use init_profile::{InitProfileCommand, InitProfileHandler, InitProfileResult};
