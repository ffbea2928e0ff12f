//! Session validation adapters.

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtSessionValidator};
pub use mock::MockSessionValidator;
