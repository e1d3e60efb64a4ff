// Jobly Infrastructure - Auth Adapters
// Implements: TokenIssuer

pub mod jwt;

pub use jwt::{JwtTokenIssuer, TokenConfig};
