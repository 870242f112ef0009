//! Host adapter layer
//!
//! Exposes the resolver through the call-and-response contract a gateway
//! host expects from an authentication provider.

mod traits;
mod env_provider;

pub use traits::AuthenticationProvider;
pub use env_provider::{EnvironmentAuthProvider, PROVIDER_IDENTIFIER};
