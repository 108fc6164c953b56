//! Domain layer for the `AuthN` resolver.

pub mod error;
pub mod gate;
pub mod local_client;
pub mod password;
pub mod service;
pub mod token_codec;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::DomainError;
pub use gate::AuthenticationGate;
pub use local_client::AuthNResolverLocalClient;
pub use password::{BcryptHasher, SecretHasher};
pub use service::Service;
pub use token_codec::TokenCodec;
