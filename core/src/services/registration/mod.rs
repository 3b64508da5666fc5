//! Account registration service module
//!
//! Creates a new account from validated input and signs the user in by
//! minting a token for the freshly created identity.

mod service;

#[cfg(test)]
mod tests;

pub use service::RegistrationService;
