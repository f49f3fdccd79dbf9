/// Server services
pub mod access;
pub mod accounts;
pub mod credentials;

pub use credentials::CredentialService;
