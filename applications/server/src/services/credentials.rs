/// Password storage and verification
use crate::config::PasswordScheme;
use crate::error::{Result, ServerError};

#[derive(Debug, Clone, Copy)]
pub struct CredentialService {
    scheme: PasswordScheme,
}

impl CredentialService {
    pub fn new(scheme: PasswordScheme) -> Self {
        if scheme == PasswordScheme::Plaintext {
            tracing::warn!("Passwords are stored and compared as plaintext");
        }
        Self { scheme }
    }

    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    /// Turn a submitted password into the value that gets stored
    pub fn seal(&self, password: &str) -> Result<String> {
        match self.scheme {
            PasswordScheme::Plaintext => Ok(password.to_string()),
            PasswordScheme::Bcrypt => {
                bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
            }
        }
    }

    /// Check a login attempt against a stored value
    ///
    /// A stored value that is not a valid bcrypt hash never matches under the
    /// bcrypt scheme.
    pub fn verify(&self, candidate: &str, stored: &str) -> Result<bool> {
        match self.scheme {
            PasswordScheme::Plaintext => Ok(candidate == stored),
            PasswordScheme::Bcrypt => match bcrypt::verify(candidate, stored) {
                Ok(matches) => Ok(matches),
                Err(e) => {
                    tracing::debug!("Stored password is not a bcrypt hash: {}", e);
                    Ok(false)
                }
            },
        }
    }
}
