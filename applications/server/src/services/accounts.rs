/// Registration and login, shared by the HTTP API and the CLI
use crate::error::{Result, ServerError};
use crate::services::CredentialService;
use kitchen_core::{CreateUser, KitchenStorage, Role, User};

/// Registration form as submitted
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl Registration {
    fn validate(self) -> Result<CreateUser> {
        let fullname = self.fullname.trim().to_string();
        let email = self.email.trim().to_string();

        if fullname.is_empty() {
            return Err(ServerError::BadRequest("Full name is required".to_string()));
        }
        if email.is_empty() {
            return Err(ServerError::BadRequest("Email is required".to_string()));
        }
        if !email.contains('@') {
            return Err(ServerError::BadRequest("Please enter a valid email".to_string()));
        }
        if self.password.is_empty() {
            return Err(ServerError::BadRequest("Password is required".to_string()));
        }

        let role = match self.role.as_deref().map(str::trim) {
            None | Some("") => Role::default(),
            Some(raw) => raw.parse::<Role>()?,
        };

        Ok(CreateUser {
            fullname,
            email,
            password: self.password,
            role,
            phone: self.phone.filter(|p| !p.trim().is_empty()),
        })
    }
}

/// Validate and store a new account
pub async fn register(
    storage: &dyn KitchenStorage,
    credentials: &CredentialService,
    form: Registration,
) -> Result<User> {
    let mut new_user = form.validate()?;

    if storage.find_user_by_email(&new_user.email).await?.is_some() {
        return Err(ServerError::Conflict("Email already registered".to_string()));
    }

    new_user.password = credentials.seal(&new_user.password)?;
    let user = storage.create_user(new_user).await?;

    tracing::info!(user_id = %user.user_id, role = %user.role, "registered user");
    Ok(user)
}

/// Check an email/password pair
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    storage: &dyn KitchenStorage,
    credentials: &CredentialService,
    email: &str,
    password: &str,
) -> Result<User> {
    let invalid = || ServerError::Unauthorized("Invalid credentials".to_string());

    let user = storage
        .find_user_by_email(email.trim())
        .await?
        .ok_or_else(invalid)?;

    if !credentials.verify(password, &user.password)? {
        return Err(invalid());
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Registration {
        Registration {
            fullname: "Ada Cook".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            role: None,
            phone: Some(String::new()),
        }
    }

    #[test]
    fn role_defaults_to_user() {
        let user = form().validate().unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.phone, None);
    }

    #[test]
    fn staff_is_accepted_as_user() {
        let user = Registration {
            role: Some("staff".to_string()),
            ..form()
        }
        .validate()
        .unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn unknown_role_is_bad_request() {
        let err = Registration {
            role: Some("admin".to_string()),
            ..form()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let missing_name = Registration {
            fullname: "  ".to_string(),
            ..form()
        };
        assert_eq!(
            missing_name.validate().unwrap_err().to_string(),
            "Full name is required"
        );

        let bad_email = Registration {
            email: "not-an-email".to_string(),
            ..form()
        };
        assert_eq!(
            bad_email.validate().unwrap_err().to_string(),
            "Please enter a valid email"
        );

        let no_password = Registration {
            password: String::new(),
            ..form()
        };
        assert!(no_password.validate().is_err());
    }
}
