use crate::error::LoginError;

/// Decorative account panel. Nothing is verified or stored anywhere; the
/// fields double as the login form's inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub password: String,
    logged_in: bool,
}

impl Account {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn login(&mut self) -> Result<(), LoginError> {
        if self.email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        self.logged_in = true;
        Ok(())
    }

    /// Log out and forget both fields
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.email.clear();
        self.password.clear();
    }

    /// Password as shown on screen
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }
}
