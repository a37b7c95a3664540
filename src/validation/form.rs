use crate::core::error::AccountError;
use crate::models::forms::{LoginForm, RegisterForm};
use crate::models::user::{BloodGroup, Registration};

impl RegisterForm {
    /// Type the raw form fields
    ///
    /// Emptiness of every field is checked first so that a half-filled form
    /// always reports `missing field`, whatever else is wrong with it.
    pub fn validate(self) -> Result<Registration, AccountError> {
        let text_fields = [&self.name, &self.age, &self.blood_group, &self.username];

        if text_fields.iter().any(|field| field.trim().is_empty())
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(AccountError::missing_field());
        }

        let age = self
            .age
            .trim()
            .parse::<i64>()
            .map_err(|_| AccountError::Validation("invalid age".to_string()))?;

        // Range is enforced by the store, this only has to fit the type
        let age = u8::try_from(age)
            .map_err(|_| AccountError::Validation("age out of range".to_string()))?;

        let blood_group = self
            .blood_group
            .parse::<BloodGroup>()
            .map_err(|_| AccountError::Validation("invalid blood group".to_string()))?;

        Ok(Registration {
            name: self.name,
            age,
            blood_group,
            username: self.username,
            password: self.password,
            confirm_password: self.confirm_password,
        })
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AccountError::missing_field());
        }
        Ok(())
    }
}
