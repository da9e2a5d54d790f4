use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_game_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_company_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Company name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Company name too long (max 100 characters)".to_string(),
            ));
        }

        // Check for valid characters (alphanumeric, spaces, and some special characters)
        let re = Regex::new(r"^[a-zA-Z0-9\s\-_.'&!]+$").unwrap();
        if !re.is_match(name) {
            return Err(AppError::ValidationError(
                "Company name contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }
}
