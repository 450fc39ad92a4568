// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::config::Config;
use crate::generators::password::guaranteed_symbols;
use crate::models::{CharacterClass, PasswordGenerationOptions};

// Password generator
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PasswordGenerationRequest {
    /// Password length (4-128, defaults to 12)
    pub length: Option<usize>,
    /// Include uppercase letters (default true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default true)
    pub include_lowercase: Option<bool>,
    /// Include digits (default true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default true)
    pub include_symbols: Option<bool>,
    /// Minimum number of symbols in the password
    pub special_chars: Option<usize>,
}

impl PasswordGenerationRequest {
    /// Resolve optional fields against the configured defaults.
    pub fn to_options(&self, config: &Config) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: self.include_uppercase.unwrap_or(true),
            include_lowercase: self.include_lowercase.unwrap_or(true),
            include_numbers: self.include_numbers.unwrap_or(true),
            include_symbols: self.include_symbols.unwrap_or(true),
            special_chars: Some(self.special_chars.unwrap_or(config.default_special_chars)),
        }
    }
}

/// Criteria actually used to build the password.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GenerationCriteria {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Minimum number of symbols placed in the password
    pub special_chars: usize,
}

impl From<&PasswordGenerationOptions> for GenerationCriteria {
    fn from(options: &PasswordGenerationOptions) -> Self {
        let classes = options.enabled_classes();
        Self {
            length: options.length,
            include_uppercase: classes.contains(&CharacterClass::Uppercase),
            include_lowercase: classes.contains(&CharacterClass::Lowercase),
            include_numbers: classes.contains(&CharacterClass::Digit),
            include_symbols: classes.contains(&CharacterClass::Symbol),
            special_chars: guaranteed_symbols(options),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// The generated password
    pub password: String,
    /// Strength score between 0 and 100
    pub strength: u8,
    pub criteria: GenerationCriteria,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Description of what went wrong
    pub error: String,
}

// System
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
