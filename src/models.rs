// src/models.rs
use uuid::Uuid;
use serde::{Serialize, Deserialize};

/// Shortest password the form will generate.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Longest password the form will generate.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// A password produced by one successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub id: Uuid,
    pub value: String,
}

impl GeneratedPassword {
    pub fn new(value: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_letters: bool,
    pub include_special: bool,
}

impl PasswordGenerationOptions {
    pub fn any_class_selected(&self) -> bool {
        self.include_numbers || self.include_letters || self.include_special
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: MIN_PASSWORD_LENGTH,
            include_numbers: true,
            include_letters: true,
            include_special: true,
        }
    }
}
