// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// One of the four alphabets a password can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Order in which mandatory characters are dropped when they do not fit.
    pub const TIE_BREAK_ORDER: [CharacterClass; 4] = [
        CharacterClass::Symbol,
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digit => b"0123456789",
            CharacterClass::Symbol => b"!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Minimum number of symbols; `None` means one when symbols are enabled.
    pub special_chars: Option<usize>,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            special_chars: None,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digit => self.include_numbers,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    /// Enabled classes in alphabet order. Falls back to all four when none is set.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let classes: Vec<CharacterClass> = [
            CharacterClass::Lowercase,
            CharacterClass::Uppercase,
            CharacterClass::Digit,
            CharacterClass::Symbol,
        ]
        .into_iter()
        .filter(|class| self.includes(*class))
        .collect();

        if classes.is_empty() {
            vec![
                CharacterClass::Lowercase,
                CharacterClass::Uppercase,
                CharacterClass::Digit,
                CharacterClass::Symbol,
            ]
        } else {
            classes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_enabled_class_falls_back_to_all() {
        let options = PasswordGenerationOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert_eq!(options.enabled_classes().len(), 4);
    }

    #[test]
    fn enabled_classes_follow_toggles() {
        let options = PasswordGenerationOptions {
            include_uppercase: false,
            include_symbols: false,
            ..Default::default()
        };
        assert_eq!(
            options.enabled_classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Digit]
        );
    }

    #[test]
    fn symbol_alphabet_membership() {
        assert!(CharacterClass::Symbol.contains('?'));
        assert!(!CharacterClass::Symbol.contains('a'));
        assert!(!CharacterClass::Symbol.contains('é'));
    }
}
