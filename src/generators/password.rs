use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{CharacterClass, PasswordGenerationOptions};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_SPECIAL_CHARS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be between {min} and {max} characters, got {length}")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("Cannot fit {required} mandatory characters into {length} characters")]
    Unsatisfiable { required: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password using the thread-local CSPRNG.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        self.generate_password_with(options, &mut rand::thread_rng())
    }

    /// Generate a password from an explicit random source.
    ///
    /// Every enabled class gets its mandatory characters first, the rest is
    /// filled from the union of enabled alphabets, then the whole sequence is
    /// shuffled.
    pub fn generate_password_with<R>(&self, options: &PasswordGenerationOptions, rng: &mut R) -> Result<String>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        validate_length(options.length)?;

        let classes = options.enabled_classes();
        let mandatory = mandatory_counts(options, &classes)?;

        let mut chars: Vec<u8> = Vec::with_capacity(options.length);
        for (class, count) in &mandatory {
            let alphabet = class.alphabet();
            let dist = Uniform::from(0..alphabet.len());
            for _ in 0..*count {
                chars.push(alphabet[dist.sample(rng)]);
            }
        }

        let pool: Vec<u8> = classes
            .iter()
            .flat_map(|class| class.alphabet().iter().copied())
            .collect();
        let dist = Uniform::from(0..pool.len());
        while chars.len() < options.length {
            chars.push(pool[dist.sample(rng)]);
        }

        chars.shuffle(rng);

        Ok(chars.into_iter().map(char::from).collect())
    }

    pub fn analyze_password_strength(&self, password: &str) -> u8 {
        analyze_password_strength(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_length(length: usize) -> Result<()> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(GeneratorError::InvalidLength {
            length,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Effective number of symbols required for `options`.
///
/// Defaults to `DEFAULT_SPECIAL_CHARS`. A request for more symbols than the
/// password is long is clamped to a third of the length, never below one.
pub fn effective_special_chars(options: &PasswordGenerationOptions) -> usize {
    let requested = options.special_chars.unwrap_or(DEFAULT_SPECIAL_CHARS);
    let clamped = if requested > options.length {
        options.length / 3
    } else {
        requested
    };
    clamped.max(1)
}

/// Number of symbols guaranteed in a password generated from `options`.
pub fn guaranteed_symbols(options: &PasswordGenerationOptions) -> usize {
    mandatory_counts(options, &options.enabled_classes())
        .ok()
        .and_then(|counts| counts.into_iter().find(|(c, _)| *c == CharacterClass::Symbol))
        .map_or(0, |(_, n)| n)
}

fn mandatory_counts(
    options: &PasswordGenerationOptions,
    classes: &[CharacterClass],
) -> Result<Vec<(CharacterClass, usize)>> {
    let mut counts: Vec<(CharacterClass, usize)> = classes
        .iter()
        .map(|class| match class {
            CharacterClass::Symbol => (*class, effective_special_chars(options)),
            _ => (*class, 1),
        })
        .collect();

    let required: usize = counts.iter().map(|(_, n)| n).sum();
    let mut excess = required.saturating_sub(options.length);

    // Surplus symbols go first, then one mandatory character per class.
    if excess > 0 {
        if let Some((_, n)) = counts.iter_mut().find(|(c, _)| *c == CharacterClass::Symbol) {
            let cut = excess.min(n.saturating_sub(1));
            *n -= cut;
            excess -= cut;
        }
    }
    for class in CharacterClass::TIE_BREAK_ORDER {
        if excess == 0 {
            break;
        }
        if let Some((_, n)) = counts.iter_mut().find(|(c, n)| *c == class && *n > 0) {
            *n -= 1;
            excess -= 1;
        }
    }

    if excess > 0 {
        return Err(GeneratorError::Unsatisfiable {
            required,
            length: options.length,
        });
    }

    Ok(counts)
}

// Analyze password strength
pub fn analyze_password_strength(password: &str) -> u8 {
    let mut score: i32 = 0;

    // Length contribution (up to 40 points)
    score += password.chars().count().min(40) as i32;

    // Character variety (15 points per class present)
    let classes_present = CharacterClass::TIE_BREAK_ORDER
        .iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .count();
    score += 15 * classes_present as i32;

    // Repeated characters
    let distinct = password.chars().collect::<HashSet<_>>().len();
    if distinct < password.chars().count() / 2 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}
