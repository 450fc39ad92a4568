pub mod password;

pub use password::{GeneratorError, PasswordGenerator};
