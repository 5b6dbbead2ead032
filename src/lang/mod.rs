/*!
# Rust Language Module

This Rust module describes the keypad: buttons, the keys they produce,
and the lexer that turns a typed line of button labels into key presses.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod key;
mod keypad;
mod lex;

pub use error::Error;
pub use error::ErrorCode;
pub use key::Action;
pub use key::Key;
pub use key::Operator;
pub use keypad::Button;
pub use keypad::Keypad;
pub use lex::lex;

#[cfg(test)]
mod tests;
