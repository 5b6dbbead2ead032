/*!
## Rust Machine Module

This Rust module is the calculator state machine, its arithmetic,
and the projection of its state onto the two display lines.

*/

mod calculator;
mod operation;
mod screen;
pub mod val;

pub use calculator::Calculator;
pub use calculator::ERROR_TEXT;
pub use operation::Operation;
pub use screen::Screen;

#[cfg(test)]
mod tests;
