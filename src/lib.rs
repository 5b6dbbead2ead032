//! # Keypad Calculator
//!
//! A four function calculator operated by pressing keypad buttons.
//!
//! Run the executable from a terminal. The keypad is printed at startup,
//! followed by the two display lines: the pending expression, which starts
//! out empty, and the result.
//! ```text
//! [ AC  ] [ DEL ] [  %  ] [  ÷  ]
//! [  7  ] [  8  ] [  9  ] [  ×  ]
//! [  4  ] [  5  ] [  6  ] [  −  ]
//! [  1  ] [  2  ] [  3  ] [  +  ]
//! [  0  ] [  .  ] [  =  ]
//!
//! 0
//! > █
//! ```
//!
//! Buttons are pressed by typing their labels. A whole line of presses
//! is handled before the display is redrawn.
//!
//! The state machine is usable without the terminal:
//! ```
//! use calc::mach::Calculator;
//! let mut calculator = Calculator::new();
//! calculator.enter("5 + 3 + 2 =");
//! assert_eq!(calculator.screen().result, "10");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;

#[doc(hidden)]
pub mod term;
