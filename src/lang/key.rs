use super::Error;
use crate::error;

/// A single button press.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Digit(u8),
    Point,
    Operator(Operator),
    Action(Action),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

/// Buttons tagged with a named action rather than a value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Equals,
    Clear,
    Delete,
    Percent,
}

impl Key {
    /// Dispatches button metadata the way the keypad tags it.
    /// An action wins over everything, then the operator class,
    /// then the plain value.
    pub fn from_button(
        action: Option<&str>,
        value: Option<&str>,
        is_operator: bool,
    ) -> Result<Key, Error> {
        if let Some(action) = action {
            return match Action::from_name(action) {
                Some(action) => Ok(Key::Action(action)),
                None => Err(error!(SyntaxError; "UNKNOWN ACTION")),
            };
        }
        if is_operator {
            return match value.and_then(Operator::from_symbol) {
                Some(op) => Ok(Key::Operator(op)),
                None => Err(error!(SyntaxError; "UNKNOWN OPERATOR")),
            };
        }
        match value {
            Some(".") => Ok(Key::Point),
            Some(s) => match s.as_bytes() {
                [d @ b'0'..=b'9'] => Ok(Key::Digit(d - b'0')),
                _ => Err(error!(SyntaxError; "UNKNOWN VALUE")),
            },
            None => Err(error!(SyntaxError; "BUTTON HAS NO VALUE")),
        }
    }

    /// Looks up a typed button label. Case does not matter.
    pub fn from_label(s: &str) -> Option<Key> {
        if let Some(op) = Operator::from_symbol(s) {
            return Some(Key::Operator(op));
        }
        match s.to_ascii_uppercase().as_str() {
            "." => Some(Key::Point),
            "=" | "EQUALS" => Some(Key::Action(Action::Equals)),
            "AC" | "C" | "CLEAR" => Some(Key::Action(Action::Clear)),
            "DEL" | "BS" | "DELETE" => Some(Key::Action(Action::Delete)),
            "%" | "PERCENT" => Some(Key::Action(Action::Percent)),
            d if d.len() == 1 && d.as_bytes()[0].is_ascii_digit() => {
                Some(Key::Digit(d.as_bytes()[0] - b'0'))
            }
            _ => None,
        }
    }
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "+" => Some(Plus),
            "-" | "\u{2212}" => Some(Minus),
            "*" | "x" | "X" | "\u{d7}" => Some(Multiply),
            "/" | "\u{f7}" => Some(Divide),
            _ => None,
        }
    }

    /// Glyph printed on the keypad button.
    pub const fn glyph(self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "+",
            Minus => "\u{2212}",
            Multiply => "\u{d7}",
            Divide => "\u{f7}",
        }
    }

    /// Value the keypad button carries.
    pub const fn symbol(self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
        }
    }
}

impl Action {
    pub fn from_name(s: &str) -> Option<Action> {
        use Action::*;
        match s {
            "equals" => Some(Equals),
            "clear" => Some(Clear),
            "delete" => Some(Delete),
            "percent" => Some(Percent),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        use Action::*;
        match self {
            Equals => "equals",
            Clear => "clear",
            Delete => "delete",
            Percent => "percent",
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d),
            Key::Point => write!(f, "."),
            Key::Operator(op) => write!(f, "{}", op),
            Key::Action(action) => write!(f, "{}", action),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Action::*;
        match self {
            Equals => write!(f, "="),
            Clear => write!(f, "AC"),
            Delete => write!(f, "DEL"),
            Percent => write!(f, "%"),
        }
    }
}
