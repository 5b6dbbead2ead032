use super::{val, Operation, Screen};
use crate::error;
use crate::lang::{lex, Action, Error, Key, Operator};
use log::{debug, trace, warn};

/// Text shown on the result line while a fault is pending.
pub const ERROR_TEXT: &str = "Error";

/// ## Keypad calculator state
///
/// Holds the operand being typed, the stored left operand, and the
/// pending operator. One instance per session; every key press is
/// handled to completion before the next.
#[derive(Debug, Clone)]
pub struct Calculator {
    current: String,
    previous: String,
    operator: Option<Operator>,
    fault: Option<Error>,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator {
            current: "0".to_string(),
            previous: String::new(),
            operator: None,
            fault: None,
        }
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// The error behind an "Error" display, if one is showing.
    pub fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }

    /// Presses each key on a typed line. Nothing is pressed unless
    /// the whole line lexes cleanly.
    pub fn enter(&mut self, s: &str) -> Vec<Error> {
        self.enter_with(s, |_, _| {})
    }

    /// Like `enter`, calling `pressed` after every key.
    pub fn enter_with<F>(&mut self, s: &str, mut pressed: F) -> Vec<Error>
    where
        F: FnMut(Key, &Calculator),
    {
        let (keys, errors) = lex(s);
        if errors.is_empty() {
            for key in keys {
                self.press(key);
                pressed(key, self);
            }
        }
        errors
    }

    pub fn press(&mut self, key: Key) {
        trace!("press {}", key);
        match key {
            Key::Digit(d) if d <= 9 => self.input(char::from(b'0' + d)),
            Key::Digit(d) => warn!("ignored digit {}", d),
            Key::Point => self.input('.'),
            Key::Operator(op) => self.choose(op),
            Key::Action(Action::Equals) => self.equals(),
            Key::Action(Action::Clear) => self.clear(),
            Key::Action(Action::Delete) => self.delete(),
            Key::Action(Action::Percent) => self.percent(),
        }
    }

    pub fn screen(&self) -> Screen {
        let result = match self.fault {
            Some(_) => ERROR_TEXT.to_string(),
            None => self.current.clone(),
        };
        let expression = match self.operator {
            Some(op) => format!("{} {}", self.previous, op),
            None => String::new(),
        };
        Screen { result, expression }
    }

    fn input(&mut self, ch: char) {
        if self.fault.take().is_some() {
            self.clear();
        }
        if ch == '.' {
            if !self.current.contains('.') {
                self.current.push('.');
            }
        } else if self.current == "0" {
            self.current = ch.to_string();
        } else {
            self.current.push(ch);
        }
    }

    fn choose(&mut self, op: Operator) {
        if self.fault.is_some() {
            return;
        }
        if !self.previous.is_empty() && self.operator.is_some() {
            self.equals();
            if self.fault.is_some() {
                return;
            }
        }
        self.previous = std::mem::replace(&mut self.current, "0".to_string());
        self.operator = Some(op);
    }

    fn equals(&mut self) {
        if self.fault.is_some() || self.previous.is_empty() {
            return;
        }
        let op = match self.operator {
            Some(op) => op,
            None => return,
        };
        match Operation::apply(op, &self.previous, &self.current) {
            Ok(result) => {
                debug!("{} {} {} = {}", self.previous, op, self.current, result);
                self.current = result;
                self.previous.clear();
                self.operator = None;
            }
            Err(error) => {
                warn!("{} {} {}: {}", self.previous, op, self.current, error);
                self.clear();
                self.fault = Some(error);
            }
        }
    }

    fn clear(&mut self) {
        *self = Calculator::default();
    }

    fn delete(&mut self) {
        if self.fault.is_some() {
            self.clear();
            return;
        }
        self.current.pop();
        if self.current.is_empty() || self.current == "-" {
            self.current = "0".to_string();
        }
    }

    fn percent(&mut self) {
        if self.fault.is_some() || self.current == "0" {
            return;
        }
        let result = val::parse(&self.current).ok_or_else(|| error!(InternalError; "NOT A NUMBER"));
        match result.and_then(Operation::percent) {
            Ok(n) => self.current = val::format(n),
            Err(error) => {
                warn!("{} %: {}", self.current, error);
                self.clear();
                self.fault = Some(error);
            }
        }
    }
}
