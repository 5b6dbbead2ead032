use super::{Action, Error, Key, Operator};

/// One button on the keypad, tagged the way a front end would tag it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub action: Option<&'static str>,
    pub value: Option<&'static str>,
    pub operator: bool,
}

impl Button {
    const fn value(label: &'static str) -> Button {
        Button {
            label,
            action: None,
            value: Some(label),
            operator: false,
        }
    }

    const fn operator(op: Operator) -> Button {
        Button {
            label: op.glyph(),
            action: None,
            value: Some(op.symbol()),
            operator: true,
        }
    }

    const fn action(label: &'static str, action: &'static str) -> Button {
        Button {
            label,
            action: Some(action),
            value: None,
            operator: false,
        }
    }

    pub fn key(&self) -> Result<Key, Error> {
        Key::from_button(self.action, self.value, self.operator)
    }
}

static ROWS: [&[Button]; 5] = [
    &[
        Button::action("AC", "clear"),
        Button::action("DEL", "delete"),
        Button::action("%", "percent"),
        Button::operator(Operator::Divide),
    ],
    &[
        Button::value("7"),
        Button::value("8"),
        Button::value("9"),
        Button::operator(Operator::Multiply),
    ],
    &[
        Button::value("4"),
        Button::value("5"),
        Button::value("6"),
        Button::operator(Operator::Minus),
    ],
    &[
        Button::value("1"),
        Button::value("2"),
        Button::value("3"),
        Button::operator(Operator::Plus),
    ],
    &[
        Button::value("0"),
        Button::value("."),
        Button::action("=", "equals"),
    ],
];

/// The fixed keypad layout.
pub struct Keypad;

impl Keypad {
    pub fn rows() -> &'static [&'static [Button]] {
        &ROWS
    }

    pub fn buttons() -> impl Iterator<Item = &'static Button> {
        ROWS.iter().flat_map(|row| row.iter())
    }

    /// Finds the button that produces `key`.
    pub fn find(key: Key) -> Option<&'static Button> {
        Keypad::buttons().find(|b| b.key() == Ok(key))
    }

    pub fn operator(op: Operator) -> Option<&'static Button> {
        Keypad::find(Key::Operator(op))
    }

    pub fn action(action: Action) -> Option<&'static Button> {
        Keypad::find(Key::Action(action))
    }
}
