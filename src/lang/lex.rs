use super::{Error, Key};
use crate::error;

/// Splits a typed line into button presses.
/// Columns count characters, not bytes.
pub fn lex(s: &str) -> (Vec<Key>, Vec<Error>) {
    ButtonLexer::new(s).lex()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct ButtonLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
    keys: Vec<Key>,
    errors: Vec<Error>,
}

impl<'a> ButtonLexer<'a> {
    fn new(s: &'a str) -> ButtonLexer<'a> {
        ButtonLexer {
            chars: s.chars().peekable(),
            col: 0,
            keys: vec![],
            errors: vec![],
        }
    }

    fn lex(mut self) -> (Vec<Key>, Vec<Error>) {
        while let Some(&pk) = self.chars.peek() {
            if is_separator(pk) {
                self.next();
            } else if is_word(pk) {
                self.word();
            } else {
                self.glyph();
            }
        }
        (self.keys, self.errors)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch.is_some() {
            self.col += 1;
        }
        ch
    }

    fn word(&mut self) {
        let start = self.col;
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !is_word(pk) {
                break;
            }
            s.push(pk);
            self.next();
        }
        match Key::from_label(&s) {
            Some(key) => self.keys.push(key),
            None => self
                .errors
                .push(error!(SyntaxError, ..&(start..self.col); "UNKNOWN BUTTON")),
        }
    }

    fn glyph(&mut self) {
        let start = self.col;
        let ch = match self.next() {
            Some(ch) => ch,
            None => return,
        };
        let mut buf = [0; 4];
        match Key::from_label(ch.encode_utf8(&mut buf)) {
            Some(key) => self.keys.push(key),
            None => self
                .errors
                .push(error!(SyntaxError, ..&(start..self.col); "UNKNOWN BUTTON")),
        }
    }
}
