use super::*;
use crate::lang::Key;

mod calculator_test;

fn press_all(calc: &mut Calculator, keys: &[Key]) -> Screen {
    for key in keys {
        calc.press(*key);
    }
    calc.screen()
}
