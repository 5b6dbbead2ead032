use calc::mach::Calculator;

/// Enters a line and returns the result line, or the errors.
pub fn exec(calculator: &mut Calculator, line: &str) -> String {
    let errors = calculator.enter(line);
    if !errors.is_empty() {
        let mut s = String::new();
        for error in errors.iter() {
            s.push_str(&format!("?{}\n", error));
        }
        return s;
    }
    calculator.screen().result
}

pub fn run(line: &str) -> String {
    exec(&mut Calculator::new(), line)
}
