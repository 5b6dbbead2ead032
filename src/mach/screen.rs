/// What the two display lines show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub result: String,
    pub expression: String,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.expression)?;
        write!(f, "{}", self.result)
    }
}
