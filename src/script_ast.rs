#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// 1-based source line.
    pub line: usize,
    pub kind: CommandKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// Raw field text on either side of `->`, passed to the validator as typed.
    Submit { determinant: String, dependent: String },
    Delete(u64),
    Show,
}
