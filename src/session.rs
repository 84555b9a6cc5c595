use tracing::{info, warn};

use crate::error::{ValidationError, join_messages};
use crate::fd::FunctionalDependency;
use crate::script_ast::*;
use crate::store::{FdId, FdStore};
use crate::{table_layout, table_renderer};

/// Result of running one script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted {
        line: usize,
        id: FdId,
        fd: FunctionalDependency,
    },
    Rejected {
        line: usize,
        errors: Vec<ValidationError>,
    },
    Deleted {
        line: usize,
        id: FdId,
        found: bool,
    },
    Shown {
        line: usize,
        table: String,
    },
}

/// Owns the store for one run and applies commands to it in order.
#[derive(Debug, Default)]
pub struct Session {
    store: FdStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &FdStore {
        &self.store
    }

    pub fn run(&mut self, script: &Script) -> Vec<Outcome> {
        script.commands.iter().map(|c| self.apply(c)).collect()
    }

    pub fn apply(&mut self, command: &Command) -> Outcome {
        let line = command.line;
        match &command.kind {
            CommandKind::Submit {
                determinant,
                dependent,
            } => match self.store.submit(determinant, dependent) {
                Ok((id, fd)) => Outcome::Accepted {
                    line,
                    id,
                    fd: fd.clone(),
                },
                Err(errors) => {
                    info!(line, reason = %join_messages(&errors), "dependency rejected");
                    Outcome::Rejected { line, errors }
                }
            },
            CommandKind::Delete(raw) => {
                let id = FdId::new(*raw);
                let found = self.store.remove(id).is_some();
                if found {
                    info!(line, %id, "dependency deleted");
                } else {
                    warn!(line, %id, "no dependency with this id");
                }
                Outcome::Deleted { line, id, found }
            }
            CommandKind::Show => Outcome::Shown {
                line,
                table: render_table(&self.store),
            },
        }
    }
}

pub fn render_table(store: &FdStore) -> String {
    table_renderer::render(&table_layout::compute(store))
}

/// One report line per outcome; `show` snapshots are printed below their line.
pub fn render_report(outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let text = match outcome {
            Outcome::Accepted { line, id, fd } => format!("line {line}: accepted {id}  {fd}"),
            Outcome::Rejected { line, errors } => {
                format!("line {line}: rejected: {}", join_messages(errors))
            }
            Outcome::Deleted { line, id, found: true } => format!("line {line}: deleted {id}"),
            Outcome::Deleted { line, id, found: false } => format!("line {line}: no entry {id}"),
            Outcome::Shown { line, table } => format!("line {line}:\n{table}"),
        };
        out.push_str(&text);
        out.push('\n');
    }
    out
}

pub fn has_rejections(outcomes: &[Outcome]) -> bool {
    outcomes.iter().any(|o| matches!(o, Outcome::Rejected { .. }))
}
