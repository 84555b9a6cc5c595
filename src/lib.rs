pub mod attr;
pub mod display_width;
pub mod error;
pub mod fd;
pub mod logging;
pub mod script_ast;
pub mod script_parser;
pub mod session;
pub mod store;
pub mod table_layout;
pub mod table_renderer;
pub mod validator;

pub use attr::{Attribute, AttributeSet, parse_attribute_list};
pub use error::{ValidationError, join_messages};
pub use fd::FunctionalDependency;
pub use script_parser::ScriptError;
pub use session::{Outcome, Session};
pub use store::{FdId, FdStore};
pub use validator::validate_dependency;

/// Output of one script run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
    /// The final store rendered as a table.
    pub table: String,
}

impl Report {
    pub fn has_rejections(&self) -> bool {
        session::has_rejections(&self.outcomes)
    }

    /// Process exit status: 1 only when `strict` and something was rejected.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && self.has_rejections() { 1 } else { 0 }
    }

    pub fn to_text(&self, with_table: bool) -> String {
        let mut out = session::render_report(&self.outcomes);
        if with_table {
            out.push_str(&self.table);
            out.push('\n');
        }
        out
    }
}

/// Parse and run a session script against a fresh store.
pub fn check(input: &str) -> Result<Report, ScriptError> {
    let script = script_parser::parse_script(input)?;
    let mut session = Session::new();
    let outcomes = session.run(&script);
    Ok(Report {
        outcomes,
        table: session::render_table(session.store()),
    })
}
