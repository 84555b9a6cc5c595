use thiserror::Error;
use winnow::prelude::*;
use winnow::ascii::{dec_uint, space0, space1};
use winnow::combinator::{alt, eof, opt};
use winnow::token::{rest, take_until};

use crate::script_ast::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("syntax error on line {line}: unexpected `{context}`")]
    Syntax { line: usize, context: String },
}

/// Parse a session script, one command per line.
///
/// ```text
/// %% comment
/// a, b -> c
/// delete #1
/// show
/// ```
pub fn parse_script(input: &str) -> Result<Script, ScriptError> {
    let mut commands = Vec::new();
    for (idx, text) in input.lines().enumerate() {
        let mut cursor = text;
        let kind = script_line(&mut cursor).map_err(|_| ScriptError::Syntax {
            line: idx + 1,
            context: excerpt(text.trim()),
        })?;
        if let Some(kind) = kind {
            commands.push(Command {
                line: idx + 1,
                kind,
            });
        }
    }
    Ok(Script { commands })
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(40) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn script_line(input: &mut &str) -> winnow::Result<Option<CommandKind>> {
    alt((
        comment_line.map(|_| None),
        blank_line.map(|_| None),
        delete_stmt.map(|id| Some(CommandKind::Delete(id))),
        show_stmt.map(|_| Some(CommandKind::Show)),
        submit_stmt.map(Some),
    ))
    .parse_next(input)
}

fn comment_line(input: &mut &str) -> winnow::Result<()> {
    space0.parse_next(input)?;
    "%%".parse_next(input)?;
    rest.void().parse_next(input)
}

fn blank_line(input: &mut &str) -> winnow::Result<()> {
    space0.parse_next(input)?;
    eof.void().parse_next(input)
}

fn delete_stmt(input: &mut &str) -> winnow::Result<u64> {
    space0.parse_next(input)?;
    "delete".parse_next(input)?;
    space1.parse_next(input)?;
    opt("#").parse_next(input)?;
    let id: u64 = dec_uint.parse_next(input)?;
    space0.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(id)
}

fn show_stmt(input: &mut &str) -> winnow::Result<()> {
    space0.parse_next(input)?;
    "show".parse_next(input)?;
    space0.parse_next(input)?;
    eof.void().parse_next(input)
}

fn submit_stmt(input: &mut &str) -> winnow::Result<CommandKind> {
    let determinant = take_until(0.., "->").parse_next(input)?;
    "->".parse_next(input)?;
    let dependent = rest.parse_next(input)?;
    Ok(CommandKind::Submit {
        determinant: determinant.to_string(),
        dependent: dependent.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<CommandKind> {
        parse_script(input)
            .unwrap()
            .commands
            .into_iter()
            .map(|c| c.kind)
            .collect()
    }

    fn submit(det: &str, dep: &str) -> CommandKind {
        CommandKind::Submit {
            determinant: det.into(),
            dependent: dep.into(),
        }
    }

    #[test]
    fn parse_submit_keeps_raw_sides() {
        let mut input = " a, b -> c ";
        let kind = submit_stmt(&mut input).unwrap();
        assert_eq!(kind, submit(" a, b ", " c "));
        assert_eq!(input, "");
    }

    #[test]
    fn parse_submit_splits_on_first_arrow() {
        let mut input = "a -> b -> c";
        let kind = submit_stmt(&mut input).unwrap();
        assert_eq!(kind, submit("a ", " b -> c"));
    }

    #[test]
    fn parse_submit_empty_sides() {
        assert_eq!(kinds("->"), vec![submit("", "")]);
    }

    #[test]
    fn parse_delete_with_and_without_hash() {
        assert_eq!(
            kinds("delete 3\n  delete #12  \n"),
            vec![CommandKind::Delete(3), CommandKind::Delete(12)]
        );
    }

    #[test]
    fn parse_show() {
        assert_eq!(kinds("show\n"), vec![CommandKind::Show]);
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let script = parse_script("%% header\n\n   \na -> b\n  %% trailing\n").unwrap();
        assert_eq!(script.commands.len(), 1);
        assert_eq!(script.commands[0].line, 4);
    }

    #[test]
    fn parse_crlf_lines() {
        assert_eq!(
            kinds("a -> b\r\nshow\r\n"),
            vec![submit("a ", " b"), CommandKind::Show]
        );
    }

    #[test]
    fn parse_line_numbers_count_skipped_lines() {
        let script = parse_script("a -> b\n\n%% x\ndelete 1\n").unwrap();
        let lines: Vec<usize> = script.commands.iter().map(|c| c.line).collect();
        assert_eq!(lines, vec![1, 4]);
    }

    #[test]
    fn parse_error_reports_line() {
        let err = parse_script("a -> b\nnonsense here\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::Syntax {
                line: 2,
                context: "nonsense here".into()
            }
        );
    }

    #[test]
    fn parse_error_bad_delete_id() {
        let err = parse_script("delete x\n").unwrap_err();
        assert!(matches!(err, ScriptError::Syntax { line: 1, .. }));
    }

    #[test]
    fn parse_error_truncates_long_context() {
        let long = "x".repeat(60);
        let err = parse_script(&long).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(&format!("{}...", "x".repeat(40))), "got: {msg}");
    }

    #[test]
    fn parse_empty_script() {
        assert!(parse_script("").unwrap().commands.is_empty());
    }
}
