//! Line-oriented edit scripts that drive an [`Editor`] without a UI.
//!
//! ```text
//! # build a condition
//! insert age
//! insert >
//! insert 1500
//! cursor 3
//! delete
//! save
//! ```
//!
//! `insert` takes everything after the first space verbatim, including
//! spaces and `#`. Lines starting with `#` and blank lines are skipped.

use tracing::debug;

use crate::editor::Editor;
use crate::saved::SavedExpression;

/// One editing step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert the text at the cursor.
    Insert(String),
    /// Delete one logical unit before the cursor.
    Delete,
    /// Move the cursor.
    Cursor(usize),
    /// Save and validate the draft.
    Save,
    /// Empty the draft without saving.
    Clear,
}

/// Errors found while parsing an edit script.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// The first word of the line is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number.
        line: usize,
        /// The unrecognized command word.
        command: String,
    },

    /// `insert` with nothing to insert.
    #[error("line {line}: 'insert' needs text to insert")]
    MissingText {
        /// 1-based line number.
        line: usize,
    },

    /// `cursor` without a non-negative integer argument.
    #[error("line {line}: invalid cursor position '{value}'")]
    InvalidCursor {
        /// 1-based line number.
        line: usize,
        /// The argument as written.
        value: String,
    },

    /// A command that takes no argument was given one.
    #[error("line {line}: '{command}' takes no argument")]
    UnexpectedArgument {
        /// 1-based line number.
        line: usize,
        /// The command word.
        command: String,
    },
}

/// Parses an edit script into commands.
pub fn parse_script(source: &str) -> Result<Vec<EditCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim_start();
        if text.trim_end().is_empty() || text.starts_with('#') {
            continue;
        }
        let (word, rest) = text.split_once(' ').unwrap_or((text.trim_end(), ""));
        let no_argument = |cmd: EditCommand| {
            if rest.trim().is_empty() {
                Ok(cmd)
            } else {
                Err(ScriptError::UnexpectedArgument {
                    line,
                    command: word.to_string(),
                })
            }
        };
        let command = match word {
            "insert" if rest.is_empty() => return Err(ScriptError::MissingText { line }),
            "insert" => EditCommand::Insert(rest.to_string()),
            "cursor" => {
                let value = rest.trim();
                let pos = value.parse().map_err(|_| ScriptError::InvalidCursor {
                    line,
                    value: value.to_string(),
                })?;
                EditCommand::Cursor(pos)
            }
            "delete" => no_argument(EditCommand::Delete)?,
            "save" => no_argument(EditCommand::Save)?,
            "clear" => no_argument(EditCommand::Clear)?,
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                })
            }
        };
        commands.push(command);
    }
    Ok(commands)
}

/// Applies `commands` to `editor` in order, returning every save.
pub fn run_script(editor: &mut Editor, commands: &[EditCommand]) -> Vec<SavedExpression> {
    let mut saves = Vec::new();
    for command in commands {
        match command {
            EditCommand::Insert(text) => editor.insert(text),
            EditCommand::Delete => {
                editor.delete();
            }
            EditCommand::Cursor(pos) => editor.set_cursor(*pos),
            EditCommand::Save => saves.push(editor.save()),
            EditCommand::Clear => editor.clear(),
        }
    }
    debug!(commands = commands.len(), saves = saves.len(), "ran edit script");
    saves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_commands() {
        let src = "# comment\n\ninsert age\ninsert >\ncursor 2\ndelete\nclear\nsave\n";
        let cmds = parse_script(src).unwrap();
        assert_eq!(
            cmds,
            vec![
                EditCommand::Insert("age".to_string()),
                EditCommand::Insert(">".to_string()),
                EditCommand::Cursor(2),
                EditCommand::Delete,
                EditCommand::Clear,
                EditCommand::Save,
            ]
        );
    }

    #[test]
    fn insert_text_is_verbatim() {
        let cmds = parse_script("insert a # b \n  insert  x").unwrap();
        assert_eq!(
            cmds,
            vec![
                EditCommand::Insert("a # b ".to_string()),
                EditCommand::Insert(" x".to_string()),
            ]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let cmds = parse_script("insert age\r\nsave\r\n").unwrap();
        assert_eq!(
            cmds,
            vec![EditCommand::Insert("age".to_string()), EditCommand::Save]
        );
    }

    #[test]
    fn missing_insert_text() {
        assert_eq!(
            parse_script("save\ninsert").unwrap_err(),
            ScriptError::MissingText { line: 2 }
        );
    }

    #[test]
    fn bad_cursor() {
        let err = parse_script("cursor -1").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidCursor {
                line: 1,
                value: "-1".to_string()
            }
        );
        assert_eq!(format!("{err}"), "line 1: invalid cursor position '-1'");
    }

    #[test]
    fn unknown_command() {
        let err = parse_script("insert a\nundo").unwrap_err();
        assert_eq!(format!("{err}"), "line 2: unknown command 'undo'");
    }

    #[test]
    fn argument_to_delete_rejected() {
        assert!(matches!(
            parse_script("delete 3").unwrap_err(),
            ScriptError::UnexpectedArgument { line: 1, .. }
        ));
    }

    #[test]
    fn run_collects_saves() {
        let cmds = parse_script(
            "insert age\ninsert +\ninsert 1\nsave\ninsert (\ninsert debt\nsave\nsave\n",
        )
        .unwrap();
        let mut editor = Editor::default();
        let saves = run_script(&mut editor, &cmds);
        assert_eq!(saves.len(), 3);
        assert_eq!(saves[0].sequence(), "age+1");
        assert!(saves[0].is_valid());
        assert_eq!(saves[1].sequence(), "(debt");
        assert!(!saves[1].is_valid());
        assert_eq!(saves[2].sequence(), "");
        assert!(saves[2].is_valid());
    }

    #[test]
    fn run_cursor_then_delete() {
        let cmds = parse_script("insert salary\ninsert >\ninsert 10\ncursor 3\ndelete\nsave")
            .unwrap();
        let mut editor = Editor::default();
        let saves = run_script(&mut editor, &cmds);
        assert_eq!(saves[0].sequence(), ">10");
    }
}
