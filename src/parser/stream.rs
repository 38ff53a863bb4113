use std::io::{BufRead, Write};

use tracing::debug;

use super::classifier::{classify, split_terminator, LineKind};
use super::tracker::GroupStack;
use crate::error::ParseError;
use crate::registry::{Group, Mod, Registry};

/// Per-parse configuration, passed explicitly rather than held as ambient
/// state.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Rewrite each close marker to carry the id of the group it closes.
    pub tag_ends: bool,
    /// Zero-pad width for appended end tags.
    pub tag_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tag_ends: false,
            tag_width: 3,
        }
    }
}

/// Parse one tree stream in a single forward pass.
///
/// Every group and mod encountered lands in the returned [`Registry`]. When
/// `output` is given, each input line is echoed to it verbatim; with
/// `tag_ends` set, close-marker lines are instead rewritten to `end <id>`.
/// With `tag_ends` off the echoed output is byte-identical to the input.
///
/// Fails on an `end` with no open group and on a non-integer group id.
/// Groups still open at end-of-input are accepted and simply never produce
/// a record.
pub fn parse_tree<R: BufRead>(
    mut input: R,
    mut output: Option<&mut dyn Write>,
    options: &ParseOptions,
) -> Result<Registry, ParseError> {
    let mut registry = Registry::new();
    let mut stack = GroupStack::new();
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        line_no += 1;

        let (content, terminator) = split_terminator(&line);
        let mut tagged = None;

        match classify(content) {
            LineKind::Mod { id } => {
                registry.put_mod(Mod {
                    id,
                    group_id: stack.current(),
                });
            }
            LineKind::GroupOpen { id_text } => {
                let id = id_text.trim().parse::<u32>().map_err(|source| {
                    ParseError::InvalidGroupId {
                        line_no,
                        id_text: id_text.to_string(),
                        source,
                    }
                })?;
                stack.open(id);
            }
            LineKind::GroupEnd => {
                let closed = stack.close().ok_or_else(|| ParseError::UnmatchedEnd {
                    line_no,
                    line: content.to_string(),
                })?;
                registry.put_group(Group {
                    id: closed.id,
                    parent_id: closed.parent_id,
                    root_id: closed.root_id,
                });
                if options.tag_ends {
                    tagged = Some(format!(
                        "{content} {id:0width$}{terminator}",
                        id = closed.id,
                        width = options.tag_width
                    ));
                }
            }
            LineKind::Other => {}
        }

        if let Some(out) = output.as_deref_mut() {
            match tagged {
                Some(ref rewritten) => out.write_all(rewritten.as_bytes())?,
                None => out.write_all(line.as_bytes())?,
            }
        }
    }

    if stack.depth() > 0 {
        // Accepted: unclosed groups at end-of-input never produce records.
        debug!(open = stack.depth(), "input ended with unclosed groups");
    }
    debug!(
        lines = line_no,
        groups = registry.groups().len(),
        mods = registry.mods().len(),
        "parse complete"
    );

    Ok(registry)
}
