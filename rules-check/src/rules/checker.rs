use std::fmt::{Display, Formatter};

use log::{debug, trace, warn};

use crate::rules::clauses::{split_clauses, Clause};
use crate::rules::errors::Error;
use crate::rules::grammar::GrammarShape;
use crate::rules::lines::{LineJoiner, LogicalLine};
use crate::rules::parser::parse_clause;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectKind {
    InvalidClause,
    UnterminatedQuote,
}

impl Display for DefectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DefectKind::InvalidClause => f.write_str("invalid clause"),
            DefectKind::UnterminatedQuote => f.write_str("unterminated quoted string"),
        }
    }
}

/// First offending clause of one logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defect {
    pub line_number: usize,
    pub line: String,
    pub clause: String,
    pub kind: DefectKind,
}

impl Defect {
    fn new(line: &LogicalLine, clause: &str, kind: DefectKind) -> Self {
        Defect {
            line_number: line.line_number,
            line: line.text.clone(),
            clause: clause.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub defects: Vec<Defect>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.defects.is_empty()
    }
}

fn is_valid(clause: &Clause<'_>, origin: &str) -> bool {
    match parse_clause(clause.text, origin) {
        Ok(parsed) => match GrammarShape::classify(&parsed) {
            Some(shape) => {
                trace!("`{}` is a {} clause", clause.text, shape);
                true
            }
            None => {
                debug!(
                    "`{}` does not fit any shape, key {} {} argument with operator {}",
                    clause.text,
                    parsed.key,
                    if parsed.argument.is_some() { "with" } else { "without" },
                    parsed.operator
                );
                false
            }
        },
        Err(e) => {
            debug!("`{}` is malformed, {}", clause.text, Error::from(e));
            false
        }
    }
}

fn check_line(line: &LogicalLine, origin: &str) -> Option<Defect> {
    trace!("{}:{}: {}", origin, line.line_number, line.text);

    let mut failing = split_clauses(&line.text)
        .into_iter()
        .filter(|clause| !is_valid(clause, origin));

    let first = failing.next()?;
    for other in failing {
        debug!(
            "{}:{}: further invalid clause `{}`",
            origin, line.line_number, other.text
        );
    }

    let kind = if first.unterminated_quote {
        DefectKind::UnterminatedQuote
    } else {
        DefectKind::InvalidClause
    };
    Some(Defect::new(line, first.text, kind))
}

/// Checks the whole content of one rules file, `origin` names it in log
/// output. Every logical line is checked, at most one defect is returned per
/// line. A continued line still open at the end of the content is dropped
/// unchecked.
pub fn check_rules(content: &str, origin: &str) -> Vec<Defect> {
    let mut joiner = LineJoiner::new(content);
    let defects: Vec<Defect> = joiner
        .by_ref()
        .filter_map(|line| check_line(&line, origin))
        .collect();

    if let Some(dangling) = joiner.dangling() {
        warn!(
            "{}:{}: content ends inside a continued line, ignored",
            origin, dangling.line_number
        );
    }

    defects
}
