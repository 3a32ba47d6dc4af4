pub mod checker;
pub mod clauses;
pub mod errors;
pub mod grammar;
pub mod lines;
pub(crate) mod parser;

use errors::Error;

pub use checker::{check_rules, Defect, DefectKind, FileReport};
pub use clauses::{split_clauses, Clause};
pub use grammar::{GrammarShape, Operator, ParsedClause};
pub use lines::{LineJoiner, LogicalLine};
pub use parser::classify_clause;

pub type Result<R> = std::result::Result<R, Error>;
