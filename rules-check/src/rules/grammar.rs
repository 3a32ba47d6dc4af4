use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Match,
    Nomatch,
    Assign,
    AssignAdd,
    AssignFinal,
}

impl Operator {
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Match => "==",
            Operator::Nomatch => "!=",
            Operator::Assign => "=",
            Operator::AssignAdd => "+=",
            Operator::AssignFinal => ":=",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A clause that is syntactically `KEY[{argument}] OP "value"`. Whether the
/// key, argument and operator belong together is decided by [`GrammarShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedClause<'a> {
    pub key: &'a str,
    pub argument: Option<&'a str>,
    pub operator: Operator,
    /// Raw text between the quotes, escape sequences left in place.
    pub value: &'a str,
}

const TEST_KEYS: &[&str] = &[
    "ACTION",
    "DEVPATH",
    "KERNEL",
    "KERNELS",
    "NAME",
    "SYMLINK",
    "SUBSYSTEM",
    "SUBSYSTEMS",
    "DRIVER",
    "DRIVERS",
    "TAG",
    "PROGRAM",
    "RESULT",
    "TEST",
];
const ARG_TEST_KEYS: &[&str] = &["ATTR", "ATTRS", "ENV", "TEST"];
const ASSIGNMENT_KEYS: &[&str] = &[
    "NAME", "SYMLINK", "OWNER", "GROUP", "MODE", "TAG", "RUN", "LABEL", "GOTO", "OPTIONS",
    "IMPORT",
];
const ARG_ASSIGNMENT_KEYS: &[&str] = &["ATTR", "ENV", "IMPORT", "RUN"];

const TEST_OPERATORS: &[Operator] = &[Operator::Match, Operator::Nomatch];
const ASSIGNMENT_OPERATORS: &[Operator] =
    &[Operator::AssignAdd, Operator::AssignFinal, Operator::Assign];
const ARG_ASSIGNMENT_OPERATORS: &[Operator] = &[Operator::Assign, Operator::AssignAdd];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarShape {
    Test,
    ArgTest,
    Assignment,
    ArgAssignment,
}

impl GrammarShape {
    pub const ALL: [GrammarShape; 4] = [
        GrammarShape::Test,
        GrammarShape::ArgTest,
        GrammarShape::Assignment,
        GrammarShape::ArgAssignment,
    ];

    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            GrammarShape::Test => TEST_KEYS,
            GrammarShape::ArgTest => ARG_TEST_KEYS,
            GrammarShape::Assignment => ASSIGNMENT_KEYS,
            GrammarShape::ArgAssignment => ARG_ASSIGNMENT_KEYS,
        }
    }

    pub fn takes_argument(&self) -> bool {
        matches!(self, GrammarShape::ArgTest | GrammarShape::ArgAssignment)
    }

    pub fn operators(&self) -> &'static [Operator] {
        match self {
            GrammarShape::Test | GrammarShape::ArgTest => TEST_OPERATORS,
            GrammarShape::Assignment => ASSIGNMENT_OPERATORS,
            GrammarShape::ArgAssignment => ARG_ASSIGNMENT_OPERATORS,
        }
    }

    pub fn accepts(&self, clause: &ParsedClause<'_>) -> bool {
        self.takes_argument() == clause.argument.is_some()
            && self.keys().contains(&clause.key)
            && self.operators().contains(&clause.operator)
    }

    /// First shape the parsed clause fits. The shapes never overlap once the
    /// operator and argument presence are known, so the order is immaterial.
    pub fn classify(clause: &ParsedClause<'_>) -> Option<GrammarShape> {
        GrammarShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.accepts(clause))
    }
}

impl Display for GrammarShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarShape::Test => f.write_str("test"),
            GrammarShape::ArgTest => f.write_str("argument test"),
            GrammarShape::Assignment => f.write_str("assignment"),
            GrammarShape::ArgAssignment => f.write_str("argument assignment"),
        }
    }
}
