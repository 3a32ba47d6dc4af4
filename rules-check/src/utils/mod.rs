use crate::{command::Command, commands};

pub mod reader;
pub mod writer;

pub fn get_rules_check_command() -> Box<dyn Command> {
    Box::new(commands::check::Check::new())
}
