use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches};
use colored::*;
use log::{debug, info};

use crate::command::Command;
use crate::commands::files::{expand_rule_sources, RuleSource};
use crate::commands::{
    APP_NAME, CHECK, FAILURE_STATUS_CODE, LOG_LEVEL_ENV, RULES_FILES, SUCCESS_STATUS_CODE,
};
use crate::rules::errors::Error;
use crate::rules::{check_rules, Defect, FileReport, Result};
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Check {}

#[allow(clippy::new_without_default)]
impl Check {
    pub fn new() -> Self {
        Check {}
    }
}

impl Command for Check {
    fn name(&self) -> &'static str {
        CHECK
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(APP_NAME)
            .about(
                r#"
  Checks the syntax of udev rules files. Every rule is a comma separated list
  of match clauses (KEY=="value", KEY!="value") and assignment clauses
  (KEY="value", KEY+="value", KEY:="value"), some keys taking an argument as
  in ATTR{name}. Each clause must have one of these shapes; what the keys and
  values mean is not checked."#,
            )
            .after_help(format!(
                "Directories are scanned for .rules files, `-` reads from standard input.\n\
                 Set {LOG_LEVEL_ENV}=debug to see why a clause was rejected."
            ))
            .arg(
                Arg::new(RULES_FILES)
                    .help("Rules files or directories to check, in order")
                    .action(ArgAction::Append)
                    .num_args(0..)
                    .required(false),
            )
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        let args: Vec<String> = app
            .get_many::<String>(RULES_FILES)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let sources = expand_rule_sources(&args)?;
        if sources.is_empty() {
            return Err(Error::IllegalArguments(String::from(
                "Specify files to test as arguments",
            )));
        }

        let mut passed = true;
        for source in sources {
            let name = source.to_string();
            writeln!(writer, "# looking at {name}")?;

            match check_source(&source, &name, reader) {
                Ok(report) => {
                    for defect in &report.defects {
                        report_defect(writer, &report.path, defect)?;
                    }
                    info!(
                        "{}: {} invalid line(s)",
                        report.path,
                        report.defects.len()
                    );
                    passed &= report.passed();
                }
                Err(e) => {
                    writer.write_err(format!("Unable to read {name}: {e}"))?;
                    passed = false;
                }
            }
        }

        Ok(if passed {
            SUCCESS_STATUS_CODE
        } else {
            FAILURE_STATUS_CODE
        })
    }
}

fn check_source(source: &RuleSource, name: &str, reader: &mut Reader) -> Result<FileReport> {
    let content = source.read(reader)?;
    Ok(FileReport {
        path: name.to_string(),
        defects: check_rules(&content, name),
    })
}

fn report_defect(writer: &mut Writer, path: &str, defect: &Defect) -> Result<()> {
    writeln!(
        writer,
        "{} {}:{}: {}",
        "Invalid line".red(),
        path,
        defect.line_number,
        defect.line
    )?;
    writeln!(writer, "  clause: {}", defect.clause)?;
    writeln!(writer)?;
    debug!("{}:{}: {}", path, defect.line_number, defect.kind);
    Ok(())
}
