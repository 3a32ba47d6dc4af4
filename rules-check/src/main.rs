use std::io::Write;
use std::process::exit;
use std::str::FromStr;

use log::{debug, Level};

use udev_rules_check::commands::{APP_VERSION, ERROR_STATUS_CODE, LOG_LEVEL_ENV};
use udev_rules_check::rules::errors::Error;
use udev_rules_check::utils::get_rules_check_command;
use udev_rules_check::utils::reader::{ReadBuffer, Reader};
use udev_rules_check::utils::writer::{WriteBuffer::Stderr, WriteBuffer::Stdout, Writer};

fn main() -> Result<(), Error> {
    let log_level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|level| Level::from_str(&level).ok())
        .unwrap_or(Level::Error);
    simple_logger::init_with_level(log_level)?;

    let command = get_rules_check_command();
    let app = command.command().version(APP_VERSION).get_matches();
    debug!("Running {} with {:#?}", command.name(), app);

    let mut writer = Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()));
    let status = match command.execute(
        &app,
        &mut writer,
        &mut Reader::new(ReadBuffer::Stdin(std::io::stdin())),
    ) {
        Err(e) => {
            writer.write_err(format!("{e}"))?;
            ERROR_STATUS_CODE
        }
        Ok(code) => code,
    };

    writer.flush()?;
    exit(status)
}
