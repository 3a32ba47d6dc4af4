// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use udev_rules_check::commands::APP_NAME;
use udev_rules_check::utils;
use udev_rules_check::utils::reader::Reader;
use udev_rules_check::utils::writer::Writer;

#[non_exhaustive]
pub struct StatusCode;

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const USAGE_ERROR: i32 = 1;
}

pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push(path);
    resource.display().to_string()
}

#[allow(dead_code)]
pub fn compare_write_buffer_with_string(expected_output: &str, actual_output_writer: Writer) {
    let actual_output = actual_output_writer.stripped().unwrap();
    pretty_assertions::assert_eq!(expected_output, actual_output)
}

pub trait CommandTestRunner {
    fn build_args(&self) -> Vec<String>;

    fn run(&self, writer: &mut Writer, reader: &mut Reader) -> i32 {
        let command_options = self
            .build_args()
            .into_iter()
            .fold(vec![String::from(APP_NAME)], |mut res, arg| {
                res.push(arg);
                res
            });

        let command = utils::get_rules_check_command();
        let app = command.command().get_matches_from(command_options);

        match command.execute(&app, writer, reader) {
            Err(e) => {
                writer
                    .write_err(format!("{e}"))
                    .expect("failed to write to stderr");

                StatusCode::USAGE_ERROR
            }
            Ok(code) => code,
        }
    }
}

#[macro_export]
macro_rules! assert_output_from_str_eq {
    ($expected_output: expr, $actual_output_writer: expr) => {
        $crate::utils::compare_write_buffer_with_string($expected_output, $actual_output_writer)
    };
}
