// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod command;
pub mod commands;
pub mod rules;
pub mod utils;

pub use crate::rules::{check_rules, classify_clause, Defect, DefectKind, GrammarShape};
