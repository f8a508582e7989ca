// reelcheck - Media asset validation and cataloging
// Copyright (C) 2025 reelcheck contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.


//! Common test helpers for reelcheck CLI tests.
//!
//! This module re-exports utilities from reelcheck-test-utils.

#![allow(unused_imports)]

pub use reelcheck_test_utils::{
    album, assert_no_report, assert_report_errors, reelcheck, report_json, ProbeJson,
    ReelcheckCommand, WorkingFolder,
};

#[cfg(unix)]
pub use reelcheck_test_utils::FakeTools;
