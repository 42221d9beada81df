// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod eligibility;
pub mod errors;
pub mod models;
pub mod totals;
pub mod utils;
pub mod validation;
