// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{config_path, resolve, Overrides};
use crate::utils::pretty_table;
use anyhow::Result;

/// `path` never reads the config, so it still works when the file is broken.
pub fn handle(overrides: &Overrides, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let cfg = resolve(overrides)?;
            let rows = vec![
                vec!["api_url".into(), cfg.api_url.clone()],
                vec!["token".into(), cfg.masked_token()],
                vec!["timeout_secs".into(), cfg.timeout_secs.to_string()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("path", _)) => println!("{}", config_path()?.display()),
        _ => {}
    }
    Ok(())
}
