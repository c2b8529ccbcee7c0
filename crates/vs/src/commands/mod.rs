use std::io::{self, Write};

use anstream::println;
use owo_colors::OwoColorize;
use tracing::warn;
use vs_version::{VersionString, VersionStrings};

use crate::config::{Config, OutputFormat};

pub mod decode;
pub mod parse;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum OutputError {
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// What a command produced: one version, or a list when `--list` was given.
#[derive(Debug)]
pub enum Versions {
    One(VersionString),
    Many(VersionStrings),
}

impl Versions {
    fn as_slice(&self) -> &[VersionString] {
        match self {
            Versions::One(version) => std::slice::from_ref(version),
            Versions::Many(versions) => &versions[..],
        }
    }

    pub fn print(&self, config: &Config) -> Result<(), OutputError> {
        match config.format {
            OutputFormat::Json => {
                let mut stdout = io::stdout().lock();
                match self {
                    Versions::One(version) => serde_json::to_writer_pretty(&mut stdout, version)?,
                    Versions::Many(versions) => serde_json::to_writer_pretty(&mut stdout, versions)?,
                }
                writeln!(stdout)?;
            }
            OutputFormat::Text => {
                let versions = self.as_slice();
                if versions.is_empty() {
                    warn!("No versions found.");
                }
                for version in versions {
                    print_version(version);
                }
            }
        }

        Ok(())
    }
}

fn print_version(version: &VersionString) {
    if version.is_null() {
        println!("{}", "(null)".dimmed());
        return;
    }

    let fields = version
        .fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{} {}", version.version.bold(), format!("[{fields}]").dimmed());
}
