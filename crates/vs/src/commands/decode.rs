use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use tracing::debug;
use vs_version::{VersionString, VersionStrings};

use super::{OutputError, Versions};
use crate::config::Config;

#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// JSON file to read; stdin when omitted or `-`
    file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    VersionError(#[from] vs_version::Error),
    #[error(transparent)]
    OutputError(#[from] OutputError),
}

type Result<T> = miette::Result<T, Error>;

/// Decodes a stored payload, legacy string or structured, and prints it.
///
/// With `--format json` this rewrites legacy payloads in the structured form.
pub fn decode(config: &Config, args: &DecodeArgs) -> Result<()> {
    let json = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => fs_err::read(path)?,
        _ => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    debug!(bytes = json.len(), list = config.list, "decoding payload");

    let versions = if config.list {
        Versions::Many(VersionStrings::from_json(&json)?)
    } else {
        Versions::One(VersionString::from_json(&json)?)
    };

    versions.print(config)?;
    Ok(())
}
