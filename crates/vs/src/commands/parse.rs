use tracing::debug;
use vs_version::{VersionString, VersionStrings};

use super::{OutputError, Versions};
use crate::config::Config;

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Version to parse, such as `1.2.3.4` (or `1.2;3.4` with --list)
    input: String,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    VersionError(#[from] vs_version::Error),
    #[error(transparent)]
    OutputError(#[from] OutputError),
}

type Result<T> = miette::Result<T, Error>;

/// Parses the text form of a version or version list.
pub fn parse(config: &Config, args: &ParseArgs) -> Result<()> {
    debug!(input = %args.input, list = config.list, "parsing");

    let versions = if config.list {
        Versions::Many(VersionStrings::new(&args.input)?)
    } else {
        Versions::One(VersionString::new(&args.input)?)
    };

    versions.print(config)?;
    Ok(())
}
