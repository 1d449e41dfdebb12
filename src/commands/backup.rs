//! `modelpack backup` command — export a model to a tar archive.
//!
//! Collects the manifest and blobs for a cached model and writes them to a
//! tar file or standard output. For example:
//!
//!     modelpack backup -f codestral-latest.tar codestral:latest

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::warn;

use crate::config;
use crate::error::PackError;
use crate::store::{write_archive, ModelManifest, ModelReference};

/// Sentinel destination value meaning "write to standard output".
const STDOUT_SENTINEL: &str = "-";

#[derive(Args)]
pub struct BackupArgs {
    /// Model reference to export (name:version)
    pub model: String,

    /// Write the archive to the specified file, or "-" for standard output
    #[arg(short, long, default_value = STDOUT_SENTINEL)]
    pub file: String,
}

pub fn execute(args: BackupArgs) -> Result<(), Box<dyn std::error::Error>> {
    run(&config::store_root(), args)
}

fn run(store_root: &Path, args: BackupArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Reference parsing happens before any file I/O: a bad reference must
    // not even create the output file.
    let model = ModelReference::parse(&args.model)?;

    let mut sink = Sink::open(&args.file)?;
    let manifest = ModelManifest::resolve(store_root, &model)?;
    write_archive(store_root, &manifest, &model, &mut sink)?;
    sink.close();

    Ok(())
}

/// Write-only output sink selected by the destination value.
#[derive(Debug)]
enum Sink {
    Stdout(io::Stdout),
    File { path: PathBuf, file: File },
}

impl Sink {
    /// Open the destination: standard output for the `-` sentinel,
    /// otherwise a newly created file.
    fn open(dest: &str) -> Result<Self, PackError> {
        if dest == STDOUT_SENTINEL {
            return Ok(Self::Stdout(io::stdout()));
        }

        let path = PathBuf::from(dest);
        let file = File::create(&path).map_err(|source| PackError::Sink {
            path: dest.to_string(),
            source,
        })?;
        Ok(Self::File { path, file })
    }

    /// Flush and close the sink.
    ///
    /// By the time this runs the payload has been fully written, so a
    /// failure here is reported as a warning rather than an error and does
    /// not change the operation's result.
    fn close(self) {
        match self {
            Self::Stdout(mut out) => {
                if let Err(e) = out.flush() {
                    warn!("error flushing standard output: {e}");
                }
            }
            Self::File { path, file } => {
                if let Err(e) = file.sync_all() {
                    warn!(path = %path.display(), "error closing output file: {e}");
                }
            }
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File { file, .. } => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File { file, .. } => file.flush(),
        }
    }
}
