//! Output of the sample programs.

use std::io::{self, Write};

use crate::dirs::DirectoryConfig;
use crate::Error;

/// A collaborator exposing one status-returning method.
///
/// `prog` exits with whatever [`method`](Self::method) returns.
pub trait StatusMethod {
    fn method(&self) -> i32;
}

/// The collaborator `prog` runs by default; always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Noop;

impl StatusMethod for Noop {
    fn method(&self) -> i32 {
        0
    }
}

/// Writes the `bin` and `etc` lines.
pub fn write_dirs(dirs: &DirectoryConfig, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "bin is: {}", dirs.bin_dir().display())?;
    writeln!(out, "etc is: {}", dirs.get_dir("etc").display())
}

/// Writes the plugin count followed by one plugin per line.
pub fn write_plugins(dirs: &DirectoryConfig, out: &mut impl Write) -> Result<usize, Error> {
    let mut plugins = Vec::new();
    let count = dirs.find_plugins(&mut plugins)?;

    writeln!(out, "found {count} plugins")?;
    for plugin in &plugins {
        writeln!(out, "{plugin}")?;
    }
    Ok(count)
}

/// Like [`write_plugins`], but reports a failed scan to `err` instead of failing.
///
/// Only discovery errors are absorbed; failing to write `out` is still an error.
pub fn write_plugins_or_report(
    dirs: &DirectoryConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), Error> {
    match write_plugins(dirs, out) {
        Ok(_) => Ok(()),
        Err(Error::Directory(e)) => {
            tracing::error!("plugin discovery failed: {e}");
            out.flush()?;
            writeln!(err, "error: {e}")?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Prints the directories, then hands control to `collaborator` and returns its status.
pub fn run_with_collaborator(
    dirs: &DirectoryConfig,
    collaborator: &dyn StatusMethod,
    out: &mut impl Write,
) -> io::Result<i32> {
    write_dirs(dirs, out)?;
    writeln!(out, "calling method")?;
    out.flush()?;
    Ok(collaborator.method())
}
