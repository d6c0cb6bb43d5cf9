//! Files: batch lists, configuration readers, and merged outputs.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use xz2::read::XzDecoder;

use crate::{
    config::defaults,
    db::symbol::SymbolDB,
    misc::log::targets::{self},
    structures::{Symbol, Value},
    types::err::{self, IoError},
};

/// A buffered reader over the configuration file at `path`.
///
/// Files with an `xz` extension are decompressed on the fly.
pub fn config_reader(path: &Path) -> Result<Box<dyn BufRead>, err::ErrorKind> {
    let file = File::open(path)
        .map_err(|_| err::ErrorKind::from(IoError::Configuration(path.to_path_buf())))?;

    match path.extension() {
        Some(extension) if extension == "xz" => {
            Ok(Box::new(BufReader::new(XzDecoder::new(file))))
        }
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

/// The configuration file paths listed in the batch file at `path`.
///
/// One path per line, blank lines skipped.
pub fn paths_from_batch(path: &Path) -> Result<Vec<PathBuf>, err::ErrorKind> {
    let batch_error = || err::ErrorKind::from(IoError::Batch(path.to_path_buf()));

    let file = File::open(path).map_err(|_| batch_error())?;

    let mut paths = Vec::default();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|_| batch_error())?;
        if line.trim().is_empty() {
            continue;
        }
        paths.push(PathBuf::from(line));
    }

    log::debug!(target: targets::PARSE, "Batch of {} configuration files read", paths.len());

    Ok(paths)
}

/// Writes one merged configuration to `directory`, named by clique index and size.
pub fn write_merged_config(
    directory: &Path,
    index: usize,
    size: usize,
    merged: &BTreeMap<Symbol, Value>,
    symbol_db: &SymbolDB,
) -> Result<PathBuf, err::ErrorKind> {
    let path = directory.join(format!("{}.{index}.{size}", defaults::OUTPUT_STEM));
    let output_error = |path: &PathBuf| err::ErrorKind::from(IoError::Output(path.clone()));

    let file = File::create(&path).map_err(|_| output_error(&path))?;
    let mut writer = BufWriter::new(file);

    for (&symbol, value) in merged {
        let name = symbol_db.name_of(symbol)?;
        writeln!(writer, "{name}={value}").map_err(|_| output_error(&path))?;
    }

    writer.flush().map_err(|_| output_error(&path))?;

    Ok(path)
}
