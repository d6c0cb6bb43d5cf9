/*!
Reading configuration files into a context.

A configuration file is UTF-8 text, one `NAME=v` assignment per line with
`v ∈ {n, m, y}`. Lines beginning with `#` are comments, blank lines are
skipped, and the name runs to the first `=` on the line.
*/

use std::{io::BufRead, path::Path};

use crate::{
    context::Context,
    io::files,
    misc::log::targets::{self},
    structures::{Node, Value},
    types::err::{self, ParseError},
};

/// Details of a configuration read into a context.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigInfo {
    /// The index of the configuration.
    pub configuration: Node,

    /// A count of assignments recorded from the file.
    pub assignments: usize,
}

impl Context {
    /// Reads a configuration file into the context, as one fresh configuration.
    ///
    /// ```rust
    /// # use troll::context::Context;
    /// # use troll::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut file = vec![];
    /// let _ = file.write(b"# a comment
    /// CONFIG_SWAP=y
    ///
    /// CONFIG_DEBUG_INFO=n
    /// ");
    ///
    /// let info = the_context.read_config(file.as_slice()).unwrap();
    /// assert_eq!(info.assignments, 2);
    /// ```
    pub fn read_config(&mut self, mut reader: impl BufRead) -> Result<ConfigInfo, err::ErrorKind> {
        let configuration = self.config_db.fresh_config();
        let mut info = ConfigInfo {
            configuration,
            ..ConfigInfo::default()
        };

        let mut buffer = String::default();
        let mut lines = 0;

        loop {
            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Read(lines))),
            }

            let line = buffer.trim_end_matches(['\n', '\r']);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, token)) = line.split_once('=') else {
                return Err(err::ErrorKind::from(ParseError::MissingDelimiter(lines)));
            };

            let Some(value) = Value::from_name(token.trim_end()) else {
                return Err(err::ErrorKind::from(ParseError::Value(lines)));
            };

            let symbol = self.symbol_db.symbol_of(name);
            self.config_db.add_symbol(configuration, symbol, value);
            info.assignments += 1;
        }

        log::debug!(target: targets::PARSE,
            "Configuration {configuration} read with {} assignments", info.assignments);

        Ok(info)
    }

    /// Reads the configuration file at `path`, decompressing `.xz` files on the fly.
    pub fn read_config_path(&mut self, path: &Path) -> Result<ConfigInfo, err::ErrorKind> {
        let reader = files::config_reader(path)?;
        self.read_config(reader)
    }
}
