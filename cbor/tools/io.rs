/*!
Reading CBOR input and writing results, with `-` standing for stdin/stdout
*/

use plutus_cbor::cursor::BytesLike;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Input source - either stdin or a file
#[derive(Debug, Clone)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Read all bytes from the input source
    pub fn read_all(&self) -> io::Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut buffer = Vec::new();
                io::stdin().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
            Input::File(path) => fs::read(path),
        }
    }

    /// Read the CBOR bytes, treating the content as hexadecimal text if
    /// `hex` is set.
    pub fn read_cbor(&self, hex: bool) -> anyhow::Result<Vec<u8>> {
        let raw = self.read_all()?;
        debug!("Read {} bytes from {:?}", raw.len(), self);
        if !hex {
            return Ok(raw);
        }
        let text = String::from_utf8(raw)?;
        Ok(text.as_str().to_bytes()?.into_owned())
    }
}

impl FromStr for Input {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Input::Stdin)
        } else {
            Ok(Input::File(PathBuf::from(s)))
        }
    }
}

/// Output destination - either stdout or a file
#[derive(Debug, Clone)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn write_all(&self, data: &[u8]) -> io::Result<()> {
        match self {
            Output::Stdout => io::stdout().write_all(data),
            Output::File(path) => fs::write(path, data),
        }
    }

    /// Write text, with a trailing newline on stdout
    pub fn write_line(&self, text: &str) -> io::Result<()> {
        match self {
            Output::Stdout => writeln!(io::stdout(), "{text}"),
            Output::File(path) => fs::write(path, text),
        }
    }
}

impl FromStr for Output {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "-" {
            Ok(Output::Stdout)
        } else {
            Ok(Output::File(PathBuf::from(s)))
        }
    }
}
