/*!
Inspect command - display CBOR data in various formats
*/

use super::diag::Item;
use super::io::{Input, Output};
use base64::prelude::*;
use clap::Parser;
use plutus_cbor::cursor::BytesLike;
use tracing::{debug, info};

/// Inspect and display CBOR data
#[derive(Parser, Debug)]
#[command(about = "Inspect and display CBOR information", long_about = None)]
pub struct Command {
    /// Output format
    #[arg(
        long,
        default_value = "diag",
        value_name = "FORMAT",
        help = "Output format: diag/diagnostic (human-readable), hex, base64"
    )]
    format: OutputFormat,

    /// Treat the input as hexadecimal text
    #[arg(short = 'x', long)]
    hex: bool,

    /// CBOR as a hex string on the command line, instead of an input file
    #[arg(short = 'd', long, value_name = "HEX", conflicts_with = "input")]
    data: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<Output>,

    /// Input CBOR file (use '-' for stdin)
    #[arg(default_value = "-")]
    input: Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Diagnostic notation, with constructors and bignums decoded
    #[value(alias = "diagnostic")]
    Diag,
    /// Hexadecimal dump
    Hex,
    /// Standard base64
    Base64,
}

impl Command {
    pub fn exec(self) -> anyhow::Result<()> {
        let cbor_bytes = match &self.data {
            Some(data) => data.to_bytes()?.into_owned(),
            None => self.input.read_cbor(self.hex)?,
        };
        debug!("Inspecting {} bytes of CBOR", cbor_bytes.len());

        let output_text = match self.format {
            OutputFormat::Diag => {
                let items = Item::parse_all(&cbor_bytes)?;
                if items.len() > 1 {
                    info!("Input is a sequence of {} items", items.len());
                }
                items
                    .iter()
                    .map(Item::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            OutputFormat::Hex => hex::encode(&cbor_bytes),
            OutputFormat::Base64 => BASE64_STANDARD.encode(&cbor_bytes),
        };

        self.output
            .unwrap_or(Output::Stdout)
            .write_line(&output_text)?;
        Ok(())
    }
}
