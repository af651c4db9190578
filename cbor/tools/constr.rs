/*!
Constr command - encode a constructor with integer fields
*/

use super::io::Output;
use clap::Parser;
use num_bigint::BigInt;
use plutus_cbor::encode;
use tracing::debug;

/// Encode a constructor
#[derive(Parser, Debug)]
#[command(
    about = "Encode a constructor with integer fields",
    long_about = "Encode a constructor using the compact tag scheme.\n\n\
                  Indices 0-6 use tags 121-127, 7-127 use tags 1280-1400, and\n\
                  larger indices are written as tag 102 wrapping [index, fields]."
)]
pub struct Command {
    /// Write raw CBOR instead of hex
    #[arg(short = 'b', long)]
    binary: bool,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<Output>,

    /// Constructor index
    tag: u64,

    /// Integer fields, of any size
    #[arg(allow_negative_numbers = true)]
    fields: Vec<BigInt>,
}

impl Command {
    pub fn exec(self) -> anyhow::Result<()> {
        let data = encode::emit_constr(self.tag, &self.fields)?;
        debug!(
            "Encoded constructor {} with {} fields into {} bytes",
            self.tag,
            self.fields.len(),
            data.len()
        );

        let output = self.output.unwrap_or(Output::Stdout);
        if self.binary {
            output.write_all(&data)?;
        } else {
            output.write_line(&hex::encode(&data))?;
        }
        Ok(())
    }
}
