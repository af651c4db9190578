/*!
pcbor - A CLI for working with Plutus-flavoured CBOR data

# Commands

- `inspect`: Display CBOR data as diagnostic notation, hex or base64
- `constr`: Encode a constructor with integer fields

# Examples

```bash
# Inspect a CBOR file
pcbor inspect datum.cbor

# Inspect hex from the command line
pcbor inspect --data d8799f0102ff

# Inspect hex text piped on stdin
echo d87980 | pcbor inspect --hex -

# Encode constructor 5000 with three fields, printed as hex
pcbor constr 5000 1 2 -3

# Round-trip
pcbor constr 2 7 | pcbor inspect --hex -
```
*/

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

mod constr;
mod diag;
mod inspect;
mod io;

/// A CLI tool for working with Plutus-flavoured CBOR data
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A CLI tool for inspecting and composing Plutus-flavoured CBOR",
    long_about = "pcbor works with CBOR (RFC 8949) as written for Plutus data.\n\n\
                  Features:\n\
                  - Inspect CBOR data as diagnostic notation, with constructors and bignums decoded\n\
                  - Encode constructors using the compact tag scheme\n\
                  - Read binary or hexadecimal input from files, stdin or the command line"
)]
struct Cli {
    /// Logging level: off, error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect and display CBOR data
    Inspect(inspect::Command),

    /// Encode a constructor with integer fields
    Constr(constr::Command),
}

fn init_logger(log_level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(log_level > LevelFilter::INFO)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match cli.command {
        Commands::Inspect(args) => args.exec(),
        Commands::Constr(args) => args.exec(),
    }
}
