//! cipherstep CLI
//!
//! Step-by-step RSA and S-DES tracer for the command line.

mod commands;

use anyhow::Result;
use cipherstep::{BitString, Direction};
use clap::{Args, Parser, Subcommand};
use commands::{print_tables, rsa_decrypt, rsa_encrypt, rsa_keys, sdes_run, Format, TableArgs};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "cipherstep")]
#[command(about = "Trace textbook RSA and S-DES step by step", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// Textbook RSA over two small primes
    #[command(subcommand)]
    Rsa(RsaCommand),

    /// Simplified DES over 8-bit blocks
    #[command(subcommand)]
    Sdes(SdesCommand),
}

#[derive(Subcommand)]
enum RsaCommand {
    /// Derive (e, d, n) and show the search
    Keys(Primes),

    /// Encrypt a message character by character
    Encrypt {
        #[command(flatten)]
        primes: Primes,

        /// Message to encrypt
        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// Decrypt whitespace separated ciphertext integers
    Decrypt {
        #[command(flatten)]
        primes: Primes,

        /// Ciphertext, e.g. "32 12 5"
        #[arg(value_name = "CIPHERTEXT")]
        ciphertext: String,
    },
}

#[derive(Args)]
struct Primes {
    /// First prime
    #[arg(short)]
    p: u64,

    /// Second prime
    #[arg(short)]
    q: u64,
}

#[derive(Subcommand)]
enum SdesCommand {
    /// Encrypt one or more 8-bit blocks
    Encrypt(SdesRun),

    /// Decrypt one or more 8-bit blocks
    Decrypt(SdesRun),

    /// Print the resolved table set as JSON
    Tables(TableArgs),
}

#[derive(Args)]
struct SdesRun {
    /// 10-bit key, e.g. 1010000010
    #[arg(short, long)]
    key: BitString,

    #[command(flatten)]
    tables: TableArgs,

    /// 8-bit blocks, e.g. 10111101
    #[arg(value_name = "BLOCK", required = true)]
    blocks: Vec<BitString>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rsa(RsaCommand::Keys(Primes { p, q })) => rsa_keys(p, q, cli.format)?,
        Commands::Rsa(RsaCommand::Encrypt { primes, message }) => {
            rsa_encrypt(&message, primes.p, primes.q, cli.format)?;
        }
        Commands::Rsa(RsaCommand::Decrypt { primes, ciphertext }) => {
            rsa_decrypt(&ciphertext, primes.p, primes.q, cli.format)?;
        }
        Commands::Sdes(SdesCommand::Encrypt(run)) => {
            sdes_run(&run.blocks, &run.key, &run.tables, Direction::Encrypt, cli.format)?;
        }
        Commands::Sdes(SdesCommand::Decrypt(run)) => {
            sdes_run(&run.blocks, &run.key, &run.tables, Direction::Decrypt, cli.format)?;
        }
        Commands::Sdes(SdesCommand::Tables(tables)) => print_tables(&tables)?,
    }

    Ok(())
}
