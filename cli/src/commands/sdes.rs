//! S-DES Commands
//!
//! Block encryption/decryption with user-defined tables. Blocks run in
//! parallel (Rayon, inside the library) and print in input order.

use super::output::{print_json, Format};
use anyhow::{Context, Result};
use cipherstep::{sdes, BitString, Direction, PermutationTable, SdesTables, TableSpec};
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

// =============================================================================
// TABLE OPTIONS
// =============================================================================

/// Table set: a JSON file and/or single-table overrides. Anything left
/// unspecified uses the textbook table.
#[derive(Args, Default)]
pub struct TableArgs {
    /// JSON file with any of p10, p8, ip, ip_inv, ep, p4
    #[arg(long = "tables", value_name = "FILE")]
    table_file: Option<PathBuf>,

    /// P10, e.g. "3 5 2 7 4 10 1 9 8 6"
    #[arg(long)]
    p10: Option<PermutationTable>,

    /// P8, e.g. "6 3 7 4 8 5 10 9"
    #[arg(long)]
    p8: Option<PermutationTable>,

    /// IP, e.g. "2 6 3 1 4 8 5 7"
    #[arg(long)]
    ip: Option<PermutationTable>,

    /// IP-1, e.g. "4 1 3 5 7 2 8 6"
    #[arg(long)]
    ip_inv: Option<PermutationTable>,

    /// EP, e.g. "4 1 2 3 2 3 4 1"
    #[arg(long)]
    ep: Option<PermutationTable>,

    /// P4, e.g. "2 4 3 1"
    #[arg(long)]
    p4: Option<PermutationTable>,
}

impl TableArgs {
    /// File first, then flags on top, then validation.
    fn resolve(&self) -> Result<SdesTables> {
        let from_file = match &self.table_file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open: {}", path.display()))?;
                serde_json::from_reader::<_, TableSpec>(BufReader::new(file))
                    .with_context(|| format!("Failed to parse tables: {}", path.display()))?
            }
            None => TableSpec::default(),
        };

        let flags = TableSpec {
            p10: self.p10.clone(),
            p8: self.p8.clone(),
            ip: self.ip.clone(),
            ip_inv: self.ip_inv.clone(),
            ep: self.ep.clone(),
            p4: self.p4.clone(),
        };

        from_file
            .merge(flags)
            .resolve()
            .context("Invalid S-DES table set")
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run every block through S-DES and print each trace in order.
pub fn sdes_run(
    blocks: &[BitString],
    key: &BitString,
    tables: &TableArgs,
    direction: Direction,
    format: Format,
) -> Result<()> {
    let tables = tables.resolve()?;
    if direction == Direction::Decrypt && !tables.inverts_ip() {
        eprintln!("Warning: IP-1 does not invert IP; decryption will not recover the plaintext");
    }

    let outputs = sdes::process_blocks(blocks, key, &tables, direction)
        .with_context(|| format!("S-DES {direction} failed"))?;

    match format {
        Format::Text => {
            for (i, (block, out)) in blocks.iter().zip(&outputs).enumerate() {
                if i > 0 {
                    println!();
                }
                if blocks.len() > 1 {
                    println!("##### BLOCK {} ({block}) #####", i + 1);
                }
                print!("{}", out.trace);
            }
            if outputs.len() > 1 {
                let joined: Vec<String> = outputs.iter().map(|o| o.result.to_string()).collect();
                println!();
                println!("Result: {}", joined.join(" "));
            }
        }
        Format::Json => print_json(&outputs)?,
    }
    Ok(())
}

/// Print the table set that `sdes encrypt`/`decrypt` would use.
pub fn print_tables(tables: &TableArgs) -> Result<()> {
    print_json(&tables.resolve()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_standard_tables() {
        let tables = TableArgs::default().resolve().unwrap();
        assert_eq!(tables, SdesTables::standard());
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "p4": [4, 3, 2, 1], "ip-1": [4, 1, 3, 5, 7, 2, 8, 6] }}"#).unwrap();

        let args = TableArgs {
            table_file: Some(file.path().to_path_buf()),
            p4: Some("1 2 3 4".parse().unwrap()),
            ..TableArgs::default()
        };
        let tables = args.resolve().unwrap();
        assert_eq!(tables.p4().indices(), &[1, 2, 3, 4]);
        assert_eq!(tables.ip_inv(), SdesTables::standard().ip_inv());
    }

    #[test]
    fn invalid_table_is_reported() {
        let args = TableArgs {
            ep: Some("4 1 2 3 2 3 4 9".parse().unwrap()),
            ..TableArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("table index 9 out of range"));
    }

    #[test]
    fn unknown_table_name_in_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "p9": [1] }}"#).unwrap();
        let args = TableArgs {
            table_file: Some(file.path().to_path_buf()),
            ..TableArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
