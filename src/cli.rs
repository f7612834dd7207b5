//! Command line handling: argument model, output selection and exit codes.

use crate::models::calculate;
use crate::output::{subnet_json, subnet_report};
use clap::error::ErrorKind;
use clap::Parser;
use std::error::Error;
use std::ffi::OsString;
use std::io::Write;

/// Printed on stdout when the arguments are wrong.
pub const USAGE: &str = "Usage: bitsplitter <IP/CIDR>\nExample: bitsplitter 192.168.0.0/24";

/// Compute IPv4 subnet details from CIDR notation
#[derive(Parser, Debug)]
#[command(name = "bitsplitter", version, about, long_about = None)]
pub struct Args {
    /// IPv4 address with prefix length, e.g. 192.168.0.0/24
    #[arg(value_name = "IP/CIDR")]
    pub cidr: String,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Disable colored headings
    #[arg(long)]
    pub no_color: bool,
}

/// Parse `argv`, run one calculation and write the result.
///
/// Returns the process exit code: 0 on success, 1 for bad arguments
/// (usage on `out`) or a failed calculation (`Error: ...` on `err`).
pub fn run<I, T>(argv: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    exit_code(write!(out, "{e}"), 0)
                }
                _ => {
                    log::debug!("argument error: {e}");
                    exit_code(writeln!(out, "{USAGE}"), 1)
                }
            };
        }
    };
    log::debug!("args={:?}", args);

    match render(&args) {
        Ok(text) => exit_code(out.write_all(text.as_bytes()), 0),
        Err(e) => {
            log::warn!("calculation failed for {:?}: {e}", args.cidr);
            exit_code(writeln!(err, "Error: {e}"), 1)
        }
    }
}

fn render(args: &Args) -> Result<String, Box<dyn Error>> {
    let info = calculate(&args.cidr)?;
    if args.json {
        Ok(format!("{}\n", subnet_json(&info)?))
    } else {
        Ok(subnet_report(&info, !args.no_color)?)
    }
}

fn exit_code(written: std::io::Result<()>, code: i32) -> i32 {
    match written {
        Ok(()) => code,
        Err(e) => {
            log::error!("failed to write output: {e}");
            1
        }
    }
}
