use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Base-85 encode or decode FILE, or standard input, to standard output.
#[derive(Parser, Debug)]
#[command(name = "base85", version)]
struct Args {
    /// Input file; reads standard input when absent or "-"
    #[arg()]
    input: Option<String>,

    /// Decode data
    #[arg(short, long)]
    decode: bool,

    /// Wrap encoded lines after COLS characters (0 disables wrapping)
    #[arg(short, long, value_name = "COLS", default_value_t = 76)]
    wrap: usize,
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let mut reader: Box<dyn Read> = match path {
        Some(path) if path != "-" => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("no such file: {}", path))?,
        )),
        _ => Box::new(BufReader::new(io::stdin())),
    };
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).context("read error")?;
    Ok(buf)
}

fn write_wrapped<W: Write>(writer: &mut W, text: &[u8], wrap: usize) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let wrap = if wrap == 0 { text.len() } else { wrap };
    for line in text.chunks(wrap) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

fn strip_line_breaks(input: Vec<u8>) -> Vec<u8> {
    input.into_iter().filter(|&c| c != b'\n' && c != b'\r').collect()
}

fn run<W: Write>(args: &Args, mut writer: W) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    debug!(bytes = input.len(), decode = args.decode, "read input");

    if args.decode {
        let bytes = base85::decode(strip_line_breaks(input)).context("invalid input")?;
        writer.write_all(&bytes).context("write error")?;
    } else {
        let text = base85::encode(&input).context("invalid input")?;
        write_wrapped(&mut writer, text.as_bytes(), args.wrap).context("write error")?;
    }
    writer.flush().context("write error")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    run(&args, BufWriter::new(io::stdout()))
}
