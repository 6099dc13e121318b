use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rewav16")]
#[command(version)]
#[command(about = "Lossless compressor for raw 16-bit stereo PCM", long_about = None)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a raw PCM file (interleaved stereo, 16-bit little-endian)
    Pack {
        /// Input raw PCM file
        input: PathBuf,
        /// Output packed file
        output: PathBuf,
        /// Reserved tuning variable; recorded but never changes the stream
        #[arg(long, default_value_t = 0)]
        opt_var: u32,
    },
    /// Decompress a packed file back to raw PCM
    Unpack {
        /// Input packed file
        input: PathBuf,
        /// Output raw PCM file
        output: PathBuf,
    },
    /// Show information about a packed file
    Info {
        /// Input packed file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.command {
        Commands::Pack {
            input,
            output,
            opt_var,
        } => pack(&input, &output, opt_var),
        Commands::Unpack { input, output } => unpack(&input, &output),
        Commands::Info { input } => info(&input),
    }
}

fn pack(input: &PathBuf, output: &PathBuf, opt_var: u32) -> Result<()> {
    println!("Reading {}...", input.display());
    let data = fs::read(input).context("Failed to read input file")?;

    let spare = data.len() % 4;
    if spare != 0 {
        println!("  note: {spare} trailing octet(s) beyond the last stereo frame");
    }
    println!("Compressing {} octets...", data.len());

    let packed = rewav16::pack_bytes(&data, opt_var)?;
    fs::write(output, &packed).context("Failed to write output file")?;

    let ratio = if packed.is_empty() {
        0.0
    } else {
        data.len() as f64 / packed.len() as f64
    };
    println!("Done!");
    println!("  Output: {}", output.display());
    println!("  Size: {} octets ({:.2}x compression)", packed.len(), ratio);

    Ok(())
}

fn unpack(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Reading {}...", input.display());
    let packed = fs::read(input).context("Failed to read packed file")?;

    let header = rewav16::parse_header(&packed)?;
    println!("Decompressing {} octets...", header.payload_len);

    let data = rewav16::unpack_bytes(&packed)?;
    fs::write(output, &data).context("Failed to write PCM file")?;

    println!("Done!");
    println!("  Output: {}", output.display());

    Ok(())
}

fn info(input: &PathBuf) -> Result<()> {
    let packed = fs::read(input).context("Failed to read packed file")?;
    let header = rewav16::parse_header(&packed)?;

    println!("wav16 Packed File");
    println!("───────────────────────────────");
    println!("  Payload:     {} octets", header.payload_len);
    println!(
        "  Frames:      {}",
        header.payload_len / 4
    );
    println!("  File size:   {} octets", header.packed_len);
    println!("  Compression: {:.2}x", header.ratio());

    Ok(())
}
