//! Example: pack a raw PCM file, unpack it again and verify the round trip.
//!
//! Run with: cargo run --example roundtrip input.pcm output.wv16

use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input-pcm> <output-wv16>", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    println!("Reading {}...", input_path);
    let pcm = fs::read(input_path)?;
    println!("  {} octets, {} stereo frames", pcm.len(), rewav16::pcm::frame_count(&pcm));

    println!("\nPacking...");
    let packed = rewav16::pack_bytes(&pcm, 0)?;

    let ratio = pcm.len() as f32 / packed.len() as f32;
    println!("  Original: {} octets", pcm.len());
    println!("  Packed: {} octets", packed.len());
    println!("  Ratio: {:.2}x", ratio);

    fs::write(output_path, &packed)?;
    println!("\nWrote packed file to {}", output_path);

    println!("\nUnpacking for verification...");
    let restored = rewav16::unpack_bytes(&packed)?;
    assert_eq!(restored, pcm, "round trip mismatch");
    println!("Round trip OK");

    Ok(())
}
