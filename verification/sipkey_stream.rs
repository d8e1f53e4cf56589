//! # `PractRand` Stream Generator
//!
//! Generates a continuous binary stream on stdout by digesting an
//! incrementing 64-bit counter with Sipkey, for external statistical test
//! batteries: `sipkey_stream --mode 2x64 | RNG_test stdin64`.
//!
//! Diagnostics go to stderr (`RUST_LOG=info`).

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};
use sipkey::SipKey;
use std::io::{self, Write};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Mode {
    /// Byte path over `--len` bytes filled with the counter
    Bytes,
    /// Byte path cycling through 0..=16 bytes
    Cyclic,
    /// `(counter)`
    #[value(name = "1x64")]
    OneU64,
    /// `(counter, !counter)`
    #[value(name = "2x64")]
    TwoU64,
    /// `(counter, 0, 0, counter)`
    #[value(name = "4x64")]
    FourU64,
    /// Low 32 bits of the counter, no compression round
    #[value(name = "1x32")]
    OneU32,
    /// `(lo, hi, lo ^ hi)` halves of the counter
    #[value(name = "3x32")]
    ThreeU32,
}

#[derive(Parser, Debug)]
#[command(name = "sipkey_stream")]
#[command(about = "Stream Sipkey tags of a counter for statistical testing", long_about = None)]
#[command(version)]
struct Cli {
    /// Input shape fed to the digest
    #[arg(short, long, value_enum, default_value_t = Mode::Bytes)]
    mode: Mode,

    /// Input length for `bytes` mode
    #[arg(short, long, default_value_t = 8)]
    len: usize,

    /// Key as 32 hex characters
    #[arg(short, long, default_value = "00000000000000000000000000000000")]
    key: String,

    /// Stop after this many tags (runs until the reader closes otherwise)
    #[arg(short, long)]
    count: Option<u64>,
}

// =============================================================================
// STREAM
// =============================================================================

fn tag_for(key: &SipKey, mode: Mode, len: usize, counter: u64) -> Result<sipkey::Tag> {
    let tag = match mode {
        Mode::Bytes => key.digest(&fill_counter(counter, len)),
        Mode::Cyclic => key.digest(&fill_counter(counter, (counter % 17) as usize)),
        Mode::OneU64 => key.digest_1x64(counter),
        Mode::TwoU64 => key.digest_2x64(counter, !counter),
        Mode::FourU64 => key.digest_4x64(counter, 0, 0, counter),
        Mode::OneU32 => key.digest_1x32(counter as u32),
        Mode::ThreeU32 => {
            let (lo, hi) = (counter as u32, (counter >> 32) as u32);
            key.digest_3x32(lo, hi, u64::from(lo ^ hi))?
        }
    };
    Ok(tag)
}

/// Fill `len` bytes with the counter's little-endian bytes, repeated.
fn fill_counter(counter: u64, len: usize) -> Vec<u8> {
    counter.to_le_bytes().iter().copied().cycle().take(len).collect()
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = hex::decode(&cli.key).context("Key is not valid hex")?;
    let key = SipKey::from_slice(&raw).context("Key must be 16 bytes (32 hex characters)")?;
    if cli.mode == Mode::Bytes && cli.len == 0 {
        bail!("--len must be at least 1 in bytes mode");
    }

    info!(
        "streaming mode={:?} len={} count={:?}",
        cli.mode, cli.len, cli.count
    );

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut counter: u64 = 0;

    loop {
        if cli.count.is_some_and(|limit| counter >= limit) {
            break;
        }

        let tag = tag_for(&key, cli.mode, cli.len, counter)?;
        if let Err(e) = handle.write_all(&tag) {
            // Reader closing the pipe is the normal way to stop
            if e.kind() != io::ErrorKind::BrokenPipe {
                error!("write failed after {counter} tags: {e}");
                return Err(e.into());
            }
            info!("reader closed after {counter} tags");
            return Ok(());
        }

        counter = counter.wrapping_add(1);
    }

    handle.flush().context("Failed to flush output")?;
    info!("wrote {counter} tags");
    Ok(())
}
