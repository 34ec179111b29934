// crates/hdlbits-cli/src/io/values.rs

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use clap::Args;

/// Where a batch of integer values comes from and where results go.
#[derive(Args, Debug)]
pub struct ValueIo {
    /// Values (decimal or 0x hex, optionally negative)
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Read values from a file, one per line ('#' starts a comment)
    #[arg(long = "in")]
    pub r#in: Option<String>,

    /// Write results to a file instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

/// Parse a decimal or `0x` hex integer, with optional leading `-`.
///
/// Values above `i64::MAX` (up to `u64::MAX`) are taken as their 64-bit
/// pattern, so `0xFFFFFFFFFFFFFFFF` reads as -1.
pub fn parse_i64_any(s: &str) -> anyhow::Result<i64> {
    let t = s.trim();
    let (neg, body) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t),
    };
    let body = body.replace('_', "");
    let parsed = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        body.parse::<u64>()
    };
    let mag = parsed.with_context(|| format!("bad integer: {s:?}"))?;

    if neg {
        if mag > 1u64 << 63 {
            anyhow::bail!("integer out of i64 range: {s}");
        }
        Ok((mag as i64).wrapping_neg())
    } else {
        Ok(mag as i64)
    }
}

/// Parse an unsigned decimal or `0x` hex integer of up to 128 bits.
pub fn parse_u128_any(s: &str) -> anyhow::Result<u128> {
    let t = s.trim().replace('_', "");
    let v = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u128::from_str_radix(hex, 16)
    } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        u128::from_str_radix(bin, 2)
    } else {
        t.parse::<u128>()
    };
    v.with_context(|| format!("bad unsigned integer: {s:?}"))
}

pub fn read_values(io: &ValueIo) -> anyhow::Result<Vec<i64>> {
    let mut out = Vec::new();

    if let Some(path) = &io.r#in {
        let text = std::fs::read_to_string(path).with_context(|| format!("read values: {path}"))?;
        for (lineno, line) in text.lines().enumerate() {
            let body = line.split('#').next().unwrap_or("").trim();
            if body.is_empty() {
                continue;
            }
            let v = parse_i64_any(body).with_context(|| format!("{path}:{}", lineno + 1))?;
            out.push(v);
        }
        log::debug!("read {} values from {}", out.len(), path);
    }

    for s in &io.values {
        out.push(parse_i64_any(s)?);
    }

    if out.is_empty() {
        anyhow::bail!("no input values (pass values or --in <file>)");
    }
    Ok(out)
}

pub fn write_values<T: Display>(io: &ValueIo, values: &[T]) -> anyhow::Result<()> {
    match &io.out {
        Some(path) => {
            let f = File::create(path).with_context(|| format!("create output: {path}"))?;
            let mut w = BufWriter::new(f);
            for v in values {
                writeln!(w, "{v}")?;
            }
            w.flush().with_context(|| format!("write output: {path}"))?;
            log::info!("wrote {} values to {}", values.len(), path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            for v in values {
                writeln!(w, "{v}")?;
            }
            w.flush()?;
        }
    }
    Ok(())
}

/// CRC-32 over the little-endian 64-bit patterns of a result stream.
pub fn fingerprint(values: impl IntoIterator<Item = u64>) -> u32 {
    let mut h = crc32fast::Hasher::new();
    for v in values {
        h.update(&v.to_le_bytes());
    }
    h.finalize()
}

/// Log the batch size and fingerprint, then write the results.
pub fn finish(io: &ValueIo, name: &str, results: &[i64]) -> anyhow::Result<()> {
    log::info!(
        "{name}: {} values, crc32=0x{:08x}",
        results.len(),
        fingerprint(results.iter().map(|&v| v as u64))
    );
    write_values(io, results)
}
