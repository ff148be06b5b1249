//! Benchmark for RFC 3339 parsing, formatting and epoch conversion.
//!
//! Usage: `bench-rfc3339 [corpus.json | count] [iterations]`
//!
//! The corpus is a JSON array of strings: `["2024-05-01T10:47:40Z", ...]`.
//! Without one, `count` timestamps (default 200,000) are generated from a
//! fixed seed. Each phase is averaged over `iterations` runs (default 5).
//! Set `RUST_LOG=debug` for per-phase details.

use std::fs;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rfc3339_time::{epoch, format, format_into, parse, Timestamp, MAX_FORMATTED_LEN};

const DEFAULT_COUNT: usize = 200_000;
const DEFAULT_ITERS: u32 = 5;
const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

// =============================================================================
// INPUT
// =============================================================================

/// Generates timestamps spread over 1970..2262 with mixed precision and offsets.
fn generate(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = Vec::with_capacity(count);

    while out.len() < count {
        let nanos = rng.random_range(0..=i64::MAX);
        let Ok(ts) = epoch::from_nanos(nanos) else {
            continue;
        };

        // Drop precision on some values so every fraction width shows up.
        let digits = rng.random_range(0..=9u32);
        let scale = 10u32.pow(9 - digits);
        let offset_minutes = rng.random_range(-14 * 60..=14 * 60);

        let ts = ts
            .with_nanosecond(ts.nanosecond() / scale * scale)
            .and_then(|ts| ts.with_offset_seconds(offset_minutes * 60));
        match ts {
            Ok(ts) => out.push(format(&ts)),
            Err(e) => debug!("skipping generated value: {}", e),
        }
    }
    out
}

fn load_corpus(path: &str) -> Vec<String> {
    let json = fs::read_to_string(path).expect("Failed to read corpus");
    let corpus: Vec<String> = serde_json::from_str(&json).expect("Failed to parse corpus JSON");
    info!("Loaded {} timestamps from {}", corpus.len(), path);
    corpus
}

// =============================================================================
// PHASES
// =============================================================================

fn report(name: &str, elapsed: Duration, count: usize) {
    let per_item = elapsed.as_nanos() as f64 / count.max(1) as f64;
    println!(
        "{:<24} {:>10.2?} ({:.1} ns/op, {:.2} M ops/s)",
        name,
        elapsed,
        per_item,
        1_000.0 / per_item
    );
}

/// Runs `f` over `iters` iterations and returns the average duration.
fn time_avg(iters: u32, mut f: impl FnMut()) -> Duration {
    // Warmup
    f();
    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    start.elapsed() / iters
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let iters = args
        .get(2)
        .and_then(|n| n.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_ITERS);

    let inputs = match args.get(1).map(String::as_str) {
        Some(path) if path.ends_with(".json") => load_corpus(path),
        other => {
            let count = other
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_COUNT);
            info!("Generating {} timestamps", count);
            generate(count)
        }
    };

    // Parse once up front; reject anything the corpus gets wrong.
    let mut parsed: Vec<Timestamp> = Vec::with_capacity(inputs.len());
    for text in &inputs {
        match parse(text) {
            Ok(ts) => parsed.push(ts),
            Err(e) => warn!("rejected {:?}: {}", text, e),
        }
    }
    println!(
        "Inputs: {} ({} valid, {} rejected)",
        inputs.len(),
        parsed.len(),
        inputs.len() - parsed.len()
    );

    println!("\n=== Throughput (avg of {} iterations) ===", iters);

    let parse_time = time_avg(iters, || {
        for text in &inputs {
            let _ = std::hint::black_box(parse(text));
        }
    });
    report("parse", parse_time, inputs.len());

    let format_time = time_avg(iters, || {
        for ts in &parsed {
            std::hint::black_box(format(ts));
        }
    });
    report("format (String)", format_time, parsed.len());

    let mut buf = [0u8; MAX_FORMATTED_LEN];
    let format_into_time = time_avg(iters, || {
        for ts in &parsed {
            let _ = std::hint::black_box(format_into(ts, &mut buf));
        }
    });
    report("format (buffer)", format_into_time, parsed.len());

    let to_nanos_time = time_avg(iters, || {
        for ts in &parsed {
            let _ = std::hint::black_box(epoch::to_nanos(ts));
        }
    });
    report("to_nanos", to_nanos_time, parsed.len());

    let nanos: Vec<i64> = parsed.iter().filter_map(|ts| epoch::to_nanos(ts).ok()).collect();
    debug!("{} of {} values fit in i64 nanoseconds", nanos.len(), parsed.len());

    let from_nanos_time = time_avg(iters, || {
        for &n in &nanos {
            let _ = std::hint::black_box(epoch::from_nanos(n));
        }
    });
    report("from_nanos", from_nanos_time, nanos.len());

    // Verify the instant survives text and epoch round trips.
    let mut mismatches = 0usize;
    for ts in &parsed {
        let reparsed = parse(&format(ts)).expect("formatted output must parse");
        if epoch::to_seconds(ts).ok() != epoch::to_seconds(&reparsed).ok()
            || ts.nanosecond() != reparsed.nanosecond()
        {
            mismatches += 1;
            warn!("round trip changed {}", format(ts));
        }
    }
    for &n in &nanos {
        let back = epoch::from_nanos(n).and_then(|ts| epoch::to_nanos(&ts));
        if back != Ok(n) {
            mismatches += 1;
            warn!("epoch round trip changed {}", n);
        }
    }

    println!("\n=== Summary ===");
    println!("Round-trip mismatches: {}", mismatches);
    assert_eq!(mismatches, 0, "Round trips must preserve the instant");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_reproducible() {
        let first = generate(64);
        assert_eq!(first.len(), 64);
        assert_eq!(first, generate(64));
        for text in &first {
            assert!(parse(text).is_ok(), "generated unparseable {}", text);
        }
    }

    #[test]
    fn test_load_corpus_reads_string_array() {
        let path = std::env::temp_dir().join(format!("rfc3339-corpus-{}.json", std::process::id()));
        fs::write(&path, r#"["2024-05-01T10:47:40Z", "2014-11-12T19:12:14.125-06:30"]"#).unwrap();
        let corpus = load_corpus(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();
        assert_eq!(corpus, ["2024-05-01T10:47:40Z", "2014-11-12T19:12:14.125-06:30"]);
    }
}
