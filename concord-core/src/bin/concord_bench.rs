//! Concordance Benchmarking Tool
//!
//! Measures the throughput of the concordance pipeline on a large text file,
//! such as a book collection or a Wikipedia dump.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: Splitting raw bytes into whitespace-delimited tokens
//! 2. **Build**: Tokenize + normalize + accumulate per-word statistics
//! 3. **Sort**: Ordering the finished concordance by every supported key
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/concord_bench /path/to/corpus.txt
//!
//! # Exclude some words while building
//! ./target/release/concord_bench /path/to/corpus.txt "the a an of"
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Build ===
//! --------------------------------
//! Mode        : Build
//! Elapsed     : 0.812 s
//! Throughput  : 0.231 GiB/s
//! Items       : 31_402_117
//! Items/sec   : 38_672_553
//! --------------------------------
//! ```
//!
//! Build in release mode and use an input of 100MB+ for stable numbers.

use std::env;
use std::error::Error;
use std::fs;
use std::time::{Duration, Instant};

use concord_core::analyzer::tokenizer::tokenize;
use concord_core::analyzer::IgnoreSet;
use concord_core::concordance::build_from_reader;
use concord_core::{SortDirection, SortField, SortKey};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: concord_bench <path> [ignore-words]");
        std::process::exit(1);
    }

    let path = &args[1];
    let ignore = args
        .get(2)
        .map(|list| IgnoreSet::parse(list))
        .unwrap_or_default();

    println!("Loading file...");
    let bytes = fs::read(path)?;

    println!("File size: {}", fmt_bytes(bytes.len() as u64));
    println!("Ignoring:  {} words\n", ignore.len());

    bench_tokenize(&bytes);
    bench_build(&bytes, &ignore)?;
    bench_sort(&bytes, &ignore)?;

    Ok(())
}

fn bench_tokenize(input: &[u8]) {
    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenize(input, |_t| sink += 1);
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenize(input, |_t| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_build(input: &[u8], ignore: &IgnoreSet) -> Result<(), Box<dyn Error>> {
    println!("=== Build ===");

    let concordance = build_from_reader(input, ignore)?;
    let tokens = concordance.total_count() as u64;
    println!("Distinct    : {}", fmt_count(concordance.len() as u64));

    let elapsed = measure(|| {
        let built = build_from_reader(input, ignore);
        std::hint::black_box(built.is_ok());
    });

    print_perf("Build", input.len(), elapsed, tokens);
    Ok(())
}

fn bench_sort(input: &[u8], ignore: &IgnoreSet) -> Result<(), Box<dyn Error>> {
    let base = build_from_reader(input, ignore)?;

    for field in SortField::ALL {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let key = SortKey::new(field, direction);
            println!("=== Sort {key} ===");

            let elapsed = measure(|| {
                let mut c = base.clone();
                c.sort_by(key);
                std::hint::black_box(c.len());
            });

            print_perf("Sort", 0, elapsed, base.len() as u64);
        }
    }

    Ok(())
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, items: u64) {
    let secs = elapsed.as_secs_f64();

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);

    if input_bytes > 0 {
        let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);
        println!("Throughput  : {:.3} GiB/s", gib / secs);
    }

    if items > 0 {
        println!("Items       : {}", fmt_count(items));
        println!("Items/sec   : {}", fmt_count((items as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    let mut value = b as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    if unit == "B" {
        format!("{b} B")
    } else {
        format!("{value:.2} {unit}")
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
