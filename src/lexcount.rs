//! lexcount: check the digit-DP counter against brute force.
//!
//! With no arguments, sweeps `n = 1..=99`, `m = 1..=n` and prints one line
//! per disagreement. `verify` runs the same sweep with a custom bound;
//! `count` answers a single query, reading `n m` from stdin when they are
//! not given on the command line.

use std::io::BufRead;
use std::time::Instant;

use anyhow::{bail, ensure, Context, Result};
use lexcount::{brute_count, formula_count_digits, Digits, Mismatch, Sweep, DEFAULT_MAX_N};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Method {
    Brute,
    Formula,
    Both,
}

impl Method {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "brute" => Ok(Method::Brute),
            "formula" => Ok(Method::Formula),
            "both" => Ok(Method::Both),
            _ => bail!("unknown method {:?}; expected brute, formula or both", s),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  lexcount                          sweep n = 1..={}", DEFAULT_MAX_N);
    eprintln!("  lexcount verify [--max-n N]       sweep n = 1..=N, print summary");
    eprintln!("  lexcount count [N M] [--method brute|formula|both] [--time]");
    eprintln!();
    eprintln!("count reads \"N M\" from stdin when N and M are omitted.");
}

fn next_arg<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(v) => Ok(v.as_str()),
        None => bail!("missing value for {}", flag),
    }
}

fn parse_modulus(s: &str) -> Result<u64> {
    let m: u64 = s
        .parse()
        .with_context(|| format!("invalid modulus {:?}", s))?;
    ensure!(m > 0, "modulus must be positive");
    Ok(m)
}

fn run_default() {
    Sweep::default().run_with(|mm| println!("{}", mm));
}

fn run_verify(args: &[String]) -> Result<bool> {
    let mut max_n = DEFAULT_MAX_N;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--max-n" => {
                let v = next_arg(args, &mut i, "--max-n")?;
                max_n = v
                    .parse()
                    .with_context(|| format!("invalid --max-n {:?}", v))?;
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    let sweep = Sweep::new(max_n);
    let t0 = Instant::now();
    let report = sweep.run_with(|mm| println!("{}", mm));
    eprintln!(
        "checked {} pairs, {} mismatches ({:.1}ms)",
        report.checked,
        report.mismatches.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(report.is_clean())
}

fn read_query_from_stdin() -> Result<(String, String)> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading query from stdin")?;
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(n), Some(m), None) => Ok((n.to_string(), m.to_string())),
        _ => bail!("expected \"N M\" on stdin, got {:?}", line.trim_end()),
    }
}

/// Run `f`, print the result under `label`, then the elapsed time when asked.
fn print_result(label: &str, show_time: bool, f: impl FnOnce() -> u64) -> u64 {
    let t0 = Instant::now();
    let r = f();
    let elapsed = t0.elapsed();
    if label.is_empty() {
        println!("{}", r);
    } else {
        println!("{}: {}", label, r);
    }
    if show_time {
        let prefix = if label.is_empty() {
            String::new()
        } else {
            format!("{} ", label)
        };
        println!("{}time: {:.6}ms", prefix, elapsed.as_secs_f64() * 1000.0);
    }
    r
}

fn run_count(args: &[String]) -> Result<bool> {
    let mut method = Method::Formula;
    let mut show_time = false;
    let mut positional = vec![];

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--method" => method = Method::parse(next_arg(args, &mut i, "--method")?)?,
            "--time" => show_time = true,
            other if other.starts_with("--") => bail!("unknown argument: {}", other),
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let (n_str, m_str) = match positional.len() {
        0 => read_query_from_stdin()?,
        2 => (positional[0].clone(), positional[1].clone()),
        k => bail!("count takes N and M, got {} positional arguments", k),
    };

    let digits = Digits::parse(&n_str).with_context(|| format!("invalid N {:?}", n_str))?;
    let m = parse_modulus(&m_str)?;
    let n = digits.value();

    match method {
        Method::Brute => {
            print_result("", show_time, || brute_count(n, m));
        }
        Method::Formula => {
            print_result("", show_time, || formula_count_digits(&digits, m));
        }
        Method::Both => {
            let brute = print_result("brute", show_time, || brute_count(n, m));
            let formula = print_result("formula", show_time, || formula_count_digits(&digits, m));
            if brute != formula {
                println!(
                    "{}",
                    Mismatch {
                        n,
                        m,
                        brute,
                        formula
                    }
                );
                return Ok(false);
            }
        }
    }

    Ok(true)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let ok = match args.get(1).map(|s| s.as_str()) {
        None => {
            run_default();
            true
        }
        Some("verify") => run_verify(&args[2..])?,
        Some("count") => run_count(&args[2..])?,
        Some("--help") | Some("-h") => {
            print_usage();
            true
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
