//! Prints the transfer function, its poles and zeros, and the decade table.
//!
//! Usage: `cargo run --example bode_table -- "<numerator>" "<denominator>"`
//!
//! Coefficients are given highest power first, separated by spaces. Without
//! arguments this shows the lightly damped second order system
//! `1 / (s^2 + 0.1s + 0.01)`.

use anyhow::Context;
use rust_bode::{compute_response, RootSet, SweepConfig};

fn print_roots(name: &str, roots: &RootSet) {
    println!("{name}:");
    match roots {
        RootSet::Constant => println!("  none"),
        RootSet::Unsupported { degree } => println!("  not computed for degree {degree}"),
        RootSet::Found(roots) => roots.iter().for_each(|r| println!("  {r}")),
    }
}

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    let mut args = std::env::args().skip(1);
    let numerator = args.next().unwrap_or_else(|| "1".to_owned());
    let denominator = args.next().unwrap_or_else(|| "1 0.1 0.01".to_owned());

    let Some(response) = compute_response(&numerator, &denominator, &SweepConfig::default())
        .context("computing frequency response")?
    else {
        log::warn!("no usable coefficients in {numerator:?} / {denominator:?}");
        return Ok(());
    };

    println!("{}", response.label());
    print_roots("Poles", response.poles());
    print_roots("Zeros", response.zeros());

    println!();
    println!("ω (rad/s)\tK (dB)\tφ (degrees)");
    for point in &response.decade_points {
        println!("{point}");
    }

    let skipped = response
        .sweep_points
        .iter()
        .filter(|p| !p.is_finite())
        .count();
    if skipped > 0 {
        log::warn!("{skipped} sweep points are singular and would not be plotted");
    }
    Ok(())
}
