//! Solves a handful of recurrences and prints their polynomial solutions.
//!
//! Run with `RUST_LOG=debug` to see the degree bound derivation and the
//! size of each linear system.

use polyrec::prelude::*;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn poly(coeffs: &[i64]) -> DensePoly<Q> {
    DensePoly::new(coeffs.iter().map(|&c| Q::from_integer(c)).collect())
}

fn main() -> Result<(), RecurrenceError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    let cases = [
        // 3y(n+2) - n y(n+1) + (n-1) y(n) = 0
        (vec![poly(&[-1, 1]), poly(&[0, -1]), poly(&[3])], DensePoly::zero()),
        // y(n+1) - y(n) = 1
        (vec![poly(&[-1]), poly(&[1])], poly(&[1])),
        // y(n) = n^2
        (vec![poly(&[1])], poly(&[0, 0, 1])),
        // y(n+1) - 2y(n) = 0
        (vec![poly(&[-2]), poly(&[1])], DensePoly::zero()),
        // n^2 y(n+1) + (1 - n^2) y(n) = 0
        (vec![poly(&[1, 0, -1]), poly(&[0, 0, 1])], DensePoly::zero()),
        // y(n+1) - y(n) = n^2
        (vec![poly(&[-1]), poly(&[1])], poly(&[0, 0, 1])),
    ];

    let solver = PolySolver::default();
    for (p, f) in cases {
        let rec = Recurrence::new(p, f)?;
        let solutions = solver.solve(&rec)?;
        println!("{rec}");
        println!("    {solutions}");
    }

    // The same first-order sum in another variable.
    let p = [poly(&[-1]), poly(&[1])];
    let solutions = poly_solutions(&p, &poly(&[0, 1]), &Variable::new("k"))?;
    println!("y(k+1) - y(k) = k");
    println!("    {solutions}");

    Ok(())
}
