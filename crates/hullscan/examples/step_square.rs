//! Step through the scan of a square with an interior point and print each batch.
//!
//! Usage:
//!   cargo run -p hullscan --example step_square

use hullscan::prelude::*;

fn main() {
    let points: PointSet = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]
        .into_iter()
        .collect();
    println!("points: {points}");

    let mut scanner = HullScanner::new(points.clone());
    let mut ledger = EdgeLedger::new();
    let mut batch = match scanner.start() {
        Ok(events) => events,
        Err(e) => {
            eprintln!("cannot scan: {e}");
            return;
        }
    };
    let mut k = 0;
    loop {
        present(&mut ledger, &batch);
        for e in &batch {
            println!("step {k}: {e}");
        }
        if batch.iter().any(StepEvent::is_terminal) {
            break;
        }
        k += 1;
        batch = match scanner.step() {
            Ok(events) => events,
            Err(e) => {
                eprintln!("scan failed: {e}");
                return;
            }
        };
    }

    let hull: Vec<String> = compute_hull(&points).iter().map(|p| p.to_string()).collect();
    println!("hull: [{}]", hull.join(", "));
    println!("edges left on canvas: {}", ledger.drawn().len());
}
