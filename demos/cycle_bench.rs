// In demos/cycle_bench.rs
use rxp_chaincensus::Census::RackBuilder;
use std::env;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let chain_len: usize = if args.len() > 1 {
        args[1].parse().expect("Invalid chain length")
    } else {
        16
    };
    let cycles: usize = if args.len() > 2 {
        args[2].parse().expect("Invalid cycle count")
    } else {
        1_000_000
    };

    let rack = RackBuilder::new().with_chain(chain_len).build()?;

    println!(
        "Bench: {} modules, {} cycles ({} module steps)...",
        chain_len,
        cycles,
        chain_len * cycles
    );

    let start = std::time::Instant::now();
    for _ in 0..cycles {
        rack.process_cycle();
    }
    let elapsed = start.elapsed();

    // The row must be stable, or the run measured something broken
    let last = rack.readout(chain_len - 1).expect("census readout");
    assert_eq!(last.rank, chain_len as u32);
    assert_eq!(last.total, chain_len as u32);

    println!(
        "Throughput: {:.2} million cycles/sec, {:.2} million module steps/sec",
        (cycles as f64 / elapsed.as_secs_f64()) / 1_000_000.0,
        ((chain_len * cycles) as f64 / elapsed.as_secs_f64()) / 1_000_000.0
    );

    Ok(())
}
