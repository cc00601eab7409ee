// In demos/chain_watch.rs
use rxp_chaincensus::Census::RackBuilder;
use sha2::{Digest, Sha256};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Short display badge for a module id, like a serial number on a panel.
fn fingerprint(id: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.to_le_bytes());
    let digest = hasher.finalize();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        digest[0], digest[1], digest[2], digest[3]
    )
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let chain_len: usize = if args.len() > 1 {
        args[1].parse().expect("Invalid chain length")
    } else {
        5
    };

    let rack = RackBuilder::new()
        .with_sample_rate(48_000.0)
        .with_chain(chain_len)
        .build()?;

    let running = Arc::new(AtomicBool::new(true));
    let running_for_handler = Arc::clone(&running);

    // Handle Ctrl+C to shut the engine loop down
    ctrlc::set_handler(move || {
        running_for_handler.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    println!("Watch: rack of {} census modules", chain_len);
    println!("Press Ctrl+C to exit...");

    let mut old: Vec<(u32, u32)> = vec![(0, 0); chain_len];
    while running.load(Ordering::SeqCst) {
        rack.process_cycle();

        // Only redraw when something changed, the way a display layer would
        let mut dirty = false;
        for position in 0..rack.len() {
            if let Some(readout) = rack.readout(position) {
                let current = (readout.rank, readout.total);
                if old[position] != current {
                    old[position] = current;
                    dirty = true;
                }
            }
        }

        if dirty {
            println!(
                "\n{:<6} {:<18} {:<10} {:<6} {}",
                "Slot", "Id", "Serial", "Rank", "Total"
            );
            println!("{}", "=".repeat(60));
            for position in 0..rack.len() {
                if let Some(readout) = rack.readout(position) {
                    println!(
                        "{:<6} {:016x}   {:<10} {:<6} {}",
                        position,
                        readout.id,
                        fingerprint(readout.id),
                        readout.rank,
                        readout.total
                    );
                }
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    println!("Watch: shutting down after {} cycles", rack.frame());
    Ok(())
}
