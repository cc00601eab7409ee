// In demos/churn.rs
use rxp_chaincensus::Census::RackBuilder;
use rxp_chaincensus::Core::Rack;
use std::env;

fn print_row(rack: &Rack, label: &str) {
    print!("{:<24}", label);
    for position in 0..rack.len() {
        match rack.readout(position) {
            Some(readout) => print!(" [{}/{}]", readout.rank, readout.total),
            None => print!(" [----]"),
        }
    }
    println!();
}

fn settle(rack: &Rack) {
    // A full row length of cycles always reaches steady state
    for _ in 0..rack.len() {
        rack.process_cycle();
    }
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let rounds: usize = if args.len() > 1 {
        args[1].parse().expect("Invalid number of rounds")
    } else {
        3
    };

    let rack = RackBuilder::new().with_chain(5).build()?;
    settle(&rack);
    print_row(&rack, "stable 5-chain:");
    println!("{}", "=".repeat(60));

    for round in 0..rounds {
        println!("Round {}:", round + 1);
        let middle = rack.len() / 2;

        rack.remove(middle)?;
        print_row(&rack, "  middle pulled:");
        settle(&rack);
        print_row(&rack, "  split healed:");

        rack.extract(middle)?;
        settle(&rack);
        print_row(&rack, "  gap closed:");

        rack.insert_census(middle)?;
        settle(&rack);
        print_row(&rack, "  regrown:");

        rack.insert_blank(middle)?;
        settle(&rack);
        print_row(&rack, "  blank wedged in:");

        rack.extract(middle)?;
        settle(&rack);
        print_row(&rack, "  blank taken out:");
    }

    println!("{}", "=".repeat(60));
    println!("Churn: {} rounds, {} cycles total", rounds, rack.frame());
    Ok(())
}
