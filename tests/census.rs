// Protocol behavior tests for the chain census.
// Run with: cargo test --test census -- --nocapture

use rxp_chaincensus::Census::Buffer::ExpanderPort;
use rxp_chaincensus::Census::RackBuilder;
use rxp_chaincensus::Core::Rack;
use std::sync::atomic::Ordering::Relaxed;

fn readouts(rack: &Rack) -> Vec<(u32, u32)> {
    (0..rack.len())
        .filter_map(|position| rack.readout(position))
        .map(|readout| (readout.rank, readout.total))
        .collect()
}

fn stable(n: usize) -> Vec<(u32, u32)> {
    (1..=n as u32).map(|rank| (rank, n as u32)).collect()
}

#[test]
fn single_module_counts_itself_on_the_first_cycle() {
    let rack = RackBuilder::new().with_chain(1).build().unwrap();
    rack.process_cycle();

    let readout = rack.readout(0).unwrap();
    assert_eq!(readout.rank, 1);
    assert_eq!(readout.total, 1);
}

#[test]
fn chain_stabilizes_within_length_cycles() {
    for n in 1..=8 {
        let rack = RackBuilder::new().with_chain(n).build().unwrap();
        for _ in 0..n {
            rack.process_cycle();
        }
        assert_eq!(readouts(&rack), stable(n), "chain of {}", n);
    }
}

#[test]
fn results_constant_once_stabilized() {
    let n = 6;
    let rack = RackBuilder::new().with_chain(n).build().unwrap();
    for _ in 0..n {
        rack.process_cycle();
    }

    let snapshot = readouts(&rack);
    assert_eq!(snapshot, stable(n));
    for _ in 0..32 {
        rack.process_cycle();
        assert_eq!(readouts(&rack), snapshot);
    }
}

#[test]
fn total_read_is_one_cycle_stale() {
    let rack = RackBuilder::new().with_chain(2).build().unwrap();
    rack.process_cycle();

    // Module 0 read its total BEFORE module 1 could answer this cycle: it
    // must still see last cycle's (empty) value, not the one the flip it
    // just requested will deliver.
    assert_eq!(rack.readout(0).unwrap().total, 0);
    let right = rack.readout(1).unwrap();
    assert_eq!(right.rank, 2);
    assert_eq!(right.total, 2);

    rack.process_cycle();
    assert_eq!(rack.readout(0).unwrap().total, 2);
}

#[test]
fn blank_module_splits_the_chain() {
    let rack = RackBuilder::new()
        .with_chain(2)
        .with_blank()
        .with_chain(3)
        .build()
        .unwrap();
    for _ in 0..3 {
        rack.process_cycle();
    }

    // readouts() skips the blank: two independent chains remain.
    assert_eq!(
        readouts(&rack),
        vec![(1, 2), (2, 2), (1, 3), (2, 3), (3, 3)]
    );
}

#[test]
fn gap_slot_splits_the_chain() {
    let rack = RackBuilder::new()
        .with_chain(3)
        .with_gap()
        .with_chain(2)
        .build()
        .unwrap();
    for _ in 0..3 {
        rack.process_cycle();
    }

    assert_eq!(
        readouts(&rack),
        vec![(1, 3), (2, 3), (3, 3), (1, 2), (2, 2)]
    );
}

#[test]
fn removing_the_middle_module_heals_into_two_chains() {
    let rack = RackBuilder::new().with_chain(5).build().unwrap();
    for _ in 0..5 {
        rack.process_cycle();
    }
    assert_eq!(readouts(&rack), stable(5));

    rack.remove(2).unwrap();
    for _ in 0..4 {
        rack.process_cycle();
    }
    assert_eq!(readouts(&rack), vec![(1, 2), (2, 2), (1, 2), (2, 2)]);
}

#[test]
fn closing_a_gap_merges_two_chains() {
    let rack = RackBuilder::new()
        .with_chain(2)
        .with_gap()
        .with_chain(2)
        .build()
        .unwrap();
    for _ in 0..2 {
        rack.process_cycle();
    }
    assert_eq!(readouts(&rack), vec![(1, 2), (2, 2), (1, 2), (2, 2)]);

    rack.extract(2).unwrap();
    for _ in 0..4 {
        rack.process_cycle();
    }
    assert_eq!(readouts(&rack), stable(4));
}

#[test]
fn inserting_a_module_grows_the_chain() {
    let rack = RackBuilder::new().with_chain(4).build().unwrap();
    for _ in 0..4 {
        rack.process_cycle();
    }
    assert_eq!(readouts(&rack), stable(4));

    rack.insert_census(2).unwrap();
    for _ in 0..5 {
        rack.process_cycle();
    }
    assert_eq!(readouts(&rack), stable(5));
}

#[test]
fn message_fields_are_independent() {
    let port = ExpanderPort::new();

    port.producer().rank_so_far.store(7, Relaxed);
    assert_eq!(port.producer().total_count.load(Relaxed), 0);

    port.producer().total_count.store(9, Relaxed);
    assert_eq!(port.producer().rank_so_far.load(Relaxed), 7);
}

#[test]
fn flip_defers_visibility_until_applied() {
    let port = ExpanderPort::new();

    port.producer().rank_so_far.store(3, Relaxed);
    port.request_flip();

    // Not yet applied: the owner still reads the old consumer slot.
    assert!(port.flip_pending());
    assert_eq!(port.consumer().rank_so_far.load(Relaxed), 0);

    assert!(port.apply_flip());
    assert_eq!(port.consumer().rank_so_far.load(Relaxed), 3);

    // Exactly one flip applies per request.
    assert!(!port.flip_pending());
    assert!(!port.apply_flip());
}
