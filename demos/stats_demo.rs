use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use clap::Parser;
use clap::ValueEnum;
use probe_set::FnStrategy;
use probe_set::OpenAddressingSet;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HashKind {
    /// SipHash through `DefaultHasher`.
    Sip,
    /// The value itself; consecutive values fill consecutive slots.
    Identity,
    /// Multiplies by a constant that only spreads bits upward, so keys
    /// cluster in the low slots.
    Weak,
}

#[derive(Parser, Debug)]
struct Args {
    /// Number of distinct values to insert.
    #[arg(short = 'c', long = "count", default_value_t = 1000)]
    count: u64,

    /// After filling, remove every Nth inserted value.
    #[arg(short = 'r', long = "remove-every")]
    remove_every: Option<u64>,

    #[arg(long = "hash", value_enum, default_value_t = HashKind::Sip)]
    hash: HashKind,
}

fn sip_hash(value: &u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn identity_hash(value: &u64) -> u64 {
    *value
}

fn weak_hash(value: &u64) -> u64 {
    value.wrapping_mul(1 << 4)
}

fn same(a: &u64, b: &u64) -> bool {
    a == b
}

fn main() {
    let args = Args::parse();

    let hash: fn(&u64) -> u64 = match args.hash {
        HashKind::Sip => sip_hash,
        HashKind::Identity => identity_hash,
        HashKind::Weak => weak_hash,
    };
    let mut set = OpenAddressingSet::with_strategy(FnStrategy::new(
        hash,
        same as fn(&u64, &u64) -> bool,
    ));

    println!(
        "Filling set with {} u64 values using {:?} hashing...",
        args.count, args.hash
    );

    let mut growths = 0;
    let mut capacity = set.capacity();
    for value in 0..args.count {
        if !set.insert(value) {
            panic!("Value already exists in set: {}", value);
        }
        if set.capacity() != capacity {
            growths += 1;
            capacity = set.capacity();
        }
    }

    println!(
        "Inserted {} values; capacity {} after {} growths",
        set.len(),
        set.capacity(),
        growths
    );

    if let Some(every) = args.remove_every.filter(|&n| n > 0) {
        let mut removed = 0;
        for value in (0..args.count).step_by(every as usize) {
            if set.remove(&value) {
                removed += 1;
            }
        }
        println!("Removed {} values (every {}th)", removed, every);

        let unreachable = (0..args.count)
            .filter(|value| value % every != 0)
            .filter(|value| !set.contains(value))
            .count();
        println!(
            "Values hidden behind tombstones until the next growth: {}",
            unreachable
        );
    }

    println!("Final load factor: {:.2}%", set.load_factor() * 100.0);

    set.probe_histogram().print();
    set.debug_stats().print();
}
