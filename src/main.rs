use skipset::SkipSet;
use skipset::profiling;

fn main() {
    let mut set = SkipSet::new();

    for value in [5, 3, 8, 1] {
        set.insert(value);
    }
    println!("{:?} first={:?} last={:?} len={}", set, set.first(), set.last(), set.len());

    set.remove(&3);
    println!("{:?} contains(3)={} len={}", set, set.contains(&3), set.len());

    set.insert(3);
    println!("{:?} len={}", set, set.len());

    for value in 0..10_000 {
        set.insert(value);
    }
    println!("level={} heights={:?}", set.level(), set.height_histogram());

    set.rebalance();
    println!("after rebalance: level={} heights={:?}", set.level(), set.height_histogram());

    set.clear();
    println!("empty first: {:?}", set.first());

    println!("{}", profiling::report());
}
