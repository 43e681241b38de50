extern crate std;


use std::{vec, vec::Vec};

use crate::{CollectSpout, CountSpout, DropSpout, FnSpout, Spout};

#[test]
fn drop_spout_accepts_items() {
    let mut s = DropSpout;
    assert!(s.send(1).is_ok());
    assert!(s.send_all([2, 3].into_iter()).is_ok());
    assert!(Spout::<i32>::flush(&mut s).is_ok());
}

#[test]
fn count_spout_counts() {
    let mut s = CountSpout::new();
    let _ = s.send("a");
    let _ = s.send("b");
    let _ = s.send_all(["c", "d"].into_iter());
    assert_eq!(s.count(), 4);
}

#[test]
fn fn_spout_calls_closure() {
    let mut collected = Vec::new();
    {
        let mut s = FnSpout::new(|x: u16| collected.push(x));
        let _ = s.send(1);
        let _ = s.send(2);
        let _ = s.send(3);
    }
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn collect_spout_gathers_items() {
    let mut s = CollectSpout::new();
    let _ = s.send(10u8);
    let _ = s.send_all([20, 30].into_iter());
    assert_eq!(s.items(), &[10, 20, 30]);

    let taken = s.take();
    assert_eq!(taken, vec![10, 20, 30]);
    assert!(s.items().is_empty());
}

#[test]
fn mutable_reference_forwards() {
    let mut inner = CollectSpout::new();
    {
        let mut by_ref = &mut inner;
        let _ = by_ref.send(7u32);
        let _ = Spout::<u32>::flush(&mut by_ref);
    }
    assert_eq!(inner.into_items(), vec![7]);
}
