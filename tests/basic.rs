use std::sync::Arc;
use striped_hashmap::*;

#[test]
fn new() {
    let _map = HashMap::with_capacity(16).unwrap();
}

#[test]
fn zero_capacity() {
    assert_eq!(HashMap::with_capacity(0).unwrap_err(), Error::ZeroCapacity);
}

#[test]
fn capacity_overflow() {
    match HashMap::with_capacity(usize::MAX) {
        Err(e @ Error::Allocation { .. }) => {
            assert_eq!(e.to_string(), format!("failed to allocate {} buckets", usize::MAX));
            assert!(std::error::Error::source(&e).is_some());
        }
        other => panic!("expected an allocation error, got {:?}", other),
    }
}

#[test]
fn insert() {
    let map = HashMap::with_capacity(16).unwrap();
    let old = map.insert(42, 0);
    assert!(old.is_none());
}

#[test]
fn get_empty() {
    let map = HashMap::with_capacity(16).unwrap();
    let e = map.get(42);
    assert!(e.is_none());
}

#[test]
fn remove_empty() {
    let map = HashMap::with_capacity(16).unwrap();
    let old = map.remove(42);
    assert!(old.is_none());
    assert!(map.is_empty());
}

#[test]
fn insert_and_remove() {
    let map = HashMap::with_capacity(16).unwrap();
    map.insert(42, 0);
    let old = map.remove(42).unwrap();
    assert_eq!(old, 0);
    assert!(map.get(42).is_none());
}

#[test]
fn insert_and_get() {
    let map = HashMap::with_capacity(16).unwrap();
    map.insert(42, 0);
    let e = map.get(42).unwrap();
    assert_eq!(e, 0);
}

#[test]
fn update() {
    let map = HashMap::with_capacity(16).unwrap();
    map.insert(42, 0);
    let old = map.insert(42, 1);
    assert_eq!(old, Some(0));
    assert_eq!(map.get(42), Some(1));
    assert_eq!(map.len(), 1);
}

#[test]
fn one_bucket() {
    let map = HashMap::with_capacity(1).unwrap();

    // we want to check that all operations work regardless on whether
    // we are operating on the head of a bucket, the tail of the bucket,
    // or somewhere in the middle.
    let v = map.insert(-7, 0);
    assert_eq!(v, None);
    let v = map.insert(0, 10);
    assert_eq!(v, None);
    let v = map.insert(7, 100);
    assert_eq!(v, None);
    assert_eq!(map.get(-7), Some(0));
    assert_eq!(map.get(0), Some(10));
    assert_eq!(map.get(7), Some(100));

    // check that replacing the keys returns the correct old value
    assert_eq!(map.insert(-7, 1), Some(0));
    assert_eq!(map.insert(0, 11), Some(10));
    assert_eq!(map.insert(7, 101), Some(100));
    // and updated the right value
    assert_eq!(map.get(-7), Some(1));
    assert_eq!(map.get(0), Some(11));
    assert_eq!(map.get(7), Some(101));
    // and that remove produces the right value
    // note that we must remove them in a particular order
    // so that we test all three node positions
    assert_eq!(map.remove(0), Some(11));
    assert_eq!(map.remove(7), Some(101));
    assert_eq!(map.remove(-7), Some(1));
    assert!(map.is_empty());
}

#[test]
fn colliding_keys() {
    let map = HashMap::with_capacity(4).unwrap();
    assert_eq!(map.insert(1, 100), None);
    assert_eq!(map.insert(5, 200), None);
    assert_eq!(map.get(1), Some(100));
    assert_eq!(map.get(5), Some(200));
    assert_eq!(map.remove(1), Some(100));
    assert_eq!(map.get(1), None);
    assert_eq!(map.get(5), Some(200));
    assert_eq!(map.len(), 1);
}

#[test]
fn negative_keys() {
    let map = HashMap::with_capacity(4).unwrap();
    for k in -8..0 {
        map.insert(k, -k);
    }
    for k in -8..0 {
        assert_eq!(map.get(k), Some(-k));
        assert_eq!(map.bucket_of(k), k.rem_euclid(4) as usize);
    }
    assert_eq!(map.len(), 8);
}

#[test]
fn extremes() {
    let map = HashMap::with_capacity(7).unwrap();
    for &k in &[i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX] {
        assert_eq!(map.insert(k, k), None);
    }
    for &k in &[i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX] {
        assert_eq!(map.get(k), Some(k));
        assert!(map.bucket_of(k) < 7);
    }
}

#[test]
fn dump() {
    let map = HashMap::with_capacity(4).unwrap();
    map.insert(1, 100);
    map.insert(5, 200);
    map.insert(-1, 7);

    let dump = map.dump();
    assert_eq!(dump.len(), 3);
    assert_eq!(dump.bucket(1), Some(&[(1, 100), (5, 200)][..]));
    assert_eq!(dump.bucket(3), Some(&[(-1, 7)][..]));
    assert_eq!(
        dump.to_string(),
        "[0] -> \n[1] -> (1,100) -> (5,200)\n[2] -> \n[3] -> (-1,7)\n"
    );
    assert_eq!(dump, map.dump_relaxed());
}

#[test]
fn profile_scenario() {
    let map = HashMap::with_capacity(4).unwrap();
    map.insert(1, 100);
    map.insert(5, 200);
    map.get(1);
    map.get(5);
    map.remove(1);
    map.get(1);

    let p = map.profile();
    assert_eq!(p.gets, 3);
    assert_eq!(p.put_adds, 2);
    assert_eq!(p.put_replaces, 0);
    assert_eq!(p.del_success, 1);
    assert_eq!(p.del_failure, 0);
    assert_eq!(p.total_ops, 6);
    assert_eq!(p.size, 1);
    assert_eq!(p.percent(p.gets), Some(50.0));
}

#[test]
fn concurrent_insert() {
    let map = Arc::new(HashMap::with_capacity(64).unwrap());

    let map1 = map.clone();
    let t1 = std::thread::spawn(move || {
        for i in 0..64 {
            map1.insert(i, 0);
        }
    });
    let map2 = map.clone();
    let t2 = std::thread::spawn(move || {
        for i in 0..64 {
            map2.insert(i, 1);
        }
    });

    t1.join().unwrap();
    t2.join().unwrap();

    for i in 0..64 {
        let v = map.get(i).unwrap();
        assert!(v == 0 || v == 1);
    }
    assert_eq!(map.len(), 64);

    let p = map.profile();
    assert_eq!(p.put_adds, 64);
    assert_eq!(p.put_replaces, 64);
}

#[test]
fn concurrent_remove() {
    let map = Arc::new(HashMap::with_capacity(16).unwrap());

    for i in 0..64 {
        map.insert(i, i);
    }

    let map1 = map.clone();
    let t1 = std::thread::spawn(move || {
        for i in 0..64 {
            if let Some(v) = map1.remove(i) {
                assert_eq!(v, i);
            }
        }
    });
    let map2 = map.clone();
    let t2 = std::thread::spawn(move || {
        for i in 0..64 {
            if let Some(v) = map2.remove(i) {
                assert_eq!(v, i);
            }
        }
    });

    t1.join().unwrap();
    t2.join().unwrap();

    // after joining the threads, the map should be empty
    for i in 0..64 {
        assert!(map.get(i).is_none());
    }
    assert!(map.is_empty());

    let p = map.profile();
    assert_eq!(p.del_success, 64);
    assert_eq!(p.del_failure, 64);
}

#[test]
fn debug() {
    let map = HashMap::with_capacity(4).unwrap();
    map.insert(42, 0);
    map.insert(16, 8);

    let formatted = format!("{:?}", map);
    assert_eq!(formatted, "{16: 8, 42: 0}");
}
