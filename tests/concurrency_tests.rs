use logician::{AnyVariable, Bindings, Property, Variable};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_minting_never_aliases() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 2_000;

    let handles: Vec<AnyVariable> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| Variable::<u64>::new().erase())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers.into_iter().flat_map(|w| w.join().unwrap()).collect()
    });

    let unique: HashSet<_> = handles.iter().copied().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
}

#[test]
fn test_handles_compare_equally_on_every_thread() {
    let x = Variable::<String>::new();
    let key = x.erase();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(move || {
                assert_eq!(x.erase(), key);
                assert_eq!(key.typed::<String>(), x);
            });
        }
    });
}

#[test]
fn test_shared_bindings_read_concurrently() {
    let x = Variable::<i32>::new();
    let label = Variable::<String>::new();

    let mut bindings = Bindings::new();
    bindings.bind(x, 20).unwrap();
    bindings.bind(label, "twenty".to_string()).unwrap();
    let bindings = Arc::new(bindings);

    let derived: Vec<Property<i32>> = (1..=8).map(|k| x.map(move |n| n * k)).collect();

    thread::scope(|s| {
        for (k, property) in (1..=8).zip(&derived) {
            let bindings = Arc::clone(&bindings);
            s.spawn(move || {
                assert_eq!(bindings.evaluate(property).unwrap(), 20 * k);
                assert_eq!(bindings.value(label).unwrap(), "twenty");
            });
        }
    });
}

#[test]
fn test_properties_cross_thread_boundaries() {
    let x = Variable::<u8>::new();
    let p = x.map(|n| u32::from(*n) + 1);

    let q = thread::spawn(move || p.map(|n| n * 100)).join().unwrap();
    assert_eq!(q.evaluate(&4u8).unwrap(), 500);
    assert_eq!(q.variable(), x);
}
