//! Concurrent invocations against a stable store.
//!
//! Plain calls snapshot the store behind a read lock and then work on
//! private data, so any number of threads may slug concurrently and agree
//! with the single-threaded results.

use std::thread;

use slug::slug;

const INPUTS: &[(&str, &str)] = &[
    ("foo bar baz", "foo-bar-baz"),
    ("Déjà vu", "deja-vu"),
    ("Київ, Україна", "kiyiv-ukrayina"),
    ("Санкт-Петербург", "sankt-peterburg"),
    ("İstanbul", "istanbul"),
    ("مرحبا بك", "mrhba-bk"),
    ("=)", "psk"),
    ("鳄梨", "6boe5qko"),
    ("unicode ♥ is ☢", "unicode-is"),
];

#[test]
fn parallel_calls_agree_with_serial_results() {
    thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..8 {
            handles.push(scope.spawn(|| {
                for _ in 0..100 {
                    for (input, expected) in INPUTS {
                        assert_eq!(slug(input), *expected);
                    }
                }
            }));
        }
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
    });
}
