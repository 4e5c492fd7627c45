use std::sync::{Arc, Barrier};
use std::thread;

use errchan_core::{ChannelConfig, ErrorChannel};

fn channel() -> &'static ErrorChannel {
    ErrorChannel::init(ChannelConfig::default()).unwrap()
}

#[test]
fn test_threads_are_isolated() {
    let ch = channel();
    let barrier = Arc::new(Barrier::new(2));

    let handles: Vec<_> = ["left", "right"]
        .into_iter()
        .map(|name| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                ch.clear();
                for i in 0..5 {
                    ch.append(&format!("{name} {i}"), i);
                    // interleave the two threads step by step
                    barrier.wait();
                }
                ch.read()
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], "left 0\nleft 1\nleft 2\nleft 3\nleft 4");
    assert_eq!(results[1], "right 0\nright 1\nright 2\nright 3\nright 4");
}

#[test]
fn test_clear_on_one_thread_keeps_other() {
    let ch = channel();
    ch.clear();
    ch.append("main thread", 1);

    thread::spawn(move || {
        assert_eq!(ch.read(), "");
        ch.append("worker", 2);
        ch.clear();
    })
    .join()
    .unwrap();

    assert_eq!(ch.read(), "main thread");
}

#[test]
fn test_new_thread_starts_empty() {
    let ch = channel();
    ch.append("not inherited", 1);
    let seen = thread::spawn(move || ch.read()).join().unwrap();
    assert_eq!(seen, "");
}

#[test]
fn test_contexts_on_separate_threads() {
    let ch = channel();
    let ctx = ch.begin().unwrap();
    let other = thread::spawn(move || {
        let (_, message) = ch.scoped(|ctx| ctx.report(1, "worker failure")).unwrap();
        message
    })
    .join()
    .unwrap();
    assert_eq!(other, "worker failure");
    assert_eq!(ctx.finish(), "");
}
