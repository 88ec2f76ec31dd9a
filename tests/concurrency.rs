//! Concurrent writers must never interleave partial lines.

use colorlog::{Channel, ColorLog, Severity, SharedBuffer};
use regex::Regex;
use std::sync::Arc;
use std::thread;

const WRITERS: usize = 10;

#[test]
fn concurrent_writes_produce_whole_lines() {
    for severity in Severity::all() {
        let buf = SharedBuffer::new();
        let channel = Arc::new(Channel::builder(severity).writer(buf.clone()).build());

        let handles: Vec<_> = (0..WRITERS)
            .map(|id| {
                let channel = Arc::clone(&channel);
                thread::spawn(move || {
                    channel
                        .printf(format_args!("concurrent message {id}"))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let out = buf.contents();
        assert_eq!(out.matches("concurrent message").count(), WRITERS);

        let shape = Regex::new(r"^\x1b\[3\dm[A-Z]+:\s*\x1b\[0m \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} (\S+\.rs:\d+: )?concurrent message \d$").unwrap();
        let lines = buf.lines();
        assert_eq!(lines.len(), WRITERS);
        for line in &lines {
            assert!(shape.is_match(line), "{severity}: {line:?}");
        }
    }
}

#[test]
fn shared_writer_keeps_channels_from_interleaving() {
    let buf = SharedBuffer::new();
    let log = Arc::new(ColorLog::builder().writer(buf.clone()).build());

    let handles: Vec<_> = (0..WRITERS)
        .map(|id| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                let severity = Severity::all()[id % 4];
                for n in 0..20 {
                    log.channel(severity)
                        .printf(format_args!("writer {id} line {n}"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buf.lines();
    assert_eq!(lines.len(), WRITERS * 20);
    for line in &lines {
        assert_eq!(line.matches("writer ").count(), 1, "{line:?}");
    }
}

#[test]
fn single_caller_order_is_preserved() {
    let buf = SharedBuffer::new();
    let info = Channel::builder(Severity::Info).writer(buf.clone()).build();
    for n in 0..50 {
        info.printf(format_args!("seq {n}")).unwrap();
    }
    for (n, line) in buf.lines().iter().enumerate() {
        assert!(line.ends_with(&format!("seq {n}")), "{line:?}");
    }
}
