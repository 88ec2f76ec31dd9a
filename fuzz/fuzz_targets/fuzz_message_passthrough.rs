#![no_main]
use colorlog::{Channel, Severity, SharedBuffer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must come out unmodified after the header
    let buf = SharedBuffer::new();
    let channel = Channel::builder(Severity::Error).writer(buf.clone()).build();
    channel.write_bytes(data).expect("in-memory write cannot fail");

    let out = buf.bytes();
    assert!(out.starts_with(Severity::Error.prefix().as_bytes()));
    assert!(data.is_empty() || out.windows(data.len()).any(|w| w == data));
    assert_eq!(out.last(), Some(&b'\n'));
});
