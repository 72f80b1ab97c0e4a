#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes; must never panic
    let _ = zenbmp::decode(data, enough::Unstoppable);

    // Header probe, same rule
    let _ = zenbmp::BmpInfo::from_bytes(data);

    // Limited decode takes a different early-exit path
    let limits = zenbmp::Limits {
        max_pixels: Some(1 << 16),
        max_memory_bytes: Some(1 << 20),
        ..Default::default()
    };
    let _ = zenbmp::decode_with_limits(data, &limits, enough::Unstoppable);
});
