#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to exactly the bytes it consumed
    let Ok(bitmap) = decode(data, enough::Unstoppable) else {
        return;
    };

    let encoded = encode(&bitmap, enough::Unstoppable).unwrap();
    assert!(encoded.len() <= data.len(), "encode produced bytes decode never saw");
    assert_eq!(&encoded[..], &data[..encoded.len()], "roundtrip byte mismatch");

    // And the re-encoded bytes must parse back to the same value
    let reparsed = decode(&encoded, enough::Unstoppable).unwrap();
    assert_eq!(reparsed, bitmap);
});
