#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    // Every transform must be total over any bitmap that decodes
    let Ok(bitmap) = decode(data, enough::Unstoppable) else {
        return;
    };

    let kinds = [
        Filter::RedOnly,
        Filter::GreenOnly,
        Filter::BlueOnly,
        Filter::Grayscale,
        Filter::Negative,
        Filter::Sepia,
        Filter::Pixelate,
        Filter::Blur(BlurSize::Three),
        Filter::Blur(BlurSize::Five),
    ];
    for kind in kinds {
        let mut scratch = bitmap.clone();
        filter(&mut scratch, kind, enough::Unstoppable).unwrap();
        assert_eq!(scratch.pixels.len(), bitmap.pixels.len(), "{kind:?} resized pixels");
    }

    // Mirrors are involutions whatever the input
    let mut scratch = bitmap.clone();
    mirror(&mut scratch, Axis::Horizontal, enough::Unstoppable).unwrap();
    mirror(&mut scratch, Axis::Horizontal, enough::Unstoppable).unwrap();
    mirror(&mut scratch, Axis::Vertical, enough::Unstoppable).unwrap();
    mirror(&mut scratch, Axis::Vertical, enough::Unstoppable).unwrap();
    assert_eq!(scratch, bitmap, "double mirror failed to restore");
});
