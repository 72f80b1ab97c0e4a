#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal 1x1 24-bit BMP: 54 header + 3 pixel bytes + 1 padding
    let mut bmp = vec![0u8; 58];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // pixel offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&1u32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1u32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&4u32.to_le_bytes()); // image size
    bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00; // BGR
    fs::write(format!("{dir}/bmp_1x1.bmp"), &bmp).unwrap();

    // 2x2 with a 4-byte gap before the pixels and a 3-byte trailer
    let mut fancy = vec![0u8; 77];
    fancy[0] = b'B'; fancy[1] = b'M';
    fancy[2..6].copy_from_slice(&77u32.to_le_bytes());
    fancy[10..14].copy_from_slice(&58u32.to_le_bytes()); // offset past the gap
    fancy[14..18].copy_from_slice(&40u32.to_le_bytes());
    fancy[18..22].copy_from_slice(&2u32.to_le_bytes());
    fancy[22..26].copy_from_slice(&2u32.to_le_bytes());
    fancy[26..28].copy_from_slice(&1u16.to_le_bytes());
    fancy[28..30].copy_from_slice(&24u16.to_le_bytes());
    fancy[34..38].copy_from_slice(&16u32.to_le_bytes()); // two rows of 8
    fancy[54..58].fill(0xee); // gap
    for (i, b) in fancy[58..74].iter_mut().enumerate() {
        *b = i as u8;
    }
    fancy[74..77].copy_from_slice(b"ICC"); // trailer
    fs::write(format!("{dir}/bmp_2x2_gap_trailer.bmp"), &fancy).unwrap();

    // 8-bpp header: probe succeeds, decode refuses
    let mut paletted = bmp.clone();
    paletted[28..30].copy_from_slice(&8u16.to_le_bytes());
    fs::write(format!("{dir}/bmp_8bpp.bmp"), &paletted).unwrap();

    // Pixel offset pointing inside the headers
    let mut corrupt = bmp.clone();
    corrupt[10..14].copy_from_slice(&10u32.to_le_bytes());
    fs::write(format!("{dir}/bmp_offset_corrupt.bmp"), &corrupt).unwrap();

    // Malformed seeds for the error paths
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bad_sig.bin"), b"XY\x00\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/headers_only.bin"), &bmp[..54]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
