//! Typed pixel views and imgref conversions.
#![cfg(feature = "rgb")]

#[cfg(feature = "imgref")]
use enough::Unstoppable;
use rgb::alt::BGR8;
use zenbmp::*;

// ── Helpers ──────────────────────────────────────────────────────────

/// A bitmap whose every pixel byte encodes its own position.
fn painted(width: u32, height: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height).unwrap();
    for y in 0..height as usize {
        let row = bitmap.row_mut(y).unwrap();
        for x in 0..width as usize {
            let base = ((y * width as usize + x) * 3) as u8;
            row[x * 3..x * 3 + 3].copy_from_slice(&[base, base + 1, base + 2]);
        }
    }
    bitmap
}

// ── Typed rows ───────────────────────────────────────────────────────

#[test]
fn typed_rows_cover_the_pixel_span_only() {
    let mut bitmap = painted(2, 2); // row_size 8, two pad bytes per row
    bitmap.row_mut(0).unwrap()[6..].copy_from_slice(&[0x5A, 0x5B]);

    let row = bitmap.row_pixels(0).unwrap();
    assert_eq!(row.len(), 2);
    assert_eq!(row[0], BGR8 { b: 0, g: 1, r: 2 });
    assert_eq!(row[1], BGR8 { b: 3, g: 4, r: 5 });
    assert!(bitmap.row_pixels(2).is_none());
}

#[test]
fn typed_row_edits_leave_padding_alone() {
    let mut bitmap = painted(1, 2); // row_size 4, one pad byte per row
    bitmap.row_mut(0).unwrap()[3] = 0x5A;
    bitmap.row_mut(1).unwrap()[3] = 0x5B;

    for y in 0..2 {
        for px in bitmap.row_pixels_mut(y).unwrap() {
            *px = BGR8 { b: 0xFF, g: 0xFF, r: 0xFF };
        }
    }

    // Every pixel byte rewritten, both pad bytes untouched.
    assert_eq!(bitmap.pixels, [0xFF, 0xFF, 0xFF, 0x5A, 0xFF, 0xFF, 0xFF, 0x5B]);
}

// ── imgref conversions ───────────────────────────────────────────────

#[cfg(feature = "imgref")]
#[test]
fn imgvec_rows_run_top_down() {
    let bitmap = painted(2, 2);
    let img = bitmap.to_imgvec();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 2);

    // File row 1 is the displayed top row.
    let rows: Vec<&[BGR8]> = img.rows().collect();
    assert_eq!(rows[0], &[BGR8 { b: 6, g: 7, r: 8 }, BGR8 { b: 9, g: 10, r: 11 }]);
    assert_eq!(rows[1], &[BGR8 { b: 0, g: 1, r: 2 }, BGR8 { b: 3, g: 4, r: 5 }]);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_roundtrip_rebuilds_the_bitmap() {
    let bitmap = painted(3, 2);
    let back = Bitmap::from_imgref(bitmap.to_imgvec().as_ref()).unwrap();
    assert_eq!(back, bitmap);
    assert_eq!(
        encode(&back, Unstoppable).unwrap(),
        encode(&bitmap, Unstoppable).unwrap()
    );
}

#[cfg(feature = "imgref")]
#[test]
fn from_imgref_stores_rows_bottom_up() {
    let top = BGR8 { b: 1, g: 2, r: 3 };
    let bottom = BGR8 { b: 4, g: 5, r: 6 };
    let img = imgref::ImgVec::new(vec![top, bottom], 1, 2);

    let bitmap = Bitmap::from_imgref(img.as_ref()).unwrap();
    assert_eq!(bitmap.width(), 1);
    assert_eq!(bitmap.height(), 2);
    assert_eq!(&bitmap.row(0).unwrap()[..3], &[4, 5, 6]); // bottom scanline first
    assert_eq!(&bitmap.row(1).unwrap()[..3], &[1, 2, 3]);
}

#[cfg(feature = "imgref")]
#[test]
fn zero_size_bitmaps_convert_both_ways() {
    for (w, h) in [(0u32, 0u32), (0, 3), (2, 0)] {
        let bitmap = Bitmap::new(w, h).unwrap();
        let img = bitmap.to_imgvec();
        assert_eq!(img.width(), w as usize, "{w}x{h}");
        assert_eq!(img.height(), h as usize, "{w}x{h}");
        assert_eq!(img.rows().count(), 0, "{w}x{h}");

        let back = Bitmap::from_imgref(img.as_ref()).unwrap();
        assert_eq!(back, bitmap, "{w}x{h}");
    }

    // Decoded empty files convert the same way.
    let file = encode(&Bitmap::new(0, 0).unwrap(), Unstoppable).unwrap();
    let img = decode(&file, Unstoppable).unwrap().to_imgvec();
    assert_eq!((img.width(), img.height()), (0, 0));
}
