#![no_main]

use arbitrary::Arbitrary;
use imagetable::PixelGrid;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).clamp(1, 64);
    let height = (input.height as usize).clamp(1, 64);

    let expected_size = width * height * 3;
    if input.pixels.len() < expected_size {
        return;
    }

    let grid = match PixelGrid::from_rgb(&input.pixels[..expected_size], width, height) {
        Ok(grid) => grid,
        Err(_) => return,
    };

    let compressed = grid.compress();

    // Expanding the runs must reproduce the original grid exactly
    let expanded = compressed
        .expand()
        .expect("compressed grid must stay rectangular");
    assert_eq!(expanded, grid);

    // Runs must be maximal: no two neighbors share a color
    for row in compressed.rows() {
        for pair in row.windows(2) {
            assert_ne!(pair[0].color, pair[1].color);
        }
    }
});
