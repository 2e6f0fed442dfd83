#![no_main]

use arbitrary::Arbitrary;
use imagetable::{html_encode, EncodeOptions, FrequencySource};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
    threshold: u8,
    count_runs: bool,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).clamp(1, 128);
    let height = (input.height as usize).clamp(1, 128);

    // Ensure we have enough pixels (RGB = 3 bytes per pixel)
    let expected_size = width * height * 3;
    if input.pixels.len() < expected_size {
        return;
    }

    let pixels = &input.pixels[..expected_size];
    let opts = EncodeOptions {
        container: "image".to_string(),
        threshold: input.threshold as usize,
        frequency: if input.count_runs {
            FrequencySource::Runs
        } else {
            FrequencySource::Pixels
        },
    };

    // The encoder should never panic
    let _ = html_encode(pixels, width, height, &opts);
});
