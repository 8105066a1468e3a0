#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // The first byte occasionally lets the halves differ in length.
    let body = &data[1..];
    let half = body.len() / 2;
    let seed = &body[..half];
    let input = if data[0] % 4 == 0 {
        &body[half..]
    } else {
        &body[half..half * 2]
    };

    match deltarow::encode(input, seed) {
        Ok(delta) => {
            assert_eq!(input.len(), seed.len());
            if input == seed {
                assert!(delta.is_empty());
            }
        }
        Err(_) => assert_ne!(input.len(), seed.len()),
    }
});
