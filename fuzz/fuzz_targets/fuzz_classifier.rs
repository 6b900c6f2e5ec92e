#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String, String)| {
    let (racket, front, back) = input;
    assert_eq!(
        racketbook::classify(&racket, &front, &back),
        racketbook::classify(&racket, &back, &front)
    );
});
