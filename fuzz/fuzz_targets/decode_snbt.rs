#![no_main]
use libfuzzer_sys::fuzz_target;

use tagsnbt::{from_str, to_string};

fuzz_target!(|text: &str| {
    if let Ok(v) = from_str(text) {
        let written = to_string(&v).unwrap();
        assert_eq!(written, to_string(&from_str(&written).unwrap()).unwrap());
    }
});
