#![no_main]
use libfuzzer_sys::fuzz_target;

use tagtree::{from_bytes_named, to_bytes_named};

fuzz_target!(|data: &[u8]| {
    if let Ok((name, v)) = from_bytes_named(data) {
        // Duplicate keys collapse, so compare the second encoding to the first.
        let bs = to_bytes_named(&name, &v).unwrap();
        let (name, v) = from_bytes_named(&bs).unwrap();
        assert_eq!(bs, to_bytes_named(&name, &v).unwrap());
    }
});
