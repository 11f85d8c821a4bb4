#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtstr::{from_str, to_string};

fuzz_target!(|data: &str| {
    if let Ok(v) = from_str(data) {
        let text = to_string(&v);
        let reparsed = from_str(&text).unwrap();
        assert_eq!(v, reparsed);
    }
});
