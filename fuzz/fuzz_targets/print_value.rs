#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtstr::{from_str, to_string, Value};

// Non-finite floats have no sNBT spelling.
fn all_finite(v: &Value) -> bool {
    match v {
        Value::Float(f) => f.is_finite(),
        Value::Double(f) => f.is_finite(),
        Value::List(l) => l.iter().all(all_finite),
        Value::Compound(c) => c.values().all(all_finite),
        _ => true,
    }
}

fuzz_target!(|v: Value| {
    if !all_finite(&v) {
        return;
    }

    let text = to_string(&v);
    let reparsed = from_str(&text).unwrap();
    assert_eq!(text, to_string(&reparsed));
});
