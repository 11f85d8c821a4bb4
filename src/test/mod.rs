use crate::{Compound, Value};

mod ser;
mod value;

/// Build a compound value from entries, keeping their order.
fn compound(entries: Vec<(&str, Value)>) -> Value {
    Value::Compound(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect::<Compound>(),
    )
}

/// The keys of a compound value, in order.
fn keys(v: &Value) -> Vec<&str> {
    match v {
        Value::Compound(c) => c.keys().map(String::as_str).collect(),
        _ => panic!("expected compound, got {:?}", v),
    }
}
