use crate::{from_str, to_string, to_writer, ByteArray, IntArray, List, LongArray, Value};

use super::compound;

#[test]
fn numbers_carry_suffixes() {
    assert_eq!("-5b", to_string(&Value::Byte(-5)));
    assert_eq!("300s", to_string(&Value::Short(300)));
    assert_eq!("7", to_string(&Value::Int(7)));
    assert_eq!("-9l", to_string(&Value::Long(-9)));
    assert_eq!("0.5f", to_string(&Value::Float(0.5)));
    assert_eq!("1.0d", to_string(&Value::Double(1.0)));
    assert_eq!("1e20d", to_string(&Value::Double(1e20)));
}

#[test]
fn strings_are_always_quoted() {
    assert_eq!("\"hello\"", to_string(&Value::String("hello".into())));
    assert_eq!("\"\"", to_string(&Value::String(String::new())));
    assert_eq!(
        r#""a\"b\\c""#,
        to_string(&Value::String("a\"b\\c".into()))
    );
    assert_eq!("\"it's\"", to_string(&Value::String("it's".into())));
}

#[test]
fn typed_arrays() {
    assert_eq!(
        "[B; 1,-2,3]",
        to_string(&Value::ByteArray(ByteArray::new(vec![1, -2, 3])))
    );
    assert_eq!(
        "[I; 1,2,3,4]",
        to_string(&Value::IntArray(IntArray::new(vec![1, 2, 3, 4])))
    );
    assert_eq!(
        "[L; 9223372036854775807]",
        to_string(&Value::LongArray(LongArray::new(vec![i64::MAX])))
    );
    assert_eq!("[B; ]", to_string(&Value::ByteArray(ByteArray::default())));
}

#[test]
fn lists() {
    assert_eq!("[]", to_string(&Value::List(List::default())));
    let list = Value::List(List::new(vec![
        Value::String("a".into()),
        Value::List(List::new(vec![Value::Byte(1)])),
    ]));
    assert_eq!(r#"["a",[1b]]"#, to_string(&list));
}

#[test]
fn compounds_keep_order_and_quote_keys() {
    assert_eq!("{}", to_string(&compound(vec![])));

    let v = compound(vec![
        ("z", Value::Int(1)),
        ("a", Value::Double(2.5)),
        ("with \"quote\"", Value::Long(3)),
    ]);
    assert_eq!(r#"{"z":1,"a":2.5d,"with \"quote\"":3l}"#, to_string(&v));
}

#[test]
fn parsed_input_is_normalised() {
    let v = from_str("{ name : hello , f : 1.5f , d : 2.0 , l : [I; -1 , 2i] }").unwrap();
    assert_eq!(
        r#"{"name":"hello","f":1.5f,"d":2.0d,"l":[I; -1,2]}"#,
        to_string(&v)
    );
}

#[test]
fn non_finite_floats_are_still_written() {
    assert_eq!("NaNf", to_string(&Value::Float(f32::NAN)));
    assert_eq!("-infd", to_string(&Value::Double(f64::NEG_INFINITY)));
}

#[test]
fn display_and_writer_match_to_string() {
    let v = from_str("{a:[B; 1],b:[x,y]}").unwrap();
    let expected = r#"{"a":[B; 1],"b":["x","y"]}"#;

    assert_eq!(expected, to_string(&v));
    assert_eq!(expected, format!("{}", v));

    let mut out = Vec::new();
    to_writer(&mut out, &v).unwrap();
    assert_eq!(expected.as_bytes(), out.as_slice());
}
