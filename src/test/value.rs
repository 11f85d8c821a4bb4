use crate::{from_str, ByteArray, Compound, IntArray, List, LongArray, Native, Tag, Value};

#[test]
fn tag_ids_match_binary_nbt() {
    for id in 0..=12u8 {
        let tag = Tag::try_from(id).unwrap();
        assert_eq!(id, u8::from(tag));
    }
    assert_eq!(Tag::Compound, Tag::try_from(10).unwrap());
    assert!(Tag::try_from(13).is_err());
    assert!(Tag::try_from(u8::MAX).is_err());
}

#[test]
fn value_tags() {
    let cases = [
        (Value::Byte(0), Tag::Byte),
        (Value::Short(0), Tag::Short),
        (Value::Int(0), Tag::Int),
        (Value::Long(0), Tag::Long),
        (Value::Float(0.0), Tag::Float),
        (Value::Double(0.0), Tag::Double),
        (Value::String(String::new()), Tag::String),
        (Value::ByteArray(ByteArray::default()), Tag::ByteArray),
        (Value::IntArray(IntArray::default()), Tag::IntArray),
        (Value::LongArray(LongArray::default()), Tag::LongArray),
        (Value::List(List::default()), Tag::List),
        (Value::Compound(Compound::new()), Tag::Compound),
    ];

    for (value, tag) in cases {
        assert_eq!(tag, value.tag());
    }
}

#[test]
fn list_tags() {
    assert_eq!(Tag::Short, List::new(vec![Value::Short(1)]).tag());
    assert_eq!(Tag::End, List::new(vec![]).tag());

    let empty_compounds = List::with_tag(Tag::Compound, vec![]);
    assert_eq!(Tag::Compound, empty_compounds.tag());
    assert_ne!(List::default(), empty_compounds);

    let collected: List = vec![Value::from("a"), Value::from(1)].into_iter().collect();
    assert_eq!(Tag::String, collected.tag());
    assert_eq!(2, collected.into_inner().len());
}

#[test]
fn from_impls() {
    assert_eq!(Value::Byte(1), Value::from(true));
    assert_eq!(Value::Byte(3), Value::from(3i8));
    assert_eq!(Value::Short(3), Value::from(3i16));
    assert_eq!(Value::Int(3), Value::from(3i32));
    assert_eq!(Value::Long(3), Value::from(3i64));
    assert_eq!(Value::Float(0.5), Value::from(0.5f32));
    assert_eq!(Value::Double(0.5), Value::from(0.5f64));
    assert_eq!(Value::String("s".into()), Value::from("s"));
    assert_eq!(
        Value::IntArray(IntArray::new(vec![1, 2])),
        Value::from(IntArray::from(vec![1, 2]))
    );
    assert_eq!(
        from_str("[1,2]").unwrap(),
        Value::from(vec![Value::from(1), Value::from(2)])
    );
}

#[test]
fn compound_equality_respects_order() {
    let ab = from_str("{a:1,b:2}").unwrap();
    assert_eq!(ab, from_str("{ a: 1, b: 2 }").unwrap());
    assert_ne!(ab, from_str("{b:2,a:1}").unwrap());
    assert_ne!(ab, from_str("{a:1,b:2,c:3}").unwrap());
    assert_ne!(ab, from_str("{a:1,b:3}").unwrap());

    let nested = from_str("[{x:{p:1,q:2}}]").unwrap();
    assert_ne!(nested, from_str("[{x:{q:2,p:1}}]").unwrap());
    assert_ne!(Value::Int(1), Value::Long(1));
}

#[test]
fn accessors() {
    assert_eq!(Some(5), Value::Short(5).as_i64());
    assert_eq!(Some(2.5), Value::Float(2.5).as_f64());
    assert_eq!(Some("x"), Value::from("x").as_str());
    assert_eq!(None, Value::from("x").as_i64());

    let longs: LongArray = vec![1i64, 2].into_iter().collect();
    assert_eq!(vec![1, 2], longs.into_inner());
}

#[test]
fn values_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<Native>();
    assert_send_sync::<crate::Error>();

    let v = from_str("{a:[1,2,3]}").unwrap();
    let text = std::thread::spawn(move || crate::to_string(&v)).join().unwrap();
    assert_eq!(r#"{"a":[1,2,3]}"#, text);
}
