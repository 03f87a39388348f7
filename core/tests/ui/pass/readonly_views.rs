use hatch_core::shapes::{at, to_dict, to_record};
use hatch_core::{ArrayKey, Readonly, Shape, Value};

fn main() {
    let value = Value::dict([("a", Value::vec([Value::Int(1)]))]);
    let ro: Readonly<&Value> = Readonly::new(&value);
    let a: Readonly<&Value> = ro.get(&ArrayKey::from("a")).unwrap();
    assert_eq!(a.len(), Some(1));

    let shape: Readonly<Shape> = to_record(to_dict(ro).unwrap());
    let field = at(shape.as_ref(), &ArrayKey::from("a")).unwrap();
    assert_eq!(field.elements().count(), 1);
}
