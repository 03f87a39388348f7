use hatch_core::{Readonly, Value, as_mut};

fn main() {
    let ro: Readonly<Vec<Value>> = Readonly::new(vec![Value::Int(1)]);
    let mut v: Vec<Value> = as_mut(ro).unwrap();
    v.push(Value::Int(2));
    assert_eq!(v.len(), 2);
}
