use hatch_core::{ObjectRef, Readonly, UncheckedDowngrade, as_mut_without_validation};

const FRESH: UncheckedDowngrade = UncheckedDowngrade::attest("object created in main");

fn main() {
    let ro = Readonly::new(ObjectRef::new("Counter"));
    let obj: ObjectRef = as_mut_without_validation(ro, FRESH);
    obj.set("n", 1.into());
}
