//! Shapes the derive accepts: named, tuple and unit structs, enums,
//! generics, raw identifiers, `skip` and `rename`.

use std::collections::BTreeMap;

use vouch_validator::{Reflect, required, validate};

#[derive(Reflect, Default)]
pub struct Account {
    pub r#type: required::NonEmpty<String>,
    #[vouch(rename = "Email")]
    pub email: required::Ascii<String>,
    #[vouch(skip)]
    pub scratch: Vec<u8>,
    pub labels: BTreeMap<String, required::Printable<String>>,
}

#[derive(Reflect)]
pub struct Pair(pub required::Positive<i32>, #[vouch(skip)] pub u8, pub required::Odd<i32>);

#[derive(Reflect)]
pub struct Marker;

#[derive(Reflect)]
pub enum Shape {
    Circle { radius: required::Positive<f64> },
    Square(required::Positive<f64>),
    Empty,
}

#[derive(Reflect)]
pub enum Never {}

#[derive(Reflect)]
pub struct Wrapper<T> {
    pub inner: T,
}

fn main() {
    let mut account = Account::default();
    account.r#type.parse("admin").unwrap();
    account.email.parse("a@b.c").unwrap();
    validate(&mut account).unwrap();

    let mut bad = Account::default();
    bad.r#type.parse("user").unwrap();
    let err = validate(&mut bad).unwrap_err();
    assert_eq!(err.path().to_string(), ".Email");

    let mut pair = Pair(required::Positive::try_new(1).unwrap(), 0, required::Odd::new());
    let err = validate(&mut pair).unwrap_err();
    assert_eq!(err.path().to_string(), ".2");

    validate(&mut Marker).unwrap();

    let mut shape = Shape::Square(required::Positive::new());
    let err = validate(&mut shape).unwrap_err();
    assert_eq!(err.path().to_string(), ".0");
    validate(&mut Shape::Empty).unwrap();

    let mut wrapped = Wrapper { inner: vec![required::Odd::<i32>::new()] };
    let err = validate(&mut wrapped).unwrap_err();
    assert_eq!(err.path().to_string(), ".inner[0]");
}
