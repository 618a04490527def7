//! `validate` and `type_validate` container attributes.

use vouch_validator::{
    ErrorKind, Reflect, TypeValidate, Validate, ValidationError, required, validate,
};

#[derive(Reflect, Default)]
#[vouch(validate)]
pub struct Window {
    pub min: required::Any<u32>,
    pub max: required::Any<u32>,
}

impl Validate for Window {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.min.get() > self.max.get() {
            return Err(ValidationError::new("window", "min exceeds max"));
        }
        Ok(())
    }
}

#[derive(Reflect, Default)]
#[vouch(type_validate)]
pub struct Port {
    pub number: u16,
}

impl TypeValidate for Port {
    fn type_validate(&mut self) -> Result<(), ValidationError> {
        if self.number == 0 {
            return Err(ValidationError::new("port", "port zero"));
        }
        Ok(())
    }
}

#[derive(Reflect, Default)]
pub struct Listener {
    pub window: Window,
    pub port: Port,
}

fn main() {
    let mut listener = Listener::default();
    listener.window.min.parse(5u32).unwrap();
    listener.window.max.parse(1u32).unwrap();
    listener.port.number = 80;

    let err = validate(&mut listener).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CrossField);
    assert_eq!(err.path().to_string(), ".window");

    listener.port.number = 0;
    let err = validate(&mut listener).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeValidation);
    assert_eq!(err.to_string(), ".port: port zero");
}
