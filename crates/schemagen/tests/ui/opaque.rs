// Declarations without `#[derive(Reflect)]`: `opaque.schema.rs` supplies an
// opaque `Reflect` impl next to `TypeValidate`.

pub struct Ticket {
    pub code: required::Alphanumeric<String>,
    pub seats: Vec<optional::Even<u32>>,
}
