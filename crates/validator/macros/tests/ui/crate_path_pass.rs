//! `#[vouch(crate = "...")]` when the runtime crate lives under another path.

mod reexport {
    pub use vouch_validator as runtime;
}

use reexport::runtime::{self, optional};

#[derive(runtime::Reflect, Default)]
#[vouch(crate = "crate::reexport::runtime")]
pub struct Settings {
    pub retries: optional::Positive<u8>,
}

fn main() {
    let mut settings = Settings::default();
    runtime::validate(&mut settings).unwrap();
}
