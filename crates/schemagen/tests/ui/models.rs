// Declarations validated both by the Walker (through `#[derive(Reflect)]`)
// and by code generated from this file into `models.schema.rs`.

#[derive(Debug, Default, Reflect)]
pub struct Member {
    #[vouch(rename = "Name")]
    pub name: required::NonEmpty<String>,
    pub age: optional::Positive<u8>,
    pub note: String,
    #[vouch(skip)]
    pub draft: required::NonEmpty<String>,
}

#[derive(Debug, Default, Reflect)]
#[vouch(validate)]
pub struct Window {
    pub low: u32,
    pub high: u32,
}

impl Validate for Window {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.low > self.high {
            return Err(ValidationError::new("window", "low above high"));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Reflect)]
pub struct Roster {
    pub members: Vec<Member>,
    pub by_team: BTreeMap<String, Vec<Member>>,
    pub lead: Option<Box<Member>>,
    pub window: Window,
    pub pair: (u8, required::Even<u32>),
}
