use std::collections::BTreeMap;

use vouch_validator::prelude::*;

include!("models.rs");
include!("models.schema.rs");

fn member(name: &str, age: Option<u8>) -> Member {
    let mut member = Member::default();
    member.name.load(Some(name.to_owned()));
    member.age.load(age);
    member
}

fn roster() -> Roster {
    let mut roster = Roster::default();
    roster.members = vec![member("ada", Some(36)), member("bob", None)];
    roster.window = Window { low: 1, high: 2 };
    roster.pair.1.load(Some(4));
    roster
}

/// Runs the generated code and the Walker on two copies of the same tree and
/// returns their common outcome.
fn outcome(edit: impl Fn(&mut Roster)) -> Result<(), String> {
    let mut generated = roster();
    let mut walked = roster();
    edit(&mut generated);
    edit(&mut walked);

    let by_generated = generated.type_validate().map_err(|e| e.to_string());
    let by_walker = validate(&mut walked).map_err(|e| e.to_string());
    assert_eq!(by_generated, by_walker);
    by_generated
}

fn main() {
    assert_eq!(outcome(|_| {}), Ok(()));

    let mut valid = roster();
    valid.type_validate().unwrap();
    assert_eq!(valid.members[0].name.get(), "ada");
    assert!(!valid.members[0].draft.is_validated());

    assert_eq!(
        outcome(|r| r.members[1].name.load(Some(String::new()))),
        Err(".members[1].Name: empty value".to_owned())
    );
    assert_eq!(
        outcome(|r| {
            r.by_team.insert("red".to_owned(), vec![member("cy", None)]);
            r.by_team.insert("blue".to_owned(), vec![member("di", Some(0))]);
        }),
        Err(".by_team[blue][0].age: zero value".to_owned())
    );
    assert_eq!(
        outcome(|r| r.lead = Some(Box::new(Member::default()))),
        Err(".lead.Name: missing required value".to_owned())
    );
    assert_eq!(
        outcome(|r| r.pair.1.load(Some(3))),
        Err(".pair.1: odd value".to_owned())
    );
    assert_eq!(
        outcome(|r| r.window = Window { low: 3, high: 2 }),
        Err(".window: low above high".to_owned())
    );

    // Type failures anywhere suppress every cross-field hook.
    assert_eq!(
        outcome(|r| {
            r.window = Window { low: 3, high: 2 };
            r.members[0].name.load(None);
        }),
        Err(".members[0].Name: missing required value".to_owned())
    );

    let mut crossed = roster();
    crossed.window = Window { low: 3, high: 2 };
    let err = crossed.type_validate().unwrap_err();
    assert_eq!(err.kind, ErrorKind::CrossField);
}
