use vouch_validator::prelude::*;

include!("opaque.rs");
include!("opaque.schema.rs");

fn ticket(code: &str, seats: &[Option<u32>]) -> Ticket {
    let mut ticket = Ticket {
        code: required::Alphanumeric::new(),
        seats: Vec::new(),
    };
    ticket.code.load(Some(code.to_owned()));
    for seat in seats {
        let mut slot = optional::Even::new();
        slot.load(*seat);
        ticket.seats.push(slot);
    }
    ticket
}

fn main() {
    let mut tickets = vec![
        ticket("A1", &[Some(2), None]),
        ticket("B2", &[Some(4), Some(3)]),
    ];

    let err = validate(&mut tickets).unwrap_err();
    assert_eq!(err.to_string(), "[1].seats[1]: odd value");

    tickets[1].seats.pop();
    validate(&mut tickets).unwrap();
    assert_eq!(tickets[0].code.get(), "A1");
    assert_eq!(tickets[1].seats[0].get(), Some(&4));
}
