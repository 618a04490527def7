//! Composing validators at the type level.
//!
//! Run: `cargo run -p vouch-validator --example combinators`

use vouch_validator::combinators::{And, Not, Or};
use vouch_validator::validators::{Even, Negative, NonZero, Positive};
use vouch_validator::{Required, ValidationError, Validator, validate_with, validator};

validator! {
    /// Accepts numbers not above 100.
    Percent for i64;
    rule(input) { *input <= 100 }
    error(input) { ValidationError::new("percent", format!("{input} is above 100")) }
}

type EvenOrNegative = Or<Even, Negative>;
type SmallPositive = And<Positive, Percent>;
type NonPositiveNonZero = And<Not<Positive>, NonZero>;

fn main() {
    for value in [4_i64, -3, 7] {
        println!("Or<Even, Negative> on {value}: {}", status(&validate_with::<EvenOrNegative, _>(&value)));
    }

    for value in [50_i64, 0, 120] {
        println!("And<Positive, Percent> on {value}: {}", status(&validate_with::<SmallPositive, _>(&value)));
    }

    let checker = NonPositiveNonZero::default();
    println!("And<Not<Positive>, NonZero> on -1: {}", status(&checker.validate(&-1_i64)));
    println!("And<Not<Positive>, NonZero> on 0: {}", status(&checker.validate(&0_i64)));

    // The same types parameterize containers.
    let mut share: Required<i64, SmallPositive> = Required::default();
    match share.parse(250) {
        Ok(()) => println!("share = {}", share.get()),
        Err(e) => println!("share rejected: {e}"),
    }
    share.parse(25).ok();
    println!("share = {}", share.get());
}

fn status(result: &Result<(), ValidationError>) -> String {
    match result {
        Ok(()) => "ok".to_owned(),
        Err(e) => format!("error: {e}"),
    }
}
