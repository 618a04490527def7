//! Character-class validators for text.

use super::constraint::Text;
use super::general::NonEmpty;
use crate::ValidationError;
use crate::combinators::And;

fn is_printable(c: char) -> bool {
    !c.is_control() && (c == ' ' || !c.is_whitespace())
}

validator! {
    /// Accepts ASCII-only strings.
    pub Ascii for<T: Text> T;
    rule(input) { input.as_ref().is_ascii() }
    error(input) { ValidationError::new("ascii", "string contains non-ascii character") }
}

validator! {
    /// Accepts strings made only of printable characters. The plain space is
    /// printable; other whitespace and control characters are not.
    pub Printable for<T: Text> T;
    rule(input) { input.as_ref().chars().all(is_printable) }
    error(input) { ValidationError::new("printable", "string contains unprintable character") }
}

validator! {
    /// Accepts strings made only of alphanumeric characters.
    pub Alphanumeric for<T: Text> T;
    rule(input) { input.as_ref().chars().all(char::is_alphanumeric) }
    error(input) { ValidationError::new("alphanumeric", "string contains non-alphanumeric character") }
}

/// [`NonEmpty`] and [`Printable`].
pub type NonEmptyPrintable = And<NonEmpty, Printable>;
