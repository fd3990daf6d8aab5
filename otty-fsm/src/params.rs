//! Decimal parameter accumulators.
//!
//! Escape sequences carry numeric arguments that arrive one digit at a time:
//! `ESC [ 1 2 ; 4 0 H`. The [`Params`] stack keeps each argument as the digit
//! string seen so far and only turns it into a number when a handler pops
//! it. Parameters are popped in reverse order of declaration.

/// Largest value a parameter can take; longer digit runs saturate here.
pub const MAX_PARAM: u16 = u16::MAX;

/// Parameters kept per sequence; further ones are ignored.
pub const MAX_PARAMS: usize = 256;

/// Significant digits kept per accumulator. Any longer run already exceeds
/// [`MAX_PARAM`].
const MAX_DIGITS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Accumulator {
    digits: String,
    saturated: bool,
}

impl Accumulator {
    fn push(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit(), "non-digit {digit:?}");

        if self.saturated {
            return;
        }

        // Leading zeros carry no weight.
        if self.digits == "0" {
            self.digits.clear();
        }

        if self.digits.len() < MAX_DIGITS {
            self.digits.push(digit);
        } else {
            self.saturated = true;
        }
    }

    fn value(&self) -> u16 {
        if self.saturated {
            return MAX_PARAM;
        }

        let value = self
            .digits
            .bytes()
            .filter(u8::is_ascii_digit)
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));

        u16::try_from(value).unwrap_or(MAX_PARAM)
    }
}

/// Ordered stack of in-progress numeric parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    items: Vec<Accumulator>,
    full: bool,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new parameter whose first digit is `digit`.
    ///
    /// Once [`MAX_PARAMS`] parameters are held the stack is full: the new
    /// parameter and every digit that follows it are dropped until
    /// [`Params::clear`].
    pub fn start(&mut self, digit: char) {
        if self.items.len() >= MAX_PARAMS {
            self.full = true;
            return;
        }

        let mut accumulator = Accumulator::default();
        accumulator.push(digit);
        self.items.push(accumulator);
    }

    /// Appends `digit` to the parameter on top of the stack.
    pub fn extend(&mut self, digit: char) {
        if self.full {
            return;
        }

        match self.items.last_mut() {
            Some(accumulator) => accumulator.push(digit),
            None => self.start(digit),
        }
    }

    /// Removes the most recently declared parameter and parses it.
    pub fn pop(&mut self) -> Option<u16> {
        self.items.pop().map(|accumulator| accumulator.value())
    }

    /// Digits collected so far for the parameter on top of the stack.
    pub fn peek_digits(&self) -> Option<&str> {
        self.items.last().map(|accumulator| accumulator.digits.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether parameters were dropped since the last clear.
    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.full = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Params {
        let mut params = Params::new();
        for group in input.split(';') {
            let mut digits = group.chars();
            if let Some(first) = digits.next() {
                params.start(first);
            }
            for digit in digits {
                params.extend(digit);
            }
        }
        params
    }

    #[test]
    fn pops_last_declared_first() {
        let mut params = collect("5;10");

        assert_eq!(params.len(), 2);
        assert_eq!(params.pop(), Some(10));
        assert_eq!(params.pop(), Some(5));
        assert_eq!(params.pop(), None);
    }

    #[test]
    fn digits_stay_unparsed_until_pop() {
        let params = collect("042");

        assert_eq!(params.peek_digits(), Some("42"));
    }

    #[test]
    fn zero_is_a_value() {
        let mut params = collect("0");

        assert_eq!(params.pop(), Some(0));
    }

    #[test]
    fn leading_zeros_do_not_saturate() {
        let mut params = collect("0000000000000007");

        assert_eq!(params.pop(), Some(7));
    }

    #[test]
    fn long_runs_saturate() {
        let mut params = collect("65536");
        assert_eq!(params.pop(), Some(MAX_PARAM));

        let mut params = collect("123456789012345678901234567890");
        assert_eq!(params.pop(), Some(MAX_PARAM));

        let mut params = collect("65535");
        assert_eq!(params.pop(), Some(65535));
    }

    #[test]
    fn extend_without_start_begins_a_parameter() {
        let mut params = Params::new();
        params.extend('3');

        assert_eq!(params.pop(), Some(3));
    }

    #[test]
    fn clear_drops_everything() {
        let mut params = collect("1;2;3");
        params.clear();

        assert!(params.is_empty());
    }

    #[test]
    fn parameters_beyond_the_limit_are_ignored() {
        let input = vec!["9"; MAX_PARAMS + 1000].join(";") + ";123";
        let mut params = collect(&input);

        assert_eq!(params.len(), MAX_PARAMS);
        assert!(params.is_full());
        // Digits of dropped parameters must not leak into the last kept one.
        assert_eq!(params.pop(), Some(9));

        params.clear();
        assert!(!params.is_full());
        params.start('4');
        assert_eq!(params.pop(), Some(4));
    }
}
