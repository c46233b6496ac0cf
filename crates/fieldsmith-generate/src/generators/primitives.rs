use chrono::{Duration, NaiveDate};
use rand::distr::Alphanumeric;
use rand::{Rng, RngCore};

/// Random string of mixed-case ASCII letters and digits.
pub fn random_alphanumeric(rng: &mut dyn RngCore, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

pub fn random_letter(rng: &mut dyn RngCore, upper: bool) -> char {
    let base = if upper { b'A' } else { b'a' };
    char::from(base + rng.random_range(0..26_u8))
}

pub fn random_digit(rng: &mut dyn RngCore) -> char {
    char::from(b'0' + rng.random_range(0..10_u8))
}

/// `+1` followed by ten random digits.
pub fn random_phone(rng: &mut dyn RngCore) -> String {
    let mut value = String::from("+1");
    for _ in 0..10 {
        value.push(random_digit(rng));
    }
    value
}

/// Random calendar date within the year ending at `today`.
pub fn random_past_date(rng: &mut dyn RngCore, today: NaiveDate) -> NaiveDate {
    let offset = rng.random_range(0..=365_i64);
    today - Duration::days(offset)
}
