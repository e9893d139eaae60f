//! Free-text value generators.
//!
//! Person names, emails, company names and addresses come from the `fake`
//! crate's English locale. All of them draw from the supplied RNG, so a seeded
//! RNG yields the same strings.

use crate::error::GeneratorError;
use crate::generators::choice::chance;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// A person's display name, e.g. "Ada Lovelace".
pub fn person_name<R: Rng>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

/// A synthetic email on a reserved example domain.
pub fn email<R: Rng>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

/// A company name, e.g. "Kuhn and Sons".
pub fn company_name<R: Rng>(rng: &mut R) -> String {
    CompanyName().fake_with_rng(rng)
}

/// A single-line postal address.
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateAbbr().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{number} {street}, {city}, {state} {zip}")
}

/// Lorem text of whole sentences, at most `max_chars` characters.
///
/// Sentences are appended while they fit. If even the first sentence is too
/// long it is cut at `max_chars`.
pub fn paragraph<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }

    let mut text = String::new();
    let mut len = 0;
    loop {
        let sentence: String = Sentence(3..10).fake_with_rng(rng);
        let sentence_len = sentence.chars().count();
        let separator = usize::from(!text.is_empty());

        if len + separator + sentence_len > max_chars {
            if text.is_empty() {
                return truncate_chars(&sentence, max_chars);
            }
            return text;
        }

        if separator == 1 {
            text.push(' ');
        }
        text.push_str(&sentence);
        len += separator + sentence_len;
    }
}

/// Produce a value with probability `present`, otherwise `None`.
pub fn optional<R, T, F>(rng: &mut R, present: f64, generate: F) -> Result<Option<T>, GeneratorError>
where
    R: Rng,
    F: FnOnce(&mut R) -> T,
{
    if chance(rng, present)? {
        Ok(Some(generate(rng)))
    } else {
        Ok(None)
    }
}

/// Cut `s` to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}
