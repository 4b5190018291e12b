//! Pronounceable token generation.

use super::entropy::Entropy;
use crate::models::Token;
use crate::models::params::{
    CONSONANTS, LEADING_VOWEL_THRESHOLD, PAIR_THRESHOLD, TOKEN_UNITS, VOWELS,
};

/// Generate one token.
///
/// An optional leading vowel followed by one to three units, each either a
/// consonant-vowel pair or, rarely, a lone vowel.
pub fn generate_token<E: Entropy + ?Sized>(entropy: &mut E) -> Token {
    let mut token = String::with_capacity(7);

    if entropy.unit() > LEADING_VOWEL_THRESHOLD {
        token.push(pick_letter(VOWELS, entropy));
    }

    for _ in 0..entropy.between(TOKEN_UNITS.0, TOKEN_UNITS.1) {
        if entropy.unit() > PAIR_THRESHOLD {
            token.push(pick_letter(CONSONANTS, entropy));
            token.push(pick_letter(VOWELS, entropy));
        } else {
            token.push(pick_letter(VOWELS, entropy));
        }
    }

    Token::new(token)
}

fn pick_letter<E: Entropy + ?Sized>(alphabet: &[u8], entropy: &mut E) -> char {
    char::from(alphabet[entropy.index(alphabet.len())])
}
