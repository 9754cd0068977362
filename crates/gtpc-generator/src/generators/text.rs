//! Pseudo-English comment text.
//!
//! Sentences are built from the lexicon with these templates:
//!
//! ```text
//! sentence            := noun-phrase verb-phrase terminator
//!                      | noun-phrase verb-phrase prep-phrase terminator
//!                      | noun-phrase verb-phrase noun-phrase terminator
//!                      | noun-phrase prep-phrase verb-phrase noun-phrase terminator
//!                      | noun-phrase prep-phrase verb-phrase prep-phrase terminator
//! noun-phrase         := noun | adjective noun | adjective, adjective noun
//!                      | adverb adjective noun
//! verb-phrase         := verb | auxiliary verb | verb adverb | auxiliary verb adverb
//! prep-phrase         := preposition "the" noun-phrase
//! ```
//!
//! [`generate_text`] draws a target length and always returns exactly that
//! many bytes: whole sentences are appended while they fit, and the sentence
//! that would overflow is truncated to fill the remainder. The cut is made
//! at a byte count, not a word boundary, so the text may end mid-word or on
//! the separator before the next word, leaving a trailing `' '` or `','`.

use super::numeric::uniform_int;
use super::{pick, raw_index};
use gtpc_core::lexicon::{
    ADJECTIVES, ADVERBS, AUXILIARIES, NOUNS, PREPOSITIONS, TERMINATORS, VERBS,
};
use rand::RngCore;

fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

fn noun_phrase<R: RngCore + ?Sized>(rng: &mut R, out: &mut String) {
    match raw_index(rng, 4) {
        0 => {}
        1 => push_word(out, *pick(rng, ADJECTIVES)),
        2 => {
            push_word(out, *pick(rng, ADJECTIVES));
            out.push(',');
            push_word(out, *pick(rng, ADJECTIVES));
        }
        _ => {
            push_word(out, *pick(rng, ADVERBS));
            push_word(out, *pick(rng, ADJECTIVES));
        }
    }
    push_word(out, *pick(rng, NOUNS));
}

fn verb_phrase<R: RngCore + ?Sized>(rng: &mut R, out: &mut String) {
    let form = raw_index(rng, 4);
    if form % 2 == 1 {
        push_word(out, *pick(rng, AUXILIARIES));
    }
    push_word(out, *pick(rng, VERBS));
    if form >= 2 {
        push_word(out, *pick(rng, ADVERBS));
    }
}

fn prepositional_phrase<R: RngCore + ?Sized>(rng: &mut R, out: &mut String) {
    push_word(out, *pick(rng, PREPOSITIONS));
    push_word(out, "the");
    noun_phrase(rng, out);
}

/// Generate one sentence, terminator included.
pub fn generate_sentence<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut out = String::new();
    noun_phrase(rng, &mut out);
    match raw_index(rng, 5) {
        0 => verb_phrase(rng, &mut out),
        1 => {
            verb_phrase(rng, &mut out);
            prepositional_phrase(rng, &mut out);
        }
        2 => {
            verb_phrase(rng, &mut out);
            noun_phrase(rng, &mut out);
        }
        3 => {
            prepositional_phrase(rng, &mut out);
            verb_phrase(rng, &mut out);
            noun_phrase(rng, &mut out);
        }
        _ => {
            prepositional_phrase(rng, &mut out);
            verb_phrase(rng, &mut out);
            prepositional_phrase(rng, &mut out);
        }
    }
    out.push_str(*pick(rng, TERMINATORS));
    out
}

/// Generate text whose length is drawn from `min..=max`.
pub fn generate_text<R: RngCore + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
    let target = uniform_int(rng, min as u32, max as u32) as usize;
    let mut out = String::with_capacity(target);
    while out.len() < target {
        let separator = usize::from(!out.is_empty());
        let sentence = generate_sentence(rng);
        let remaining = target - out.len();
        if separator + sentence.len() <= remaining {
            if separator == 1 {
                out.push(' ');
            }
            out.push_str(&sentence);
        } else {
            // Lexicon is ASCII, so any byte offset is a char boundary.
            if separator == 1 {
                out.push(' ');
            }
            out.push_str(&sentence[..remaining - separator]);
        }
    }
    out
}
