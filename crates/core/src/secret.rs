//! Per-title reveal state machine.
//!
//! A [`SecretTitle`] owns one hidden string and tracks which of its code
//! points have been disclosed. Reveals always write lowercase characters
//! into the mask; the moment the mask fills up, it is upgraded in one shot
//! to the original-cased title so a completed board displays exactly.

use std::collections::HashSet;

use tui_reveal_types::{RevealOutcome, HIDDEN_GLYPH};

/// Simple one-to-one case folding.
///
/// Where `char::to_lowercase` expands to multiple code points (e.g. 'İ'),
/// the first code point of the mapping stands in for the whole thing.
pub fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// One hidden title and its reveal progress.
#[derive(Debug, Clone)]
pub struct SecretTitle {
    /// Original-cased title, immutable after construction.
    full: Vec<char>,
    /// One slot per code point of `full`; `None` is undisclosed.
    mask: Vec<Option<char>>,
    /// Lowercase code points confirmed present and already disclosed.
    /// Only ever contains code points that occur in the title.
    revealed: HashSet<char>,
}

impl SecretTitle {
    /// Create a fresh secret with nothing disclosed.
    ///
    /// With `reveal_spaces` set, space slots start out disclosed so the
    /// player can see the word boundaries of the title.
    pub fn new(title: &str, reveal_spaces: bool) -> Self {
        let full: Vec<char> = title.chars().collect();
        let mask = full
            .iter()
            .map(|&c| (reveal_spaces && c == ' ').then_some(' '))
            .collect();
        Self {
            full,
            mask,
            revealed: HashSet::new(),
        }
    }

    /// Reveal one letter, disclosing every occurrence at once.
    ///
    /// The letter is case-folded first; disclosure writes the lowercase
    /// form into the mask. Mask completeness is the authoritative
    /// already-complete gate: `revealed` can be stale after
    /// [`force_complete`](Self::force_complete) and is never consulted
    /// for completeness.
    pub fn reveal(&mut self, letter: char) -> RevealOutcome {
        let letter = fold(letter);

        if self.is_complete() {
            return RevealOutcome::AlreadyComplete;
        }
        if self.revealed.contains(&letter) {
            return RevealOutcome::AlreadyRevealed;
        }
        if !self.full.iter().any(|&c| fold(c) == letter) {
            return RevealOutcome::NotInTitle;
        }

        self.revealed.insert(letter);
        for (slot, &c) in self.mask.iter_mut().zip(&self.full) {
            if fold(c) == letter {
                *slot = Some(letter);
            }
        }
        if self.mask.iter().all(Option::is_some) {
            self.upgrade_casing();
        }
        RevealOutcome::Success
    }

    /// Unconditionally disclose the whole title in its original casing.
    ///
    /// `revealed` is left untouched; since completeness gating in
    /// [`reveal`](Self::reveal) is mask-based, the stale set is harmless.
    pub fn force_complete(&mut self) {
        self.upgrade_casing();
    }

    /// Whether every slot of the mask is disclosed.
    pub fn is_complete(&self) -> bool {
        self.mask.iter().all(Option::is_some)
    }

    /// Current display form: disclosed characters plus placeholder glyphs.
    ///
    /// Once complete this is exactly the original-cased title, because both
    /// mutation paths upgrade the mask casing the moment the last slot fills.
    pub fn rendered(&self) -> String {
        self.mask.iter().map(|slot| slot.unwrap_or(HIDDEN_GLYPH)).collect()
    }

    /// The full title in its original casing.
    pub fn title(&self) -> String {
        self.full.iter().collect()
    }

    /// Number of code points in the title (and therefore in the mask).
    pub fn len(&self) -> usize {
        self.full.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    fn upgrade_casing(&mut self) {
        self.mask = self.full.iter().copied().map(Some).collect();
    }
}
