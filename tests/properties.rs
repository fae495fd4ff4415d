//! Property tests: candidate narrowing and letter statistics stay consistent
//! over random dictionaries and guess sequences.

use hangman_solver::core::{Letter, LetterSet, PuzzleError, Word};
use hangman_solver::solver::{RevealRule, Session, SessionConfig};
use proptest::prelude::*;

const LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Dictionary over a small alphabet so guesses overlap often, with a few
/// words of other lengths mixed in.
fn arb_corpus() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-f]{4}",
            1 => "[a-f]{2,6}",
        ],
        1..40,
    )
    .prop_map(|texts| {
        let mut words: Vec<Word> = texts.into_iter().filter_map(|t| Word::new(t).ok()).collect();
        // Guarantee at least one word of the session length
        words.push(Word::new("abcd").unwrap());
        words
    })
}

fn arb_letter() -> impl Strategy<Value = Letter> {
    (b'a'..=b'h').prop_map(|b| Letter::from_byte(b).unwrap())
}

fn arb_reveal() -> impl Strategy<Value = RevealRule> {
    prop_oneof![Just(RevealRule::Pattern), Just(RevealRule::AllOccurrences)]
}

/// A guess: the letter, whether to call it a hit, and raw positions for a hit
fn arb_guesses() -> impl Strategy<Value = Vec<(Letter, bool, Vec<usize>)>> {
    prop::collection::vec(
        (
            arb_letter(),
            any::<bool>(),
            prop::collection::vec(1..=LENGTH, 1..3),
        ),
        0..10,
    )
}

fn assert_stats_sound(session: &Session<'_>) {
    let stats = session.stats();
    let count = session.count();
    assert_eq!(stats.candidates(), count);

    let potential = session.state().potential();
    for stat in stats.entries() {
        assert!(potential.contains(stat.letter));
        assert!(stat.word_occurrences <= count);
        assert!(stat.word_occurrences <= stat.occurrences);
        match stat.probability {
            Some(p) => {
                assert!(count > 0);
                assert!((0.0..=1.0).contains(&p));
            }
            None => assert_eq!(count, 0),
        }
    }

    // Ranking is a permutation of the potential letters, best first
    let ranked = stats.ranked();
    let ranked_set: LetterSet = ranked.iter().map(|s| s.letter).collect();
    assert_eq!(ranked.len(), potential.len());
    assert_eq!(ranked_set, potential);
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.word_occurrences > b.word_occurrences
                || (a.word_occurrences == b.word_occurrences && a.letter < b.letter)
        );
    }
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// The starting set holds only words of the session length.
    #[test]
    fn initial_candidates_have_session_length(corpus in arb_corpus()) {
        let session = Session::new(&corpus, SessionConfig::new(LENGTH)).unwrap();
        for word in session.candidates().iter() {
            prop_assert_eq!(word.len(), LENGTH);
        }
        assert_stats_sound(&session);
    }

    /// Every successful guess narrows (never grows) the set and keeps it
    /// consistent with what was guessed.
    #[test]
    fn guesses_keep_candidates_consistent(
        corpus in arb_corpus(),
        reveal in arb_reveal(),
        guesses in arb_guesses(),
    ) {
        let config = SessionConfig::new(LENGTH).with_reveal(reveal);
        let mut session = Session::new(&corpus, config).unwrap();

        for (letter, hit, positions) in guesses {
            let before = session.count();
            let state_before = session.state().clone();

            let result = if hit {
                session.accept(letter, &positions)
            } else {
                session.reject(letter)
            };

            match result {
                Ok(transition) => {
                    prop_assert_eq!(transition.candidates_before, before);
                    prop_assert_eq!(transition.candidates_after, session.count());
                    prop_assert!(session.count() <= before);

                    for word in session.candidates().iter() {
                        if hit {
                            for &p in &positions {
                                prop_assert_eq!(word.letter_at(p - 1), letter);
                            }
                        } else {
                            prop_assert!(!word.has_letter(letter));
                        }
                    }
                }
                Err(_) => {
                    prop_assert_eq!(session.state(), &state_before);
                    prop_assert_eq!(session.count(), before);
                }
            }

            assert_stats_sound(&session);
        }
    }

    /// Guessing a letter a second time fails and changes nothing.
    #[test]
    fn repeated_reject_is_unknown_letter(corpus in arb_corpus(), letter in arb_letter()) {
        let mut session = Session::new(&corpus, SessionConfig::new(LENGTH)).unwrap();
        session.reject(letter).unwrap();

        let state = session.state().clone();
        let count = session.count();

        prop_assert_eq!(session.reject(letter), Err(PuzzleError::UnknownLetter(letter)));
        prop_assert_eq!(session.state(), &state);
        prop_assert_eq!(session.count(), count);
    }

    /// Undo after any successful change restores the previous state exactly.
    #[test]
    fn undo_restores_previous_state(
        corpus in arb_corpus(),
        guesses in arb_guesses(),
    ) {
        let mut session = Session::new(&corpus, SessionConfig::new(LENGTH)).unwrap();

        for (letter, hit, positions) in guesses {
            let state = session.state().clone();
            let count = session.count();
            let phase = session.phase();

            let result = if hit {
                session.accept(letter, &positions)
            } else {
                session.reject(letter)
            };
            if result.is_ok() {
                session.undo().unwrap();
                prop_assert_eq!(session.state(), &state);
                prop_assert_eq!(session.count(), count);
                prop_assert_eq!(session.phase(), phase);
            }
        }
    }
}
