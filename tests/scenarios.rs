//! End-to-end puzzle scenarios driven through the public session API

use hangman_solver::core::{Frame, Letter, LetterSet, PuzzleError};
use hangman_solver::solver::{Phase, Session, SessionConfig};
use hangman_solver::wordlists::loader::words_from_slice;

fn letter(ch: char) -> Letter {
    Letter::new(ch).unwrap()
}

fn texts(session: &Session<'_>) -> Vec<String> {
    session
        .candidates()
        .iter()
        .map(|w| w.text().to_string())
        .collect()
}

#[test]
fn reject_accept_and_solve() {
    let corpus = words_from_slice(&["abc", "abd", "xyz"]);
    let mut session = Session::new(&corpus, SessionConfig::new(3)).unwrap();

    // Reject narrows the set
    session.reject(letter('x')).unwrap();
    assert_eq!(texts(&session), vec!["abc", "abd"]);
    assert_eq!(session.count(), 2);

    // Accepting a letter every candidate already has leaves the set alone
    let transition = session.accept(letter('a'), &[1]).unwrap();
    assert_eq!(session.frame().to_string(), "a__");
    assert_eq!(transition.eliminated(), 0);
    assert_eq!(texts(&session), vec!["abc", "abd"]);

    let b = session.stats().get(letter('b')).unwrap();
    assert_eq!(b.word_occurrences, 2);
    assert_eq!(b.probability, Some(1.0));

    session.accept(letter('c'), &[3]).unwrap();
    assert_eq!(texts(&session), vec!["abc"]);
    assert_eq!(session.frame().to_string(), "a_c");

    let transition = session.accept(letter('b'), &[2]).unwrap();
    assert_eq!(session.frame().to_string(), "abc");
    assert!(session.frame().is_complete());
    assert_eq!(session.phase(), Phase::Solved);
    assert_eq!(transition.phase, Phase::Solved);
}

#[test]
fn contradicting_guesses_exhaust_the_dictionary() {
    let corpus = words_from_slice(&["abc"]);
    let mut session = Session::new(&corpus, SessionConfig::new(3)).unwrap();

    session.reject(letter('z')).unwrap();
    assert_eq!(session.phase(), Phase::InProgress);

    session.reject(letter('a')).unwrap();
    assert!(session.candidates().is_empty());
    assert_eq!(session.phase(), Phase::Exhausted);

    let stats = session.stats();
    assert!(stats.is_undefined());
    assert!(stats.entries().iter().all(|stat| stat.probability.is_none()));
}

#[test]
fn set_state_restores_a_position() {
    let corpus = words_from_slice(&["abc", "abd", "azy"]);
    let mut session = Session::new(&corpus, SessionConfig::new(3)).unwrap();

    let frame = Frame::parse("a__").unwrap();
    let rejected: LetterSet = [letter('z')].into_iter().collect();
    session.set_state(frame, rejected).unwrap();

    assert_eq!(session.state().accepted().to_string(), "a");
    assert_eq!(session.state().rejected().to_string(), "z");
    assert_eq!(texts(&session), vec!["abc", "abd"]);
    assert_eq!(session.phase(), Phase::InProgress);
}

#[test]
fn undo_walks_back_through_history() {
    let corpus = words_from_slice(&["abc", "abd", "xyz"]);
    let mut session = Session::new(&corpus, SessionConfig::new(3)).unwrap();

    session.reject(letter('x')).unwrap();
    session.accept(letter('c'), &[3]).unwrap();
    assert_eq!(session.count(), 1);

    session.undo().unwrap();
    assert_eq!(session.count(), 2);
    session.undo().unwrap();
    assert_eq!(session.count(), 3);
    assert_eq!(session.phase(), Phase::Initialized);
    assert_eq!(session.undo(), Err(PuzzleError::NothingToUndo));
}

#[test]
fn sessions_share_one_corpus() {
    let corpus = words_from_slice(&["abc", "abd", "xyz"]);
    let mut first = Session::new(&corpus, SessionConfig::new(3)).unwrap();
    let second = Session::new(&corpus, SessionConfig::new(3)).unwrap();

    first.reject(letter('a')).unwrap();
    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 3);
}
