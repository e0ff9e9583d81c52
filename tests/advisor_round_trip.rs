//! End-to-end advisor sessions driven through the public API

use wordle_advisor::core::{Pattern, Word};
use wordle_advisor::error::AdvisorError;
use wordle_advisor::service::{Advisor, EvaluationInput};
use wordle_advisor::session::InMemorySessionStore;
use wordle_advisor::solver::{CandidateAnalysis, GamePhase, SuggestOptions};
use wordle_advisor::wordlists::{Language, WordListDictionary};

fn english(max_words: usize) -> Advisor {
    Advisor::new(
        InMemorySessionStore::new(),
        WordListDictionary::new(None, max_words),
        Language::En,
    )
}

/// Follow the top suggestion against `target` until one candidate is left
fn play(advisor: &Advisor, session: &str, target: &str) -> Vec<(String, Pattern, usize)> {
    let target = Word::new(target).unwrap();
    advisor.reset(session, None).unwrap();

    let mut rows = Vec::new();
    for _ in 0..6 {
        let suggestion = advisor
            .suggest(session, EvaluationInput::UseSessionState, SuggestOptions::default())
            .unwrap()
            .suggestion;
        if suggestion.candidate_count == 1 {
            break;
        }

        let guess = suggestion.best.word;
        let pattern = Pattern::calculate(&guess, &target);
        let applied = advisor
            .apply_feedback(session, guess.text(), &pattern.to_emoji())
            .unwrap();
        rows.push((guess.text().to_string(), pattern, applied.candidates_after));
        if pattern.is_perfect() {
            break;
        }
    }
    rows
}

#[test]
fn round_trip_reaches_one_candidate_within_six_rounds() {
    let advisor = english(400);

    for target in ["crate", "slate", "which", "light", "music", "house"] {
        let rows = play(&advisor, target, target);

        assert!(rows.len() <= 6, "{target}: {rows:?}");
        let (_, _, remaining) = rows.last().unwrap();
        assert_eq!(*remaining, 1, "{target}: {rows:?}");

        let state = advisor.state(target).unwrap();
        assert_eq!(state.candidate_count, 1);
        assert_eq!(state.history.len(), rows.len());
    }
}

#[test]
fn crate_crane_feedback_scenario() {
    let pattern = Pattern::calculate(&Word::new("crane").unwrap(), &Word::new("crate").unwrap());
    assert_eq!(pattern.to_string(), "GGGKG");

    let advisor = english(400);
    advisor.reset("g", None).unwrap();
    let applied = advisor.apply_feedback("g", "crane", "GGGKG").unwrap();

    assert_eq!(applied.candidates_after, 1);
    let suggestion = advisor
        .suggest("g", EvaluationInput::UseSessionState, SuggestOptions::default())
        .unwrap()
        .suggestion;
    assert_eq!(suggestion.best.word.text(), "crate");
    assert!(suggestion.best.entropy_bits.abs() < f64::EPSILON);
}

#[test]
fn empty_candidates_then_reset() {
    let advisor = english(400);
    advisor.reset("g", None).unwrap();
    advisor.apply_feedback("g", "crate", "GGGGG").unwrap();
    advisor.apply_feedback("g", "crate", "KKKKK").unwrap();

    let err = advisor
        .suggest("g", EvaluationInput::UseSessionState, SuggestOptions::default())
        .unwrap_err();
    assert!(matches!(err, AdvisorError::NoCandidates));

    advisor.reset("g", None).unwrap();
    let suggestion = advisor
        .suggest("g", EvaluationInput::UseSessionState, SuggestOptions::default())
        .unwrap()
        .suggestion;
    assert_eq!(suggestion.phase, GamePhase::Early);
    assert_eq!(suggestion.candidate_count, 400);
}

#[test]
fn single_candidate_is_the_answer() {
    let advisor = english(400);
    let input = EvaluationInput::resolve(Some(["Slate"])).unwrap();

    let suggestion = advisor
        .suggest("g", input, SuggestOptions::default())
        .unwrap()
        .suggestion;

    assert_eq!(suggestion.best.word.text(), "slate");
    assert!(suggestion.best.is_candidate);
    assert!(matches!(
        suggestion.analysis,
        CandidateAnalysis::Solved { ref answer } if answer.text() == "slate"
    ));
    // explicit candidates leave the session untouched
    assert_eq!(advisor.state("g").unwrap().candidate_count, 400);
}

#[test]
fn sessions_are_independent() {
    let advisor = english(400);
    advisor.apply_feedback("a", "about", "KKKKK").unwrap();

    assert_eq!(advisor.state("b").unwrap().candidate_count, 400);
    assert!(advisor.state("a").unwrap().candidate_count < 400);
}

#[test]
fn spanish_list_folds_diacritics() {
    let advisor = Advisor::new(
        InMemorySessionStore::new(),
        WordListDictionary::embedded(),
        Language::Es,
    );
    let reset = advisor.reset("es", None).unwrap();
    assert!(reset.candidate_count > 100);

    let applied = advisor.apply_feedback("es", "SOÑAR", "GGGGG").unwrap();
    assert_eq!(applied.guess.text(), "sonar");
    assert_eq!(applied.candidates_after, 1);
}
