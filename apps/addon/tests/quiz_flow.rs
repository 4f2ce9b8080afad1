//! End-to-end quiz flows: generate, grade, commit, repeat.

mod common;

use std::collections::HashSet;

use autoquiz_addon::db::HistoryRepository;
use autoquiz_addon::export::render_report;
use autoquiz_addon::service::ServiceError;
use quiz_core::scoring::grade;
use quiz_core::types::QuizConfig;
use quiz_core::QuizError;
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::fixtures;
use common::service_with;

fn history_config(question_count: usize, choice_count: usize) -> QuizConfig {
    QuizConfig {
        question_count,
        choice_count,
        allow_answer_reuse: false,
        save_history: true,
        ..Default::default()
    }
}

#[test]
fn sequential_sessions_do_not_repeat_questions() {
    let mut service = service_with(fixtures::sample_cards(6));
    let config = history_config(3, 3);
    let mut rng = StdRng::seed_from_u64(1);

    let first = service.generate_with_rng("geo", &config, &mut rng).unwrap();
    service.commit_session(&first).unwrap();
    let second = service.generate_with_rng("geo", &config, &mut rng).unwrap();

    let first_ids: HashSet<i64> = first.card_ids().into_iter().collect();
    let second_ids: HashSet<i64> = second.card_ids().into_iter().collect();
    assert_eq!(first_ids.len(), 3);
    assert_eq!(second_ids.len(), 3);
    assert!(first_ids.is_disjoint(&second_ids));
}

#[test]
fn exhausted_deck_reports_insufficient_cards() {
    let mut service = service_with(fixtures::sample_cards(6));
    let config = history_config(3, 3);
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..2 {
        let session = service.generate_with_rng("geo", &config, &mut rng).unwrap();
        service.commit_session(&session).unwrap();
    }

    let result = service.generate_with_rng("geo", &config, &mut rng);
    assert!(matches!(
        result,
        Err(ServiceError::Quiz(QuizError::InsufficientCards {
            available: 0,
            requested: 3
        }))
    ));
}

#[test]
fn clearing_history_restores_the_pool() {
    let mut service = service_with(fixtures::sample_cards(3));
    let config = history_config(3, 3);
    let mut rng = StdRng::seed_from_u64(3);

    let session = service.generate_with_rng("geo", &config, &mut rng).unwrap();
    service.commit_session(&session).unwrap();
    assert!(matches!(
        service.generate_with_rng("geo", &config, &mut rng),
        Err(ServiceError::Quiz(QuizError::InsufficientCards { .. }))
    ));

    service.clear_history("geo").unwrap();
    assert!(service.generate_with_rng("geo", &config, &mut rng).is_ok());
}

#[test]
fn uncommitted_sessions_leave_no_history() {
    let service = service_with(fixtures::sample_cards(6));
    let config = history_config(3, 3);
    let mut rng = StdRng::seed_from_u64(4);

    let session = service.generate_with_rng("geo", &config, &mut rng).unwrap();
    for card_id in session.card_ids() {
        assert!(!service.repository().has_been_asked("geo", card_id).unwrap());
    }
}

#[test]
fn commit_is_skipped_when_history_is_off() {
    let mut service = service_with(fixtures::sample_cards(6));
    let config = QuizConfig {
        question_count: 3,
        choice_count: 3,
        save_history: false,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(5);

    let session = service.generate_with_rng("geo", &config, &mut rng).unwrap();
    service.commit_session(&session).unwrap();
    for card_id in session.card_ids() {
        assert!(!service.repository().has_been_asked("geo", card_id).unwrap());
    }
}

#[test]
fn excluded_tags_filter_the_pool() {
    let mut cards = fixtures::sample_cards(6);
    fixtures::tag_card(&mut cards, 1, "leech");
    fixtures::tag_card(&mut cards, 2, "leech");
    let service = service_with(cards);

    let config = QuizConfig {
        question_count: 4,
        choice_count: 3,
        allow_answer_reuse: false,
        excluded_tags: vec!["leech".to_string()],
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(6);

    let session = service.generate_with_rng("geo", &config, &mut rng).unwrap();
    assert!(session.card_ids().iter().all(|id| *id > 2));
}

#[test]
fn history_is_tracked_per_deck() {
    let mut service = service_with(fixtures::sample_cards(3));
    let config = history_config(3, 3);
    let mut rng = StdRng::seed_from_u64(7);

    let session = service.generate_with_rng("geo", &config, &mut rng).unwrap();
    service.commit_session(&session).unwrap();

    // The same cards are still fresh under another deck id.
    assert!(service.generate_with_rng("chem", &config, &mut rng).is_ok());
}

#[test]
fn generate_grade_export_round_trip() {
    let service = service_with(fixtures::sample_cards(6));
    let config = QuizConfig {
        question_count: 3,
        choice_count: 4,
        allow_answer_reuse: false,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(8);

    let session = service.generate_with_rng("geo", &config, &mut rng).unwrap();

    // Answer the first two correctly, leave the last one blank.
    let answers = vec![
        Some(session.questions[0].correct_index),
        Some(session.questions[1].correct_index),
        None,
    ];
    let report = grade(&session, &answers);
    assert_eq!(report.correct, 2);
    assert_eq!(report.percent(), 67);

    let page = render_report(&report).into_string();
    assert!(page.contains("Score: 2/3 (67%)"));
}
