mod common;

use common::quiz_document;
use quiz_session::models::ScoreGrade;
use quiz_session::services::score_message;
use quiz_session::{logger, AppView, LoadStatus, MemorySource, QuizPhase, QuizSession, QuizState};
use tokio_test::{assert_err, assert_ok};

fn source() -> MemorySource {
    MemorySource::new()
        .with_document("csharp-advanced.json", quiz_document("C# Advanced Mastery", 4))
        .with_document("angular-concepts.json", quiz_document("Angular Deep Dive", 3))
}

#[tokio::test]
async fn full_quiz_walkthrough_scores_three_of_four() {
    logger::init();

    let mut session = QuizSession::new(source(), Some(11));
    assert_ok!(session.select_category("csharp-advanced").await);
    assert_eq!(session.view(), AppView::Quiz);

    let mut rx = session.subscribe();

    // 前三题答对，第四题答错
    for i in 0..4 {
        let view = session.store().flow().unwrap().question_view().unwrap();
        assert_eq!(view.question_number, i + 1);
        let correct = session.data().unwrap().questions[i].correct_answer;
        let chosen = if i < 3 { correct } else { (correct + 1) % 4 };

        // 通过打乱后的选项作答，记录的仍是原始下标
        let option = view
            .options
            .iter()
            .find(|o| o.original_index == chosen)
            .unwrap()
            .clone();
        assert_ok!(session.store_mut().select_answer(view.question_id, option.original_index));
        assert_ok!(session.store_mut().next());
    }

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().phase(), QuizPhase::Completed);

    assert_ok!(session.store_mut().reveal());
    assert_eq!(session.store().current_state().phase(), QuizPhase::ShowingResults);

    let flow = session.store().flow().unwrap();
    let result = flow.results();
    assert_eq!(result.total_questions, 4);
    assert_eq!(result.correct_answers, 3);
    assert_eq!(result.percentage, 75);
    assert_eq!(result.answers.len(), 4);
    assert_eq!(ScoreGrade::from_percentage(result.percentage), ScoreGrade::Good);
    assert!(score_message(result.percentage, "C#").starts_with("Good work!"));

    let review = flow.review();
    assert!(!review[3].is_correct);
    assert!(review[3].is_answered);

    session.restart();
    assert_eq!(session.store().current_state(), QuizState::default());
    assert_eq!(*rx.borrow_and_update(), QuizState::default());
}

#[tokio::test]
async fn unanswered_questions_count_as_wrong() {
    let mut session = QuizSession::new(source(), Some(2));
    assert_ok!(session.select_category("angular-concepts").await);

    for _ in 0..3 {
        assert_ok!(session.store_mut().next());
    }
    let result = session.store().flow().unwrap().results();
    assert_eq!(result.correct_answers, 0);
    assert_eq!(result.percentage, 0);
    assert_eq!(result.unanswered_count(), 3);
}

#[tokio::test]
async fn switching_category_replaces_data_and_keeps_subscribers() {
    let mut session = QuizSession::new(source(), Some(2));
    let mut rx = session.subscribe();

    assert_ok!(session.select_category("csharp-advanced").await);
    assert_ok!(session.store_mut().select_answer(1, 1));
    assert_ok!(session.store_mut().next());

    assert_ok!(session.select_category("angular-concepts").await);
    assert_eq!(session.data().unwrap().title, "Angular Deep Dive");
    assert_eq!(*rx.borrow_and_update(), QuizState::default());
}

#[tokio::test]
async fn failed_load_can_be_retried_or_abandoned() {
    let mut session = QuizSession::new(source(), None);

    assert_err!(session.select_category("web-development").await);
    assert!(matches!(
        session.load_status(),
        LoadStatus::Failed { retryable: false, .. }
    ));

    assert_err!(session.retry().await);

    session.choose_different_quiz();
    assert_eq!(session.view(), AppView::Selection);
    assert_eq!(session.load_status(), &LoadStatus::Idle);
    assert!(session.selected_category().is_none());
}

#[tokio::test]
async fn retry_succeeds_once_document_appears() {
    let dir = std::env::temp_dir().join(format!("quiz_session_retry_{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join("web-development.json");
    let _ = tokio::fs::remove_file(&path).await;

    let mut session = QuizSession::new(quiz_session::FileSource::new(&dir), Some(9));
    assert_err!(session.select_category("web-development").await);

    tokio::fs::write(&path, quiz_document("Web Development", 22))
        .await
        .unwrap();
    assert_ok!(session.retry().await);
    assert_eq!(session.load_status(), &LoadStatus::Ready);
    assert_eq!(session.data().unwrap().question_count(), 22);

    let _ = tokio::fs::remove_dir_all(&dir).await;
}
