use std::fs;

use quiz_core::model::{GameMode, Question};
use storage::{JsonQuestionSource, QuestionRecord, QuestionSource, StorageError};

fn write_questions(dir: &std::path::Path, mode: GameMode, questions: &[Question]) {
    let records: Vec<QuestionRecord> = questions.iter().map(QuestionRecord::from_question).collect();
    let raw = serde_json::to_string_pretty(&records).unwrap();
    fs::write(dir.join(JsonQuestionSource::file_name(mode)), raw).unwrap();
}

#[test]
fn loads_questions_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let questions = vec![
        Question::new("Who designed the Analytical Engine?", "Charles Babbage", "easy", Vec::new())
            .unwrap(),
        Question::new(
            "What did ENIAC use as switching elements?",
            "Vacuum tubes",
            "medium",
            vec!["vacuum".into(), "tube".into()],
        )
        .unwrap(),
    ];
    write_questions(dir.path(), GameMode::History, &questions);

    let source = JsonQuestionSource::new(dir.path());
    let set = source.load(GameMode::History).unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.get(0), Some(&questions[0]));
    assert_eq!(set.get(1).unwrap().keywords(), ["vacuum", "tube"]);
}

#[test]
fn modes_are_loaded_from_separate_files() {
    let dir = tempfile::tempdir().unwrap();
    let history = vec![Question::new("H?", "h", "easy", Vec::new()).unwrap()];
    let computers = vec![Question::new("C?", "c", "hard", Vec::new()).unwrap()];
    write_questions(dir.path(), GameMode::History, &history);
    write_questions(dir.path(), GameMode::Computers, &computers);

    let source = JsonQuestionSource::new(dir.path());

    assert_eq!(source.load(GameMode::History).unwrap().get(0).unwrap().prompt(), "H?");
    assert_eq!(source.load(GameMode::Computers).unwrap().get(0).unwrap().prompt(), "C?");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonQuestionSource::new(dir.path());

    let err = source.load(GameMode::Computers).unwrap_err();
    match err {
        StorageError::NotFound { path } => assert!(path.ends_with("computers.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("history.json"), "[{ not json").unwrap();

    let err = JsonQuestionSource::new(dir.path())
        .load(GameMode::History)
        .unwrap_err();
    assert!(matches!(err, StorageError::Parse { .. }));
    assert!(err.to_string().contains("history.json"));
}

#[test]
fn legacy_files_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let raw = r#"[
        {
            "pergunta": "Qual foi o primeiro computador eletrônico?",
            "resposta": "ENIAC",
            "dificuldade": "Fácil",
            "palavras_chave": ["eniac", "1945"]
        }
    ]"#;
    fs::write(dir.path().join("history.json"), raw).unwrap();

    let set = JsonQuestionSource::new(dir.path())
        .load(GameMode::History)
        .unwrap();
    let question = set.get(0).unwrap();
    assert_eq!(question.correct_answer(), "ENIAC");
    assert_eq!(question.difficulty(), "Fácil");
    assert_eq!(question.keywords(), ["eniac", "1945"]);
}

#[test]
fn shipped_question_files_load() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let source = JsonQuestionSource::new(data_dir);

    for mode in GameMode::ALL {
        let set = source.load(mode).unwrap();
        assert!(set.len() >= 10, "{mode} has only {} questions", set.len());
    }
}
