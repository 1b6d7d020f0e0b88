use deskquery::query::EXAMPLE_QUERIES;
use deskquery::{Answer, Department, OutputFormat, QueryEngine, QueryIntent, SqliteStore};

fn answer_text(store: &SqliteStore, sentence: &str) -> String {
    QueryEngine::new(store).answer(sentence).render(OutputFormat::Text)
}

#[test]
fn example_sentences_against_seeded_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(&dir.path().join("company.db")).unwrap();

    assert_eq!(
        answer_text(&store, EXAMPLE_QUERIES[0]),
        "Name: Alice, Department: Sales, Salary: 50000, Hire Date: 2021-01-15"
    );
    assert_eq!(answer_text(&store, EXAMPLE_QUERIES[1]), "Manager: Bob");
    assert_eq!(
        answer_text(&store, EXAMPLE_QUERIES[2]),
        "Name: Alice, Department: Sales, Hire Date: 2021-01-15\nName: Charlie, Department: Marketing, Hire Date: 2022-03-20"
    );
    assert_eq!(answer_text(&store, EXAMPLE_QUERIES[3]), "Total Salary: 60000");
}

#[test]
fn reopening_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("company.db");

    drop(SqliteStore::open(&path).unwrap());
    let store = SqliteStore::open(&path).unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.employees, 3);
    assert_eq!(stats.departments, 3);
}

#[test]
fn tables_can_drift_apart() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert_department(&Department::new(4, "Legal", "Erin")).unwrap();

    assert_eq!(answer_text(&store, "Who is the manager of the legal department?"), "Manager: Erin");
    assert_eq!(
        answer_text(&store, "Show me all employees in the Legal department"),
        "No results found."
    );
}

#[test]
fn answers_carry_the_intent() {
    let store = SqliteStore::open_in_memory().unwrap();
    let engine = QueryEngine::new(&store);

    match engine.answer("Who is the manager of the Sales department?") {
        Answer::Rows { intent, result } => {
            assert_eq!(intent, QueryIntent::ManagerOf("sales".into()));
            assert_eq!(result.columns, vec!["Manager"]);
        }
        other => panic!("unexpected answer: {:?}", other),
    }
}

#[test]
fn table_and_json_renderings() {
    let store = SqliteStore::open_in_memory().unwrap();
    let answer = QueryEngine::new(&store).answer(EXAMPLE_QUERIES[2]);

    let table = answer.render(OutputFormat::Table);
    assert!(table.contains("Hire Date"));
    assert!(table.contains("Charlie"));

    let json: serde_json::Value = serde_json::from_str(&answer.render(OutputFormat::Json)).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["Department"], "Marketing");
}
