//! Batch lifecycle integration tests.
//!
//! These tests drive the batch processor from a CSV file on disk through the
//! mock transport:
//! - Skipping and reporting unresolved rows
//! - Search disambiguation across a whole batch
//! - Aborting on transport failures

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use boardfetch_core::{
    testing::{fixtures, MockTransport, RecordingSink},
    BatchError, BatchProcessor, CatalogError, Config, Diagnostic, DiagnosticSink, GameId,
    GameRecord, Transport,
};

const SEARCH: &str = "http://www.boardgamegeek.com/xmlapi/search?search=";
const DETAIL: &str = "https://boardgamegeek.com/xmlapi/boardgame/";

/// Test helper wiring a processor to a mock transport.
struct TestHarness {
    transport: Arc<MockTransport>,
    sink: Arc<RecordingSink>,
    processor: BatchProcessor,
}

impl TestHarness {
    fn new() -> Self {
        let transport = Arc::new(MockTransport::new());
        let sink = Arc::new(RecordingSink::new());
        let processor = BatchProcessor::from_config(
            Arc::clone(&transport) as Arc<dyn Transport>,
            Arc::clone(&sink) as Arc<dyn DiagnosticSink>,
            &Config::default(),
        );
        Self {
            transport,
            sink,
            processor,
        }
    }

    fn search(&self, query: &str, candidates: &[(u32, &str)]) {
        self.transport.respond(
            &format!("{}{}", SEARCH, query),
            200,
            fixtures::search_xml(candidates),
        );
    }

    fn detail(&self, record: &GameRecord) {
        self.transport.respond(
            &format!("{}{}&stats=1", DETAIL, record.id),
            200,
            fixtures::detail_xml(record),
        );
    }

    fn csv_file(&self, contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }
}

#[tokio::test]
async fn test_two_rows_one_unresolved() {
    let harness = TestHarness::new();
    let catan = fixtures::game_record("Catan", 13);
    harness.search("Catan", &[(13, "Catan")]);
    harness.detail(&catan);
    harness.search("Not%20A%20Game", &[]);

    let file = harness.csv_file("Board Games\nCatan\nNot A Game\n");
    let result = harness.processor.process_batch(file.path()).await.unwrap();

    assert_eq!(result.records, vec![catan]);
    assert_eq!(result.failures, vec!["Not A Game".to_string()]);
    let messages = harness.sink.messages();
    assert!(!messages.is_empty());
    assert!(messages.iter().all(|m| m.contains("Not A Game")));
}

#[tokio::test]
async fn test_detail_record_matches_catalog_values() {
    let harness = TestHarness::new();
    let record = GameRecord {
        title: "Catan".to_string(),
        id: GameId(13),
        min_players: 2,
        max_players: 4,
        min_playtime: 60,
        max_playtime: 120,
        complexity: 2.5,
        thumbnail_url: "http://x/y.jpg".to_string(),
    };
    harness.search("Catan", &[(13, "Catan")]);
    harness.detail(&record);

    let file = harness.csv_file("Board Games\nCatan\n");
    let result = harness.processor.process_batch(file.path()).await.unwrap();

    assert_eq!(result.records.len(), 1);
    let fetched = &result.records[0];
    assert_eq!(fetched.title, "Catan");
    assert_eq!(fetched.id, GameId(13));
    assert_eq!((fetched.min_players, fetched.max_players), (2, 4));
    assert_eq!((fetched.min_playtime, fetched.max_playtime), (60, 120));
    assert_eq!(fetched.complexity, 2.5);
    assert_eq!(fetched.thumbnail_url, "http://x/y.jpg");
}

#[tokio::test]
async fn test_disambiguation_across_batch() {
    let harness = TestHarness::new();
    // Single candidate with a different title is still accepted.
    harness.search("Carcassonne", &[(822, "Carcassonne: Big Box")]);
    harness.detail(&fixtures::game_record("Carcassonne: Big Box", 822));
    // Several candidates, one exact match further down.
    harness.search("Risk", &[(2, "Risk: Legacy"), (1, "Risk")]);
    harness.detail(&fixtures::game_record("Risk", 1));
    // Several candidates, no exact match.
    harness.search("Monopoly", &[(3, "Monopoly Deal"), (4, "Monopoly Junior")]);

    let file = harness.csv_file("Board Games\nCarcassonne\nRisk\nMonopoly\n");
    let result = harness.processor.process_batch(file.path()).await.unwrap();

    let ids: Vec<GameId> = result.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![GameId(822), GameId(1)]);
    assert_eq!(result.failures, vec!["Monopoly".to_string()]);
    assert_eq!(
        harness.sink.diagnostics(),
        vec![
            Diagnostic::GameNotFound {
                name: "Monopoly".to_string(),
                candidates: 2,
            },
            Diagnostic::GameNotAdded {
                name: "Monopoly".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_transport_failure_stops_remaining_rows() {
    let harness = TestHarness::new();
    harness.search("Catan", &[(13, "Catan")]);
    harness.detail(&fixtures::game_record("Catan", 13));
    harness.search("Azul", &[(230802, "Azul")]);
    harness.detail(&fixtures::game_record("Azul", 230802));
    harness
        .transport
        .fail_on(&format!("{}Brass", SEARCH), "connection refused");

    let file = harness.csv_file("Board Games\nCatan\nBrass\nAzul\n");
    let err = harness
        .processor
        .process_batch(file.path())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BatchError::Catalog(CatalogError::Transport(_))
    ));
    let requests = harness.transport.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|url| !url.contains("Azul")));
    assert!(harness.sink.diagnostics().is_empty());
}

#[tokio::test]
async fn test_quoted_names_with_commas() {
    let harness = TestHarness::new();
    let record = fixtures::game_record("Paris, 1889", 77);
    harness.search("Paris,%201889", &[(77, "Paris, 1889")]);
    harness.detail(&record);

    let file = harness.csv_file("Board Games,Owner\n\"Paris, 1889\",Bob\n");
    let result = harness.processor.process_batch(file.path()).await.unwrap();

    assert_eq!(result.records, vec![record]);
}
