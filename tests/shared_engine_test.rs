use std::sync::Arc;
use std::thread;

use sieve::{DocumentStatus, ExecutionMode, SearchEngine, status_filter};

#[test]
fn test_concurrent_readers_and_writer() -> sieve::Result<()> {
    let mut engine = SearchEngine::with_stop_words("in the")?;
    for id in 0..50 {
        engine.add_document(id, &format!("cat in the city n{id}"), DocumentStatus::Actual, &[1])?;
    }
    let shared = engine.into_shared();

    let writer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || -> sieve::Result<()> {
            for id in 50..100 {
                let mode = if id % 2 == 0 {
                    ExecutionMode::Sequential
                } else {
                    ExecutionMode::Parallel
                };
                let mut engine = shared.write();
                engine.add_document(id, &format!("dog n{id}"), DocumentStatus::Actual, &[2])?;
                engine.remove_document_with(mode, id - 50);
            }
            Ok(())
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|reader| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || -> sieve::Result<()> {
                let mode = if reader % 2 == 0 {
                    ExecutionMode::Sequential
                } else {
                    ExecutionMode::Parallel
                };
                for _ in 0..50 {
                    let engine = shared.read();
                    assert!(engine.index().is_consistent());
                    assert_eq!(engine.document_count(), 50);
                    let hits = engine.find_top_documents_with(
                        mode,
                        "cat dog",
                        status_filter(DocumentStatus::Actual),
                    )?;
                    assert_eq!(hits.len(), 5);
                }
                Ok(())
            })
        })
        .collect();

    writer.join().expect("writer panicked")?;
    for reader in readers {
        reader.join().expect("reader panicked")?;
    }

    let engine = shared.read();
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), (50..100).collect::<Vec<_>>());
    assert!(engine.find_top_documents("cat")?.is_empty());
    Ok(())
}
