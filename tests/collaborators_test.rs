use sieve::{
    DocumentStatus, EngineConfig, ExecutionMode, RequestQueue, SearchEngine, SieveError, paginate,
    process_queries, process_queries_joined, remove_duplicates,
};

fn pet_engine() -> sieve::Result<SearchEngine> {
    let mut engine = SearchEngine::with_stop_words("and with")?;
    let texts = [
        "funny pet and nasty rat",
        "funny pet with curly hair",
        "funny pet and not very nasty rat",
        "pet with rat and rat and rat",
        "nasty rat with curly hair",
    ];
    for (id, text) in (1..).zip(texts) {
        engine.add_document(id, text, DocumentStatus::Actual, &[1, 2])?;
    }
    Ok(engine)
}

#[test]
fn test_paginate_search_results() -> sieve::Result<()> {
    let mut engine = SearchEngine::with_stop_words("and with")?;
    engine.add_document(1, "funny pet and nasty rat", DocumentStatus::Actual, &[7, 2, 7])?;
    engine.add_document(2, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2, 3])?;
    engine.add_document(3, "big cat nasty hair", DocumentStatus::Actual, &[1, 2, 8])?;
    engine.add_document(4, "big dog cat Vladislav", DocumentStatus::Actual, &[1, 3, 2])?;
    engine.add_document(5, "big dog hamster Borya", DocumentStatus::Actual, &[1, 1, 1])?;

    let hits = engine.find_top_documents("curly dog")?;
    assert_eq!(hits.len(), 3);
    let pages = paginate(&hits, 2)?;
    let sizes: Vec<usize> = pages.iter().map(|page| page.len()).collect();
    assert_eq!(sizes, vec![2, 1]);

    let items = [1, 2, 3, 4, 5];
    let sizes: Vec<usize> = paginate(&items, 2)?.iter().map(|page| page.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    assert!(matches!(paginate(&items, 0), Err(SieveError::InvalidArgument(_))));
    Ok(())
}

#[test]
fn test_request_queue_counts_empty_results() -> sieve::Result<()> {
    let mut engine = SearchEngine::with_stop_words("and in at")?;
    engine.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])?;
    engine.add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3])?;
    engine.add_document(3, "big cat fancy collar ", DocumentStatus::Actual, &[1, 2, 8])?;
    engine.add_document(4, "big dog sparrow Eugene", DocumentStatus::Actual, &[1, 3, 2])?;
    engine.add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Actual, &[1, 1, 1])?;

    let mut queue = RequestQueue::new(&engine);
    for _ in 0..1439 {
        queue.add_find_request("empty request")?;
    }
    queue.add_find_request("curly dog")?;
    queue.add_find_request("big collar")?;
    queue.add_find_request("sparrow")?;
    assert_eq!(queue.no_result_requests(), 1437);

    queue.add_find_request_by_status("sparrow", DocumentStatus::Banned)?;
    assert_eq!(queue.no_result_requests(), 1437);
    queue.add_find_request_by("big", |id, _, _| id > 100)?;
    assert_eq!(queue.no_result_requests(), 1437);
    queue.add_find_request_by("big", |id, _, _| id < 100)?;
    assert_eq!(queue.no_result_requests(), 1436);
    Ok(())
}

#[test]
fn test_request_queue_window_from_config() -> sieve::Result<()> {
    let config = EngineConfig::builder().request_window(2).build();
    let engine = SearchEngine::new(config)?;
    let mut queue = RequestQueue::new(&engine);
    for _ in 0..5 {
        queue.add_find_request("nothing")?;
    }
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.no_result_requests(), 2);
    Ok(())
}

#[test]
fn test_remove_duplicates() -> sieve::Result<()> {
    let mut engine = SearchEngine::with_stop_words("and with")?;
    let documents = [
        (1, "funny pet and nasty rat"),
        (2, "funny pet with curly hair"),
        (3, "funny pet with curly hair"),
        (4, "funny pet and curly hair"),
        (5, "funny funny pet and nasty nasty rat"),
        (6, "funny pet and not very nasty rat"),
        (7, "very nasty rat and not very funny pet"),
        (8, "pet with rat and rat and rat"),
        (9, "nasty rat with curly hair"),
    ];
    for (id, text) in documents {
        engine.add_document(id, text, DocumentStatus::Actual, &[1, 2])?;
    }

    assert_eq!(remove_duplicates(&mut engine), vec![3, 4, 5, 7]);
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![1, 2, 6, 8, 9]);
    assert!(engine.index().is_consistent());
    Ok(())
}

#[test]
fn test_process_queries() -> sieve::Result<()> {
    let engine = pet_engine()?;
    let queries = ["nasty rat -not", "not very funny nasty pet", "curly hair"];

    let sizes: Vec<usize> = process_queries(&engine, &queries)?
        .iter()
        .map(|hits| hits.len())
        .collect();
    assert_eq!(sizes, vec![3, 5, 2]);

    let joined = process_queries_joined(&engine, &queries)?;
    assert_eq!(joined.len(), 10);
    let ids: Vec<i64> = joined.iter().map(|hit| hit.doc_id).collect();
    assert_eq!(&ids[8..], &[2, 5]);
    Ok(())
}

#[test]
fn test_parallel_default_mode() -> sieve::Result<()> {
    let config = EngineConfig::builder()
        .stop_words_text("and with")
        .default_mode(ExecutionMode::Parallel)
        .partition_count(3)
        .accumulator_shards(7)
        .build();
    let mut engine = SearchEngine::new(config)?;
    engine.add_document(1, "funny pet and nasty rat", DocumentStatus::Actual, &[1])?;
    engine.add_document(2, "funny pet with curly hair", DocumentStatus::Actual, &[2])?;

    let hits = engine.find_top_documents("funny rat")?;
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].doc_id, 1);

    assert!(engine.remove_document(1));
    assert!(engine.index().is_consistent());
    assert_eq!(engine.find_top_documents("rat")?.len(), 0);
    Ok(())
}
