//! Walks one record through the reload-decision flow: which sparse-fieldset
//! requests actually need the network, and what the query payload looks like.

use fieldgate::{FetchPolicy, FieldSet, FieldSetError, Query, RecordIdentity};

fn main() -> Result<(), FieldSetError> {
    let mut policy = FetchPolicy::new();
    let post = RecordIdentity::from("post:1");

    let mut first = FieldSet::new();
    first.insert("post", "title,body")?;
    first.insert("comments", "title")?;

    let query = Query::new(Some(first.clone()), Some("comments"));
    println!(
        "first request  -> reload: {} (payload: {})",
        policy.should_reload(&post, Some(&first)),
        serde_json::to_string(&query).expect("query serializes"),
    );

    // Same shape, different formatting: already covered.
    let mut repeat = FieldSet::new();
    repeat.insert("post", "body, title")?;
    println!(
        "subset repeat  -> reload: {}",
        policy.should_reload(&post, Some(&repeat)),
    );

    // A field we have never fetched forces a new request.
    let mut wider = FieldSet::new();
    wider.insert("post", "title,body,created_at")?;
    println!(
        "wider request  -> reload: {}",
        policy.should_reload(&post, Some(&wider)),
    );

    // The record-store disposed the record; forget its coverage.
    policy.evict(&post);
    println!(
        "after eviction -> reload: {}",
        policy.should_reload(&post, Some(&first)),
    );

    Ok(())
}
