use konad_rail::types::FailChain;

#[test]
fn new_chain_has_single_failure() {
    let chain = FailChain::new("only");
    assert_eq!(chain.failure(), &"only");
    assert!(chain.previous().is_none());
    assert_eq!(chain.len(), 1);
    assert!(!chain.is_empty());
}

#[test]
fn push_makes_newest_failure_the_head() {
    let chain = FailChain::new(1).push(2).push(3);

    assert_eq!(chain.failure(), &3);
    assert_eq!(chain.previous().map(FailChain::failure), Some(&2));
    assert_eq!(chain.len(), 3);
}

#[test]
fn links_walk_newest_to_oldest() {
    let chain = FailChain::new("a").push("b").push("c");
    let links: Vec<_> = chain.links().copied().collect();
    assert_eq!(links, vec!["c", "b", "a"]);
}

#[test]
fn failures_are_oldest_first() {
    let chain = FailChain::new("a").push("b").push("c");
    assert_eq!(chain.failures().as_slice(), &[&"a", &"b", &"c"]);
    assert_eq!(chain.into_failures().as_slice(), &["a", "b", "c"]);
}

#[test]
fn from_failures_round_trips_order() {
    let chain = FailChain::from_failures(vec![1, 2, 3, 4]).unwrap();
    assert_eq!(chain, FailChain::new(1).push(2).push(3).push(4));
    assert_eq!(chain.into_failures().into_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn from_failures_empty_is_none() {
    assert!(FailChain::<i32>::from_failures(Vec::new()).is_none());
}

#[test]
fn with_previous_links_existing_chain() {
    let chain = FailChain::with_previous("new", FailChain::new("old"));
    assert_eq!(chain, FailChain::new("old").push("new"));
}

#[test]
fn map_preserves_shape() {
    let chain = FailChain::new(1).push(2).push(3).map(|x| x * 10);
    assert_eq!(chain, FailChain::new(10).push(20).push(30));
}

#[test]
fn map_visits_oldest_first() {
    let mut seen = Vec::new();
    let _ = FailChain::new("a").push("b").map(|x| seen.push(x));
    assert_eq!(seen, vec!["a", "b"]);
}

#[test]
fn concat_appends_every_failure() {
    let first = FailChain::new("a").push("b").push("c");
    let second = FailChain::new("x").push("y");

    assert_eq!(
        first.concat(second).into_failures().as_slice(),
        &["a", "b", "c", "x", "y"]
    );
}

#[test]
fn display_joins_oldest_to_newest() {
    let chain = FailChain::new("parse").push("validate");
    assert_eq!(chain.to_string(), "parse -> validate");
    assert_eq!(FailChain::new(7).to_string(), "7");
}

#[test]
fn fail_chain_is_an_error() {
    fn describe(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    assert_eq!(describe(&FailChain::new("boom")), "boom");
}

#[test]
#[cfg(feature = "serde")]
fn fail_chain_serde_round_trip() {
    let chain = FailChain::new("a".to_string()).push("b".to_string());
    let json = serde_json::to_string(&chain).unwrap();
    let back: FailChain<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chain);
}

#[test]
fn debug_lists_failures_oldest_first() {
    let chain = FailChain::new(1).push(2);
    assert_eq!(format!("{chain:?}"), "FailChain { failures: [1, 2] }");
}

#[test]
fn equal_chains_hash_alike() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(FailChain::new("a").push("b"));
    seen.insert(FailChain::from_failures(["a", "b"]).unwrap());
    seen.insert(FailChain::new("b").push("a"));
    assert_eq!(seen.len(), 2);
}

#[test]
fn long_chain_clone_compare_and_drop() {
    let count = 200_000;
    let chain = FailChain::from_failures(0..count).unwrap();
    let copy = chain.clone();
    assert_eq!(copy, chain);
    assert_ne!(copy.push(count), chain);
    assert_eq!(chain.map(|x| x * 2).len(), count as usize);
}

#[test]
#[cfg(feature = "serde")]
fn fail_chain_serializes_as_ordered_sequence() {
    let chain = FailChain::new(1).push(2).push(3);
    assert_eq!(serde_json::to_string(&chain).unwrap(), "[1,2,3]");
    assert!(serde_json::from_str::<FailChain<u8>>("[]").is_err());
}

#[test]
#[cfg(feature = "serde")]
fn long_chain_serde_round_trip() {
    let chain = FailChain::from_failures(0..100_000u32).unwrap();
    let json = serde_json::to_string(&chain).unwrap();
    let back: FailChain<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chain);
}
