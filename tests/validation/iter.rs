use konad_rail::validation::Validation;
use konad_rail::FailChain;

#[test]
fn iter_mut_updates_success_value() {
    let mut valid = Validation::<&str, i32>::success(3);
    if let Some(value) = valid.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(valid.into_value(), Some(4));
}

#[test]
fn iter_over_fail_is_empty() {
    let v: Validation<&str, i32> = Validation::fail("error");
    assert_eq!(v.iter().next(), None);

    let mut v_mut = v.clone();
    assert_eq!(v_mut.iter_mut().next(), None);
}

#[test]
fn iter_success_yields_single_value_and_len_updates() {
    let v: Validation<&str, i32> = Validation::success(7);
    let mut iter = v.iter();

    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&7));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_failures_oldest_first() {
    let v = Validation::<&str, i32>::Fail(FailChain::new("x").push("y").push("z"));
    let collected: Vec<_> = v.iter_failures().copied().collect();
    assert_eq!(collected, vec!["x", "y", "z"]);
}

#[test]
fn iter_failures_empty_on_success() {
    let v: Validation<&str, i32> = Validation::success(0);
    assert_eq!(v.iter_failures().next(), None);
}

#[test]
fn into_iterator_yields_value_only_for_success() {
    let ok: Validation<&str, i32> = Validation::success(5);
    let values: Vec<_> = ok.into_iter().collect();
    assert_eq!(values, vec![5]);

    let failed: Validation<&str, i32> = Validation::fail("err");
    let values: Vec<_> = failed.into_iter().collect();
    assert!(values.is_empty());
}

#[test]
fn into_iterator_for_ref_and_mut_validation() {
    let v: Validation<&str, i32> = Validation::success(10);
    let collected: Vec<_> = (&v).into_iter().collect();
    assert_eq!(collected, vec![&10]);

    let mut v2 = Validation::<&str, i32>::success(3);
    for value in &mut v2 {
        *value *= 2;
    }
    assert_eq!(v2.into_value(), Some(6));
}

#[test]
fn collecting_validations_accumulates_failures() {
    let items = vec![
        Validation::success(10),
        Validation::fail("bad"),
        Validation::fail("worse"),
    ];

    let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
    assert_eq!(
        collected.into_failures().unwrap().as_slice(),
        &["bad", "worse"]
    );
}

#[test]
fn collecting_all_success_produces_values_in_order() {
    let collected: Validation<&str, Vec<i32>> =
        (1..=3).map(Validation::<&str, i32>::success).collect();
    assert_eq!(collected, Validation::success(vec![1, 2, 3]));
}

#[test]
fn collecting_empty_iterator_is_success() {
    let collected: Validation<&str, Vec<i32>> =
        std::iter::empty::<Validation<&str, i32>>().collect();
    assert_eq!(collected.into_value(), Some(Vec::new()));
}
