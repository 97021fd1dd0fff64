use konad_rail::convert::*;
use konad_rail::validation::Validation;
use konad_rail::{ErrorChain, FailChain};

#[test]
fn result_to_validation_handles_both_variants() {
    let ok: Result<i32, ErrorChain<&str>> = Ok(3);
    assert_eq!(result_to_validation(ok), Validation::success(3));

    let err: Result<i32, _> = Err(ErrorChain::new("fail"));
    assert_eq!(result_to_validation(err), Validation::fail("fail"));
}

#[test]
fn result_to_validation_rebuilds_chain_one_to_one() {
    let errors = ErrorChain::new("a").then("b").then("c");
    let validation = result_to_validation(Err::<(), _>(errors));

    assert_eq!(
        validation,
        Validation::Fail(FailChain::new("a").push("b").push("c"))
    );
}

#[test]
fn validation_to_result_handles_both_variants() {
    assert_eq!(validation_to_result(Validation::<&str, i32>::success(7)), Ok(7));
    assert_eq!(
        validation_to_result(Validation::<&str, i32>::fail("boom")),
        Err(ErrorChain::new("boom"))
    );
}

#[test]
fn round_trip_preserves_ordered_failures() {
    let original = ErrorChain::new("first").then("second").then("third");
    let validation = result_to_validation(Err::<i32, _>(original.clone()));

    assert_eq!(
        validation.iter_failures().copied().collect::<Vec<_>>(),
        vec!["first", "second", "third"]
    );

    let back = validation_to_result(validation).unwrap_err();
    assert_eq!(back, original);
    assert_eq!(back.errors().as_slice(), &[&"first", &"second", &"third"]);
}

#[test]
fn if_errors_transforms_only_on_error() {
    let mut calls = 0;
    let ok: Validation<String, i32> = if_errors(Ok::<i32, u16>(1), |code| {
        calls += 1;
        format!("HTTP {code}")
    });
    assert_eq!(ok, Validation::success(1));
    assert_eq!(calls, 0);

    let err: Validation<String, i32> = if_errors(Err::<i32, u16>(404), |code| format!("HTTP {code}"));
    assert_eq!(err, Validation::fail("HTTP 404".to_string()));
}

#[test]
fn option_to_validation_invokes_thunk_only_when_empty() {
    let mut calls = 0;
    let present = option_to_validation(Some(1), || {
        calls += 1;
        "missing"
    });
    assert_eq!(present, Validation::success(1));
    assert_eq!(calls, 0);

    let absent = option_to_validation(None::<i32>, || "missing");
    assert_eq!(absent, Validation::fail("missing"));
}

#[test]
fn long_chains_round_trip_without_recursion() {
    let count = 200_000u32;
    let errors = (1..count).fold(ErrorChain::new(0u32), ErrorChain::then);
    assert_eq!(errors.to_string().split(" -> ").count(), count as usize);

    let validation = result_to_validation(Err::<(), _>(errors.clone()));
    assert_eq!(validation.fail_chain().map(FailChain::len), Some(count as usize));

    let back = validation_to_result(validation);
    assert_eq!(back, Err(errors));
}

#[test]
fn long_flattened_run_converts_to_error_chain() {
    let count = 150_000u32;
    let all = konad_rail::flatten((0..count).map(Validation::<u32, ()>::fail));

    let errors = validation_to_result(all).unwrap_err();
    let ordered = errors.into_errors();
    assert_eq!(ordered.len(), count as usize);
    assert!(ordered.iter().copied().eq(0..count));
}
