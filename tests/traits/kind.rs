use konad_rail::traits::{ApplicativeFunctor, Functor, Monad, OptionOf, ResultOf};

fn add_one<K: Functor>(value: K::Of<i32>) -> K::Of<i32> {
    K::map_k(value, |x| x + 1)
}

#[test]
fn generic_map_over_result_and_option() {
    assert_eq!(add_one::<OptionOf>(Some(1)), Some(2));
    assert_eq!(add_one::<OptionOf>(None), None);
    assert_eq!(add_one::<ResultOf<&str>>(Ok(1)), Ok(2));
    assert_eq!(add_one::<ResultOf<&str>>(Err("e")), Err("e"));
}

#[test]
fn result_ap_k_prefers_lifted_error() {
    let value: Result<i32, &str> = Err("value");
    let lifted: Result<fn(i32) -> i32, &str> = Err("lifted");
    assert_eq!(ResultOf::<&str>::ap_k(value, lifted), Err("lifted"));

    let lifted_ok: Result<fn(i32) -> i32, &str> = Ok(|x| x * 3);
    assert_eq!(ResultOf::<&str>::ap_k(Err("value"), lifted_ok), Err("value"));
    assert_eq!(ResultOf::<&str>::ap_k(Ok(2), lifted_ok), Ok(6));
}

#[test]
fn result_flat_map_k_short_circuits() {
    let result = ResultOf::<&str>::flat_map_k(Err::<i32, _>("stop"), |x| Ok(x + 1));
    assert_eq!(result, Err("stop"));
}

#[test]
fn option_ap_k_requires_both() {
    let lifted: Option<fn(i32) -> i32> = Some(|x| x - 1);
    assert_eq!(OptionOf::ap_k(Some(5), lifted), Some(4));
    assert_eq!(OptionOf::ap_k(None, lifted), None);

    let missing: Option<fn(i32) -> i32> = None;
    assert_eq!(OptionOf::ap_k(Some(5), missing), None);
}

#[test]
fn pure_k_wraps_value() {
    assert_eq!(OptionOf::pure_k("x"), Some("x"));
    assert_eq!(ResultOf::<()>::pure_k(1), Ok(1));
}
