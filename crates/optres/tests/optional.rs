use optres::{Optional, Result, UnwrapError};

#[test]
fn test_variant_queries() {
    let some = Optional::Some(3);
    let none: Optional<i32> = Optional::None;

    assert!(some.is_some() && !some.is_none());
    assert!(none.is_none() && !none.is_some());
    assert!(some.is_some_and(|v| v == 3));
    assert!(!none.is_some_and(|_| true));
    assert!(none.is_none_or(|_| false));
    assert!(!some.is_none_or(|v| v > 3));
}

#[test]
fn test_unwrap_and_expect_on_some() {
    assert_eq!(Optional::Some("a").unwrap(), "a");
    assert_eq!(Optional::Some(1).expect("present"), 1);
}

#[test]
#[should_panic(expected = "called `Optional::unwrap()` on a `None` value")]
fn test_unwrap_on_none_panics() {
    let none: Optional<u8> = Optional::None;
    none.unwrap();
}

#[test]
#[should_panic(expected = "missing")]
fn test_expect_on_none_panics_with_message() {
    let none: Optional<u8> = Optional::None;
    none.expect("missing");
}

#[test]
fn test_try_unwrap_returns_error() {
    let none: Optional<u8> = Optional::None;
    let err = none.try_expect("config value").unwrap_err();
    assert_eq!(err, UnwrapError::empty("config value"));
    assert_eq!(err.message(), "config value");
    assert_eq!(err.payload(), None);
    assert_eq!(err.to_string(), "config value");

    assert_eq!(Optional::Some(9).try_unwrap(), Ok(9));
}

#[test]
fn test_unwrap_fallbacks() {
    let none: Optional<i32> = Optional::None;
    assert_eq!(none.unwrap_or(7), 7);
    assert_eq!(Optional::Some(1).unwrap_or(7), 1);

    let mut called = false;
    let val = Optional::Some(1).unwrap_or_else(|| {
        called = true;
        0
    });
    assert_eq!(val, 1);
    assert!(!called);
    assert_eq!(none.unwrap_or_else(|| 42), 42);
}

#[test]
#[should_panic(expected = "`Optional::unwrap_or_default` is not supported")]
fn test_unwrap_or_default_is_unsupported() {
    let _ = Optional::Some(5).unwrap_or_default();
}

#[test]
#[should_panic(expected = "use `Optional::get_or_insert_with` instead")]
fn test_get_or_insert_default_is_unsupported() {
    let mut none: Optional<String> = Optional::None;
    none.get_or_insert_default();
}

#[test]
fn test_ok_or() {
    assert_eq!(Optional::Some(1).ok_or("e"), Result::Ok(1));
    assert_eq!(Optional::<i32>::None.ok_or("e"), Result::Err("e"));
    assert_eq!(Optional::<i32>::None.ok_or_else(|| 5u8), Result::Err(5u8));

    let mut called = false;
    let res: Result<i32, ()> = Optional::Some(2).ok_or_else(|| called = true);
    assert_eq!(res, Result::Ok(2));
    assert!(!called);
}

#[test]
fn test_filter() {
    let is_even = |v: &i32| v % 2 == 0;
    assert_eq!(Optional::Some(4).filter(is_even), Optional::Some(4));
    assert_eq!(Optional::Some(3).filter(is_even), Optional::None);
    assert_eq!(Optional::None.filter(is_even), Optional::None);
}

#[test]
fn test_flatten_removes_one_level() {
    assert_eq!(Optional::Some(Optional::Some(1)).flatten(), Optional::Some(1));
    assert_eq!(Optional::Some(Optional::<i32>::None).flatten(), Optional::None);
    assert_eq!(Optional::<Optional<i32>>::None.flatten(), Optional::None);

    let deep = Optional::Some(Optional::Some(Optional::Some(3)));
    assert_eq!(deep.flatten(), Optional::Some(Optional::Some(3)));
    assert_eq!(deep.flatten().flatten(), Optional::Some(3));
}

#[test]
fn test_map_family() {
    let some = Optional::Some("four");
    let none: Optional<&str> = Optional::None;

    assert_eq!(some.map(str::len), Optional::Some(4));
    assert_eq!(none.map(str::len), Optional::None);
    assert_eq!(some.map_or(0, str::len), 4);
    assert_eq!(none.map_or(0, str::len), 0);
    assert_eq!(some.map_or_else(|| 99, str::len), 4);
    assert_eq!(none.map_or_else(|| 99, str::len), 99);
}

#[test]
fn test_inspect_only_sees_some() {
    let mut seen = Vec::new();
    let out = Optional::Some(3).inspect(|v| seen.push(*v));
    assert_eq!(out, Optional::Some(3));
    let out = Optional::<i32>::None.inspect(|v| seen.push(*v));
    assert_eq!(out, Optional::None);
    assert_eq!(seen, vec![3]);
}

#[test]
fn test_zip_and_unzip() {
    let a = Optional::Some(1);
    let b = Optional::Some("b");
    let none: Optional<&str> = Optional::None;

    assert_eq!(a.zip(b), Optional::Some((1, "b")));
    assert_eq!(a.zip(none), Optional::None);
    assert_eq!(Optional::<i32>::None.zip(b), Optional::None);
    assert_eq!(a.zip_with(Optional::Some(2), |x, y| x + y), Optional::Some(3));
    assert_eq!(a.zip_with(Optional::<i32>::None, |x, y| x + y), Optional::None);

    assert_eq!(a.zip(b).unzip(), (a, b));
    assert_eq!(
        Optional::<(i32, &str)>::None.unzip(),
        (Optional::None, Optional::None)
    );
}

#[test]
fn test_boolean_combinators() {
    let one = Optional::Some(1);
    let two = Optional::Some(2);
    let none: Optional<i32> = Optional::None;

    assert_eq!(one.and(Optional::Some("x")), Optional::Some("x"));
    assert_eq!(one.and(Optional::<&str>::None), Optional::None);
    assert_eq!(none.and(Optional::Some("x")), Optional::None);

    assert_eq!(one.or(two), one);
    assert_eq!(none.or(two), two);
    assert_eq!(none.or(none), none);

    assert_eq!(one.xor(two), Optional::None);
    assert_eq!(none.xor(two), Optional::Some(2));
    assert_eq!(one.xor(none), Optional::Some(1));
    assert_eq!(none.xor(none), Optional::None);
}

#[test]
fn test_and_then_and_or_else() {
    let half = |v: i32| {
        if v % 2 == 0 {
            Optional::Some(v / 2)
        } else {
            Optional::None
        }
    };

    assert_eq!(Optional::Some(8).and_then(half), Optional::Some(4));
    assert_eq!(Optional::Some(3).and_then(half), Optional::None);
    assert_eq!(Optional::None.and_then(half), Optional::None);

    assert_eq!(Optional::Some(1).or_else(|| Optional::Some(2)), Optional::Some(1));
    assert_eq!(Optional::None.or_else(|| Optional::Some(2)), Optional::Some(2));
    assert_eq!(Optional::<i32>::None.or_else(|| Optional::None), Optional::None);
}

#[test]
fn test_into_iter_yields_at_most_once() {
    assert_eq!(Optional::Some(7).into_iter().collect::<Vec<_>>(), vec![7]);
    assert_eq!(Optional::<i32>::None.into_iter().collect::<Vec<_>>(), Vec::<i32>::new());

    let mut iter = Optional::Some(7).into_iter();
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(7));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);

    let mut total = 0;
    for v in Optional::Some(5) {
        total += v;
    }
    assert_eq!(total, 5);
}

#[test]
fn test_insert_overwrites() {
    let mut opt: Optional<i32> = Optional::None;
    let val = opt.insert(1);
    assert_eq!(*val, 1);
    *val = 2;
    assert_eq!(opt, Optional::Some(2));

    let val = opt.insert(3);
    assert_eq!(*val, 3);
    assert_eq!(opt, Optional::Some(3));
}

#[test]
fn test_get_or_insert_keeps_existing() {
    let mut opt = Optional::Some(1);
    assert_eq!(*opt.get_or_insert(5), 1);

    let mut none: Optional<i32> = Optional::None;
    *none.get_or_insert(5) += 1;
    assert_eq!(none, Optional::Some(6));
}

#[test]
fn test_get_or_insert_with_is_lazy() {
    let mut calls = 0;
    let mut opt: Optional<i32> = Optional::None;

    let first = *opt.get_or_insert_with(|| {
        calls += 1;
        10
    });
    let second = *opt.get_or_insert_with(|| {
        calls += 1;
        20
    });
    assert_eq!((first, second), (10, 10));
    assert_eq!(calls, 1);
    assert_eq!(opt, Optional::Some(10));
}

#[test]
fn test_take_and_replace() {
    let mut opt = Optional::Some(1);

    let taken = opt.take();
    assert_eq!(taken, Optional::Some(1));
    assert!(opt.is_none());
    assert_eq!(opt.take(), Optional::None);

    let prev = opt.replace(2);
    assert_eq!(prev, Optional::None);
    assert_eq!(opt, Optional::Some(2));

    let prev = opt.replace(3);
    assert_eq!(prev, Optional::Some(2));
    assert_eq!(opt, Optional::Some(3));
}

#[test]
fn test_mutators_leave_arguments_alone() {
    let mut left = Optional::Some(1);
    let right = Optional::Some(2);
    let _ = left.or(right);
    let _ = left.replace(5);
    assert_eq!(right, Optional::Some(2));
}

#[test]
fn test_std_option_conversions() {
    assert_eq!(Optional::<i32>::from(Some(1)), Optional::Some(1));
    assert_eq!(Optional::<i32>::from(None), Optional::None);
    assert_eq!(Optional::Some(1).into_option(), Some(1));
    assert_eq!(Optional::<i32>::None.into_option(), None);
    assert_eq!(Optional::<i32>::default(), Optional::None);
}

#[test]
fn test_from_conversions_both_ways() {
    let wrapped: Optional<i32> = 5.into();
    assert_eq!(wrapped, Optional::Some(5));
    assert_eq!(Optional::<&str>::from("text"), Optional::Some("text"));

    let lifted: Optional<Option<i32>> = Optional::from(Some(1));
    assert_eq!(lifted, Optional::Some(Some(1)));

    let std_some: Option<i32> = Optional::Some(3).into();
    let std_none: Option<i32> = Optional::<i32>::None.into();
    assert_eq!(std_some, Some(3));
    assert_eq!(std_none, None);

    let round_trip: Option<i32> = Optional::<i32>::from(Some(4)).into();
    assert_eq!(round_trip, Some(4));
}
