use crate::*;
use std::sync::{Arc, Weak};

fn upgrade(f: &Weak<Value>) -> Result<ValueRef, ValueError> {
    f.upgrade().ok_or_else(ValueError::unbound_function)
}

// what an evaluator does with `(let ((even? ...) (odd? ...)) ...)` whose bodies refer to each other
#[test]
fn mutual_recursion() {
    let (even, even_slot) = declare_function();
    let (odd, odd_slot) = declare_function();
    let (weak_even, weak_odd) = (Arc::downgrade(&even), Arc::downgrade(&odd));

    even_slot.bind(transformation(move |n| match n.get_number()? {
        0 => Ok(make_value(true)),
        n => upgrade(&weak_odd)?.call(make_value(n - 1)),
    })).unwrap();
    odd_slot.bind(transformation(move |n| match n.get_number()? {
        0 => Ok(make_value(false)),
        n => upgrade(&weak_even)?.call(make_value(n - 1)),
    })).unwrap();

    for n in 0..50 {
        assert_eq!(even.call(make_value(n)).unwrap().get_boolean().unwrap(), n % 2 == 0);
        assert_eq!(odd.call(make_value(n)).unwrap().get_boolean().unwrap(), n % 2 == 1);
    }
}

#[test]
fn map_over_a_list() {
    // (fun map (f l) (if (is_null l) null (pair (f (first l)) (map f (second l)))))
    let map = make_recursive(
        |this| transformation(move |f| {
            let this = this.clone();

            Ok(make_function(move |l| {
                if prelude("is_null").unwrap().call(l.clone())?.get_boolean()? {
                    return Ok(null());
                }

                let head = f.call(l.get_first()?)?;
                let tail = this.call(f.clone())?.call(l.get_second()?)?;

                Ok(make_value((head, tail)))
            }))
        })
    ).unwrap();
    let double = make_function(|x| Ok(make_value(x.get_number()? * 2)));
    let list = make_list((1..=4).map(make_value));

    assert_eq!(
        map.call(double.clone()).unwrap().call(list).unwrap().serialize(),
        "(pair 2 (pair 4 (pair 6 (pair 8 null))))",
    );

    let e = map.call(double).unwrap().call(make_list(vec![make_value(true)])).unwrap_err();
    assert_eq!(e.to_string(), "cannot get the numeric value of a boolean");
}

fn random_value(depth: usize) -> ValueRef {
    match rand::random::<u8>() % if depth == 0 { 4 } else { 5 } {
        0 => make_value(rand::random::<i32>() as Numeric),
        1 => make_value(rand::random::<bool>()),
        2 => null(),
        3 => make_function(|x| Ok(x)),
        _ => make_value((random_value(depth - 1), random_value(depth - 1))),
    }
}

// the obvious recursive rendering
fn render(v: &Value) -> String {
    match v {
        Value::Number(n) => n.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Null(_) => String::from("null"),
        Value::Pair(a, b) => format!("(pair {} {})", render(a), render(b)),
        Value::Function(_) => String::from("function"),
    }
}

#[test]
fn random_trees() {
    for _ in 0..256 {
        let v = random_value(6);

        assert_eq!(v.serialize(), render(&v));
        assert_eq!(v.serialize(), v.serialize());
        assert_eq!(v.is_null(), v.kind() == ValueKind::Null);

        if let Value::Pair(a, b) = v.as_ref() {
            assert!(Arc::ptr_eq(&v.get_first().unwrap(), a));
            assert!(Arc::ptr_eq(&v.get_second().unwrap(), b));
        }
    }
}

#[test]
fn error_surface() {
    let e = try_prelude("cdr").unwrap_err();

    assert_eq!(e.get_error_info().context(), ErrorContext::EvaluatingPrelude);
    assert!(matches!(e.kind(), PreludeErrorKind::UnknownName { .. }));
    assert!(e.render_error(&RenderOption::plain()).starts_with("[Error while evaluating a prelude function]\nE0200: no prelude named `cdr`"));
    assert_eq!(PRELUDES.len(), 5);
}
