#![deny(unused_imports)]

use lazy_static::lazy_static;
use log::debug;
use mupl_error::{ErrorContext, MuplError};
use mupl_value::{ValueError, ValueRef, make_function, make_value, null};
use std::collections::HashMap;

mod error;


pub use error::{PreludeError, PreludeErrorKind};

// it generates helper functions for preludes
// for ex, FIRST: ValueRef is the same value as `prelude("first")`
macro_rules! prelude_ref {
    ($name: ident, $sym: literal) => {
        lazy_static! {
            pub static ref $name: ValueRef = PRELUDES.get($sym).cloned().unwrap_or_else(null);
        }
    }
}

prelude_ref!(PAIR, "pair");
prelude_ref!(FIRST, "first");
prelude_ref!(SECOND, "second");
prelude_ref!(IS_NULL, "is_null");

lazy_static! {
    pub static ref PRELUDES: HashMap<&'static str, ValueRef> = {
        let preludes = vec![
            // (pair a b), curried
            ("pair", make_function(
                |first| Ok(make_function(
                    move |second| Ok(make_value((first.clone(), second)))
                ))
            )),
            ("first", make_function(
                |p| p.get_first().map_err(|e| in_prelude(e, "first"))
            )),
            ("second", make_function(
                |p| p.get_second().map_err(|e| in_prelude(e, "second"))
            )),
            ("is_null", make_function(|v| Ok(make_value(v.is_null())))),
            ("null", null()),
        ];
        let mut result = HashMap::with_capacity(preludes.len());

        for (name, value) in preludes.into_iter() {
            result.insert(name, value);
        }

        debug!("built {} prelude values", result.len());
        result
    };
}

pub fn prelude(name: &str) -> Option<ValueRef> {
    PRELUDES.get(name).cloned()
}

pub fn try_prelude(name: &str) -> Result<ValueRef, PreludeError> {
    prelude(name).ok_or_else(
        || PreludeError::unknown_name(
            name,
            PRELUDES.keys().map(|n| n.to_string()).collect(),
        )
    )
}

fn in_prelude(mut e: ValueError, name: &str) -> ValueError {
    e.set_error_context(ErrorContext::EvaluatingPrelude);
    e.set_message(format!("in prelude function `{name}`"));

    e
}
