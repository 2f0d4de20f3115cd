#![deny(unused_imports)]

//! Values of mupl, a tiny functional language: numbers, booleans, null, pairs and functions.
//!
//! The evaluator builds values with `make_value`, inspects them through the
//! methods of `Value`, and prints them with `Value::serialize`.

#[cfg(test)]
mod tests;

pub use mupl_error::{
    ErrorContext,
    MuplError,
    MuplErrorKind,
    RenderOption,
};
pub use mupl_prelude::{
    PRELUDES,
    PreludeError,
    PreludeErrorKind,
    prelude,
    try_prelude,
};
pub use mupl_value::{
    Function,
    FunctionSlot,
    IntoValue,
    NullMarker,
    Numeric,
    Operation,
    Transformation,
    Value,
    ValueError,
    ValueErrorKind,
    ValueKind,
    ValueRef,
    declare_function,
    list_to_vec,
    make_function,
    make_list,
    make_recursive,
    make_value,
    null,
    transformation,
};
