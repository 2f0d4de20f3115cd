use crate::{NullTag, Numeric, Transformation, Value, ValueError, ValueRef};
use crate::func::{Function, transformation};
use lazy_static::lazy_static;
use std::sync::Arc;

lazy_static! {
    static ref NULL: ValueRef = Arc::new(Value::Null(NullTag(())));
}

/// `make_value(NullMarker)` returns the null value.
#[derive(Clone, Copy, Debug)]
pub struct NullMarker;

/// Payloads that `make_value` accepts.
pub trait IntoValue {
    fn into_value(self) -> ValueRef;
}

impl IntoValue for Numeric {
    fn into_value(self) -> ValueRef {
        Arc::new(Value::Number(self))
    }
}

impl IntoValue for bool {
    fn into_value(self) -> ValueRef {
        Arc::new(Value::Boolean(self))
    }
}

impl IntoValue for NullMarker {
    fn into_value(self) -> ValueRef {
        null()
    }
}

// (first, second)
impl IntoValue for (ValueRef, ValueRef) {
    fn into_value(self) -> ValueRef {
        Arc::new(Value::Pair(self.0, self.1))
    }
}

impl IntoValue for Transformation {
    fn into_value(self) -> ValueRef {
        Arc::new(Value::Function(Function::new(self)))
    }
}

pub fn make_value<T: IntoValue>(payload: T) -> ValueRef {
    payload.into_value()
}

pub fn null() -> ValueRef {
    NULL.clone()
}

pub fn make_function<F>(f: F) -> ValueRef
where
    F: Fn(ValueRef) -> Result<ValueRef, ValueError> + Send + Sync + 'static,
{
    make_value(transformation(f))
}
