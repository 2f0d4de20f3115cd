#![deny(unused_imports)]

//! Runtime values of mupl.
//!
//! Every value is immutable and shared through `ValueRef`. The only exception is
//! a function declared with `declare_function`, whose body is bound once, later.

use std::sync::Arc;

mod dealloc;
mod error;
mod factory;
mod fmt;
mod func;
mod kind;
mod list;


pub use error::{ValueError, ValueErrorKind};
pub use factory::{IntoValue, NullMarker, make_function, make_value, null};
pub use func::{
    Function,
    FunctionSlot,
    Transformation,
    declare_function,
    make_recursive,
    transformation,
};
pub use kind::{Operation, ValueKind};
pub use list::{list_to_vec, make_list};

pub type Numeric = i64;
pub type ValueRef = Arc<Value>;

pub enum Value {
    Number(Numeric),
    Boolean(bool),

    // there's only one instance of it: see `null()`
    Null(NullTag),

    Pair(ValueRef, ValueRef),
    Function(Function),
}

/// Only this crate can construct `Value::Null`.
pub struct NullTag(());

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null(_) => ValueKind::Null,
            Value::Pair(_, _) => ValueKind::Pair,
            Value::Function(_) => ValueKind::Function,
        }
    }

    pub fn get_number(&self) -> Result<Numeric, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.mismatch(Operation::GetNumber)),
        }
    }

    pub fn get_boolean(&self) -> Result<bool, ValueError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(Operation::GetBoolean)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }

    /// It returns the very `ValueRef` the pair was built with, not a copy.
    pub fn get_first(&self) -> Result<ValueRef, ValueError> {
        match self {
            Value::Pair(first, _) => Ok(first.clone()),
            _ => Err(self.mismatch(Operation::GetFirst)),
        }
    }

    pub fn get_second(&self) -> Result<ValueRef, ValueError> {
        match self {
            Value::Pair(_, second) => Ok(second.clone()),
            _ => Err(self.mismatch(Operation::GetSecond)),
        }
    }

    /// Errors raised by the function body are returned as they are.
    pub fn call(&self, argument: ValueRef) -> Result<ValueRef, ValueError> {
        self.as_function()?.call(argument)
    }

    pub fn as_function(&self) -> Result<&Function, ValueError> {
        match self {
            Value::Function(f) => Ok(f),
            _ => Err(self.mismatch(Operation::Call)),
        }
    }

    fn mismatch(&self, operation: Operation) -> ValueError {
        ValueError::type_mismatch(operation, self.kind())
    }
}
