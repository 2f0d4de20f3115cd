use crate::{Value, ValueError, ValueRef};
use log::{debug, error};
use std::sync::{Arc, OnceLock};
use std::sync::atomic::{AtomicUsize, Ordering};

/// The unary mapping a function value wraps. It's opaque to this crate:
/// usually a closure over the evaluator's environment.
pub type Transformation = Arc<dyn Fn(ValueRef) -> Result<ValueRef, ValueError> + Send + Sync>;

pub fn transformation<F>(f: F) -> Transformation
where
    F: Fn(ValueRef) -> Result<ValueRef, ValueError> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub struct Function {
    body: Transformation,

    // write-once: the only mutable part of a value
    rebound: OnceLock<Transformation>,

    calls_in_flight: AtomicUsize,
}

impl Function {
    pub(crate) fn new(body: Transformation) -> Self {
        Function {
            body,
            rebound: OnceLock::new(),
            calls_in_flight: AtomicUsize::new(0),
        }
    }

    /// A function whose body is not known yet. Calling it fails until it's rebound.
    pub(crate) fn unbound() -> Self {
        Function::new(transformation(|_| Err(ValueError::unbound_function())))
    }

    pub fn call(&self, argument: ValueRef) -> Result<ValueRef, ValueError> {
        let _guard = CallGuard::enter(&self.calls_in_flight);
        let body = self.rebound.get().unwrap_or(&self.body);

        body(argument)
    }

    pub fn is_rebound(&self) -> bool {
        self.rebound.get().is_some()
    }

    pub(crate) fn rebind(&self, body: Transformation) -> Result<(), ValueError> {
        let calls_in_flight = self.calls_in_flight.load(Ordering::SeqCst);

        if calls_in_flight > 0 {
            error!("rebind rejected: {calls_in_flight} call(s) in flight");
            return Err(ValueError::rebind_during_call(calls_in_flight));
        }

        self.rebound.set(body).map_err(|_| {
            error!("rebind rejected: the function is already rebound");
            ValueError::already_rebound()
        })
    }
}

struct CallGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> CallGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);

        CallGuard { counter }
    }
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The right to give a declared function its body, exactly once.
/// It's consumed by `bind`, so the evaluator cannot bind the same declaration twice.
pub struct FunctionSlot {
    function: ValueRef,
}

impl FunctionSlot {
    pub fn bind(self, body: Transformation) -> Result<(), ValueError> {
        self.function.as_function()?.rebind(body)?;
        debug!("bound a forward-declared function");

        Ok(())
    }

    pub fn function(&self) -> &ValueRef {
        &self.function
    }
}

/// Creates a function before its body is known, for self-referential definitions.
/// Calling it before `FunctionSlot::bind` fails with `UnboundFunction`.
pub fn declare_function() -> (ValueRef, FunctionSlot) {
    let function = Arc::new(Value::Function(Function::unbound()));

    (function.clone(), FunctionSlot { function })
}

/// `(fun f x body)`: `build` receives a handle to the function being defined.
///
/// The handle is strong: a partial application like `((fun f (a b) ...) 0)` may
/// outlive every other holder of `f`. A body that keeps it forms a cycle, and the
/// function is never freed.
pub fn make_recursive<F>(build: F) -> Result<ValueRef, ValueError>
where
    F: FnOnce(ValueRef) -> Transformation,
{
    let (function, slot) = declare_function();
    slot.bind(build(function.clone()))?;

    Ok(function)
}
