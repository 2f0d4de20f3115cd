use crate::{Value, ValueRef, null};
use smallvec::SmallVec;
use std::sync::Arc;

// The default drop glue recurses once per nested pair, which overflows the
// stack on long lists. Children this value owns alone are unlinked here instead.
impl Drop for Value {
    fn drop(&mut self) {
        let mut stack: SmallVec<[ValueRef; 8]> = SmallVec::new();
        take_children(self, &mut stack);

        while let Some(child) = stack.pop() {
            if let Ok(mut child) = Arc::try_unwrap(child) {
                take_children(&mut child, &mut stack);
            }
        }
    }
}

fn take_children(value: &mut Value, stack: &mut SmallVec<[ValueRef; 8]>) {
    if let Value::Pair(first, second) = value {
        if matches!(first.as_ref(), Value::Pair(_, _)) {
            stack.push(std::mem::replace(first, null()));
        }

        if matches!(second.as_ref(), Value::Pair(_, _)) {
            stack.push(std::mem::replace(second, null()));
        }
    }
}
