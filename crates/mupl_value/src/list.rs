use crate::{ValueError, ValueRef, make_value, null};
use mupl_error::{ErrorContext, MuplError};

/// `[1, 2, 3]` -> `(pair 1 (pair 2 (pair 3 null)))`
pub fn make_list<I>(elements: I) -> ValueRef
where
    I: IntoIterator<Item = ValueRef>,
    I::IntoIter: DoubleEndedIterator,
{
    elements.into_iter().rev().fold(
        null(),
        |tail, element| make_value((element, tail)),
    )
}

/// The inverse of `make_list`. A chain that doesn't end with null is an error.
pub fn list_to_vec(list: &ValueRef) -> Result<Vec<ValueRef>, ValueError> {
    let mut result = vec![];
    let mut curr = list.clone();

    while !curr.is_null() {
        let (first, second) = match (curr.get_first(), curr.get_second()) {
            (Ok(first), Ok(second)) => (first, second),
            (Err(mut e), _)
            | (_, Err(mut e)) => {
                e.set_error_context(ErrorContext::BuildingList);
                e.set_message(format!("improper list: the tail after {} element(s) is `{curr}`", result.len()));

                return Err(e);
            },
        };

        result.push(first);
        curr = second;
    }

    Ok(result)
}
