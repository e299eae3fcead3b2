#![no_main]
use arbitrary::Arbitrary;
use arraystack::{ArrayStack, StackError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    TryPush(String),
    Pop,
    Peek,
    Append(String),
    Clear,
}

use self::Action::*;

fuzz_target!(|input: (u8, Vec<Action>)| {
    let capacity = input.0 as usize;
    let mut stack = match ArrayStack::with_capacity(capacity) {
        Ok(stack) => stack,
        Err(error) => {
            assert_eq!(0, capacity);
            assert_eq!(StackError::InvalidArgument { capacity }, error);
            return;
        }
    };
    let mut model: Vec<String> = Vec::new();
    for action in input.1 {
        match action {
            Push(value) => {
                let result = stack.push(value.clone());
                if model.len() < capacity {
                    assert_eq!(Ok(()), result);
                    model.push(value);
                } else {
                    assert_eq!(Err(StackError::CapacityExceeded { capacity }), result);
                }
            }
            TryPush(value) => {
                let result = stack.try_push(value.clone());
                if model.len() < capacity {
                    assert_eq!(Ok(()), result);
                    model.push(value);
                } else {
                    assert_eq!(Err(value), result);
                }
            }
            Pop => {
                assert_eq!(model.pop().ok_or(StackError::EmptyStack), stack.pop());
            }
            Peek => {
                assert_eq!(model.last().ok_or(StackError::EmptyStack), stack.peek());
            }
            Append(suffix) => {
                if let (Some(expected), Ok(actual)) = (model.last_mut(), stack.peek_mut()) {
                    expected.push_str(&suffix);
                    actual.push_str(&suffix);
                }
            }
            Clear => {
                model.clear();
                stack.clear();
            }
        }
        assert_eq!(model.len(), stack.len());
        assert_eq!(model.is_empty(), stack.is_empty());
        assert_eq!(format!("[{}]", model.join(", ")), stack.to_string());
    }
});
