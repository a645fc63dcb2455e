use monty::vm::Stack;

#[test]
fn new_stack_is_empty() {
    let stack = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.peek_top(), None);
    assert_eq!(stack.peek_second(), None);
}

#[test]
fn push_front_puts_value_on_top() {
    let mut stack = Stack::new();
    stack.push_front(1);
    stack.push_front(2);
    assert_eq!(stack.peek_top(), Some(2));
    assert_eq!(stack.peek_second(), Some(1));
    assert_eq!(stack.len(), 2);
}

#[test]
fn pop_front_returns_top_then_none() {
    let mut stack: Stack = [7, 8].into_iter().collect();
    assert_eq!(stack.pop_front(), Some(7));
    assert_eq!(stack.pop_front(), Some(8));
    assert_eq!(stack.pop_front(), None);
}

#[test]
fn iter_walks_top_to_bottom_and_restarts() {
    let mut stack = Stack::new();
    for value in 1..=3 {
        stack.push_front(value);
    }
    let first: Vec<i64> = stack.iter().copied().collect();
    let second: Vec<i64> = stack.iter().copied().collect();
    assert_eq!(first, vec![3, 2, 1]);
    assert_eq!(first, second);
}

#[test]
fn swap_top_exchanges_values() {
    let mut stack: Stack = [1, 2, 3].into_iter().collect();
    stack.swap_top();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
}

#[test]
fn rotations_move_between_top_and_bottom() {
    let mut stack: Stack = [1, 2, 3].into_iter().collect();
    stack.rotate_left();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);
    stack.rotate_right();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    stack.rotate_right();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn rotations_leave_single_element_alone() {
    let mut stack: Stack = [5].into_iter().collect();
    stack.rotate_left();
    stack.rotate_right();
    assert_eq!(stack.peek_top(), Some(5));
    assert_eq!(stack.len(), 1);
}

#[test]
fn top_mut_updates_in_place() {
    let mut stack: Stack = [1, 2].into_iter().collect();
    if let Some(top) = stack.top_mut() {
        *top = 10;
    }
    assert_eq!(stack.peek_top(), Some(10));
    assert_eq!(stack.peek_second(), Some(2));
}

#[test]
fn release_all_is_idempotent() {
    let mut stack: Stack = (0..100).collect();
    stack.release_all();
    assert!(stack.is_empty());
    stack.release_all();
    assert!(stack.is_empty());
}
