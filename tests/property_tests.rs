//! Property-based tests for machine traversal.
//!
//! These tests use proptest to verify the traversal laws hold across many
//! randomly generated graphs and input sequences.

use proptest::prelude::*;
use trellis::{Machine, MachineBuilder, TransitionError};

// Input symbol 0 advances the chain one state; no other symbol is
// registered anywhere.
const ADVANCE: u32 = 0;

/// Straight-line machine over states 0..=len with the last state terminal.
fn chain_machine(len: usize) -> Machine<usize, u32> {
    let mut builder = MachineBuilder::new();
    for state in 0..len {
        builder = builder
            .transition(state, ADVANCE, state + 1)
            .expect("chain has no duplicate edges");
    }
    builder
        .terminal(len)
        .expect("single terminal declaration")
        .build(0)
        .expect("a straight line to a terminal state always validates")
}

prop_compose! {
    fn chain_and_split()(len in 1usize..12)(len in Just(len), split in 0..=len) -> (usize, usize) {
        (len, split)
    }
}

prop_compose! {
    fn chain_and_position()(len in 1usize..12)(len in Just(len), position in 0..=len) -> (usize, usize) {
        (len, position)
    }
}

proptest! {
    #[test]
    fn process_is_a_left_fold((len, split) in chain_and_split()) {
        let mut in_one_call = chain_machine(len);
        in_one_call.process(vec![ADVANCE; len]).unwrap();

        let mut in_two_calls = chain_machine(len);
        in_two_calls.process(vec![ADVANCE; split]).unwrap();
        in_two_calls.process(vec![ADVANCE; len - split]).unwrap();

        prop_assert_eq!(in_one_call.peek(), in_two_calls.peek());
        prop_assert!(in_one_call.is_terminated());
    }

    #[test]
    fn process_equals_repeated_step((len, _) in chain_and_split()) {
        let mut processed = chain_machine(len);
        processed.process(vec![ADVANCE; len]).unwrap();

        let mut stepped = chain_machine(len);
        for _ in 0..len {
            stepped.step(ADVANCE).unwrap();
        }

        prop_assert_eq!(processed.peek(), stepped.peek());
    }

    #[test]
    fn reset_always_restores_the_initial_state((len, position) in chain_and_position()) {
        let mut machine = chain_machine(len);
        machine.process(vec![ADVANCE; position]).unwrap();

        machine.reset();

        prop_assert_eq!(machine.peek(), &0);
        prop_assert_eq!(machine.peek(), machine.initial_state());
    }

    #[test]
    fn reset_restores_the_initial_state_after_a_failure((len, position) in chain_and_position()) {
        let mut machine = chain_machine(len);
        let mut inputs = vec![ADVANCE; position];
        inputs.push(99);

        machine.process(inputs).unwrap_err();
        machine.reset();

        prop_assert_eq!(machine.peek(), &0);
    }

    #[test]
    fn terminated_iff_cursor_is_in_the_terminal_set((len, position) in chain_and_position()) {
        let mut machine = chain_machine(len);
        machine.process(vec![ADVANCE; position]).unwrap();

        prop_assert_eq!(
            machine.is_terminated(),
            machine.terminal_states().contains(machine.peek())
        );
        prop_assert_eq!(machine.is_terminated(), position == len);
    }

    #[test]
    fn empty_process_never_moves_the_cursor((len, position) in chain_and_position()) {
        let mut machine = chain_machine(len);
        machine.process(vec![ADVANCE; position]).unwrap();
        let before = *machine.peek();

        machine.process([]).unwrap();

        prop_assert_eq!(machine.peek(), &before);
    }

    #[test]
    fn failure_leaves_the_cursor_at_the_last_good_state((len, position) in chain_and_position()) {
        let mut machine = chain_machine(len);
        let mut inputs = vec![ADVANCE; position];
        inputs.push(99);
        // Anything after the failure must not be consumed.
        inputs.extend([ADVANCE, ADVANCE]);

        let err = machine.process(inputs).unwrap_err();

        prop_assert_eq!(machine.peek(), &position);
        let TransitionError::UnrecognizedInput { state, input } = err;
        prop_assert_eq!(state, format!("{position:?}"));
        prop_assert_eq!(input, "99".to_string());
    }

    #[test]
    fn clones_traverse_independently((len, position) in chain_and_position()) {
        let mut original = chain_machine(len);
        let copy = original.clone();

        original.process(vec![ADVANCE; position]).unwrap();

        prop_assert_eq!(original.peek(), &position);
        prop_assert_eq!(copy.peek(), &0);
    }
}
