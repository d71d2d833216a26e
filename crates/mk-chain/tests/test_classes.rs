//! Integration tests for communication-class analysis, including the
//! property that random valid tables always yield row-stochastic matrices
//! and a complete class partition.

use approx::assert_relative_eq;
use mk_chain::{MarkovChain, TransitionTable};
use proptest::prelude::*;

#[test]
fn absorbing_state_example() {
    // A -> B, B -> C, C -> C: each state is its own SCC,
    // {C} closed, {A} and {B} open
    let table = TransitionTable::from_rows([
        ("A", vec![("B", 1.0)]),
        ("B", vec![("C", 1.0)]),
        ("C", vec![("C", 1.0)]),
    ])
    .unwrap();
    let chain = MarkovChain::new(table).unwrap();

    let closed = chain.closed_classes();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0], vec![&"C"]);

    let mut open: Vec<Vec<&&str>> = chain.open_classes();
    open.sort();
    assert_eq!(open, vec![vec![&"A"], vec![&"B"]]);
}

#[test]
fn symmetric_two_state_chain_is_one_closed_class() {
    let table = TransitionTable::from_rows([
        ("A", vec![("A", 0.5), ("B", 0.5)]),
        ("B", vec![("A", 0.5), ("B", 0.5)]),
    ])
    .unwrap();
    let chain = MarkovChain::new(table).unwrap();
    assert_eq!(chain.communication_classes().len(), 1);
    let closed = chain.closed_classes();
    assert_eq!(closed.len(), 1);
    let mut members = closed[0].clone();
    members.sort();
    assert_eq!(members, vec![&"A", &"B"]);
    assert!(chain.open_classes().is_empty());
}

#[test]
fn single_state_self_loop_is_closed() {
    let table = TransitionTable::from_rows([("only", vec![("only", 1.0)])]).unwrap();
    let chain = MarkovChain::new(table).unwrap();
    assert_eq!(chain.closed_classes(), vec![vec![&"only"]]);
    assert!(chain.open_classes().is_empty());
}

#[test]
fn two_absorbing_classes() {
    // gambler's-ruin shape: both ends absorbing, middle open
    let table = TransitionTable::from_rows([
        ("broke", vec![("broke", 1.0)]),
        ("mid", vec![("broke", 0.5), ("rich", 0.5)]),
        ("rich", vec![("rich", 1.0)]),
    ])
    .unwrap();
    let chain = MarkovChain::new(table).unwrap();
    let mut closed = chain.closed_classes();
    closed.sort();
    assert_eq!(closed, vec![vec![&"broke"], vec![&"rich"]]);
    assert_eq!(chain.open_classes(), vec![vec![&"mid"]]);
}

/// A random valid transition table over `n` integer states: each row gets
/// 1..=n positive weights over distinct targets, normalized to sum 1.
fn arbitrary_table(max_states: usize) -> impl Strategy<Value = TransitionTable<usize>> {
    (1..=max_states)
        .prop_flat_map(|n| {
            proptest::collection::vec(
                proptest::collection::vec((0..n, 1u32..100), 1..=n),
                n,
            )
        })
        .prop_map(|rows| {
            let table: Vec<(usize, Vec<(usize, f64)>)> = rows
                .into_iter()
                .enumerate()
                .map(|(source, targets)| {
                    // deduplicate targets, keeping the first weight
                    let mut seen = std::collections::HashSet::new();
                    let targets: Vec<(usize, u32)> = targets
                        .into_iter()
                        .filter(|&(t, _)| seen.insert(t))
                        .collect();
                    let total: f64 = targets.iter().map(|&(_, w)| w as f64).sum();
                    (
                        source,
                        targets
                            .into_iter()
                            .map(|(t, w)| (t, w as f64 / total))
                            .collect(),
                    )
                })
                .collect();
            TransitionTable::from_rows(table).unwrap()
        })
}

proptest! {
    #[test]
    fn rows_always_sum_to_one(table in arbitrary_table(8)) {
        let chain = MarkovChain::new(table).unwrap();
        let m = chain.transition_matrix();
        for i in 0..chain.len() {
            assert_relative_eq!(m.row_sum(i), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn classes_partition_the_state_set(table in arbitrary_table(8)) {
        let chain = MarkovChain::new(table).unwrap();
        let classes = chain.communication_classes();
        let mut all: Vec<usize> = classes
            .iter()
            .flat_map(|(members, _)| members.iter().copied())
            .collect();
        all.sort_unstable();
        let expected: Vec<usize> = (0..chain.len()).collect();
        // exactly one class per state, no duplicates, full coverage
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn at_least_one_closed_class_exists(table in arbitrary_table(8)) {
        // a finite chain always has at least one absorbing class
        let chain = MarkovChain::new(table).unwrap();
        prop_assert!(!chain.communication_classes().closed().is_empty());
    }
}
