use linked_bst::{Duplicates, Tree, TreeError};

use quickcheck_macros::quickcheck;

use std::collections::HashSet;

fn sorted<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs
}

/// `ceil(log2(len + 1)) - 1`, worked out with floats on purpose.
fn min_height(len: usize) -> isize {
    ((len + 1) as f64).log2().ceil() as isize - 1
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.in_order().into_iter().copied().collect::<Vec<_>>() == sorted(&xs)
}

#[quickcheck]
fn len_counts_insertions(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.len() == xs.len() && tree.iter().count() == xs.len()
}

#[quickcheck]
fn pre_order_visits_everything_once(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    sorted(&tree.iter().copied().collect::<Vec<_>>()) == sorted(&xs)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x) && tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn remove_decrements_len(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present = xs;

    for delete in &deletes {
        let before = tree.len();
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if tree.remove(delete) != Ok(*delete) || tree.len() != before - 1 {
                    return false;
                }
            }
            None => {
                if tree.remove(delete) != Err(TreeError::KeyNotFound) || tree.len() != before {
                    return false;
                }
            }
        }
    }

    still_present.iter().all(|x| tree.contains(x))
        && deletes
            .iter()
            .filter(|x| !still_present.contains(x))
            .all(|x| !tree.contains(x))
}

#[quickcheck]
fn remove_absent_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    if xs.contains(&x) {
        return true;
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let shape = tree.iter().copied().collect::<Vec<_>>();

    tree.remove(&x) == Err(TreeError::KeyNotFound)
        && tree.len() == xs.len()
        && tree.iter().copied().collect::<Vec<_>>() == shape
}

#[quickcheck]
fn rebalance_keeps_contents_and_balances(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.in_order().into_iter().copied().collect::<Vec<_>>();

    tree.rebalance();
    let once = tree.in_order().into_iter().copied().collect::<Vec<_>>();
    tree.rebalance();
    let twice = tree.in_order().into_iter().copied().collect::<Vec<_>>();

    before == once
        && once == twice
        && tree.is_balanced()
        && tree.height() == min_height(xs.len())
        && tree.len() == xs.len()
}

#[quickcheck]
fn sorted_input_is_a_stick(n: u8) -> bool {
    let tree: Tree<_> = (0..n).collect();

    tree.height() == n as isize - 1 && (tree.is_balanced() == (n <= 2))
}

#[quickcheck]
fn successor_is_smallest_greater(xs: Vec<i8>, probe: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.successor(&probe) == sorted(&xs).iter().find(|x| **x > probe)
}

#[quickcheck]
fn predecessor_is_largest_smaller(xs: Vec<i8>, probe: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.predecessor(&probe) == sorted(&xs).iter().rev().find(|x| **x < probe)
}

#[quickcheck]
fn range_find_slices_between_bounds(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let result = tree.range_find(&low, &high);

    if !xs.contains(&low) || !xs.contains(&high) {
        return result == Err(TreeError::BoundNotFound);
    }
    if low > high {
        return result == Err(TreeError::InvertedRange);
    }

    let expected = sorted(&xs)
        .into_iter()
        .filter(|x| low <= *x && *x < high)
        .collect::<Vec<_>>();
    result.map(|items| items.into_iter().copied().collect::<Vec<_>>()) == Ok(expected)
}

#[quickcheck]
fn rejecting_duplicates_acts_like_a_set(xs: Vec<i8>) -> bool {
    let mut tree = Tree::with_duplicates(Duplicates::Reject);
    let mut seen = HashSet::new();

    let inserts_agree = xs.iter().all(|x| tree.insert(*x) == seen.insert(*x));

    let mut unique = seen.into_iter().collect::<Vec<_>>();
    unique.sort_unstable();

    inserts_agree && tree.in_order().into_iter().copied().collect::<Vec<_>>() == unique
}
