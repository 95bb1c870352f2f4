use bst_engine::{Traversal, Tree};

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a sorted `Vec` acting as a
/// multiset. This way we can ensure that after a random smattering of
/// inserts and deletes both hold the same values the same number of times.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                bst.insert(value.clone());
                let at = model.partition_point(|x| x <= value);
                model.insert(at, value.clone());
            }
            Op::Delete(value) => {
                if bst.delete(value).is_ok() {
                    let at = model
                        .binary_search(value)
                        .expect("tree deleted a value the model doesn't hold");
                    model.remove(at);
                }
            }
        }
    }
}

fn inorder<T: Ord + Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.traverse(Traversal::Inorder).into_iter().cloned().collect()
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i16>) -> bool {
        init_tracing();
        let tree: Tree<i16> = xs.iter().copied().collect();

        let mut sorted = xs;
        sorted.sort();
        inorder(&tree) == sorted
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        init_tracing();
        let mut tree = Tree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        inorder(&tree) == model && tree.compute_size() == model.len()
    }
}

quickcheck::quickcheck! {
    fn size_is_inserts_minus_deletes(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        init_tracing();
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let successes = deletes.iter().filter(|x| tree.delete(x).is_ok()).count();

        tree.compute_size() == xs.len() - successes
    }
}

quickcheck::quickcheck! {
    fn membership_round_trip(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        init_tracing();
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let mut still_present = xs;
        for delete in &deletes {
            // Delete every occurrence so the value is gone for good.
            while tree.delete(delete).is_ok() {}
            still_present.retain(|x| x != delete);
        }

        deletes.iter().all(|x| tree.search(x).is_err())
            && still_present.iter().all(|x| tree.search(x).is_ok())
    }
}

quickcheck::quickcheck! {
    fn delete_removes_exactly_one_occurrence(xs: Vec<i8>, pick: usize) -> bool {
        init_tracing();
        if xs.is_empty() {
            return true;
        }
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let target = xs[pick % xs.len()];

        let mut expected = inorder(&tree);
        let at = expected.binary_search(&target).unwrap();
        expected.remove(at);

        tree.delete(&target) == Ok(target) && inorder(&tree) == expected
    }
}

quickcheck::quickcheck! {
    fn metadata_agrees_with_queries(xs: Vec<i8>) -> bool {
        init_tracing();
        let tree: Tree<i8> = xs.iter().copied().collect();
        let metadata = tree.metadata();

        let heights_agree = metadata.height(true) + 1 == metadata.height(false);
        let edges_agree = xs.is_empty() || metadata.edge_count() + 1 == metadata.size();
        let extrema_agree = tree.compute_min_node().ok() == xs.iter().min()
            && tree.compute_max_node().ok() == xs.iter().max();
        let depths_in_range = (0..metadata.size())
            .all(|id| (metadata.depth(id) as isize) <= metadata.height(true));

        heights_agree && edges_agree && extrema_agree && depths_in_range
    }
}
