use quickcheck::{Arbitrary, Gen};

mod tree;

/// Installs a subscriber honouring `RUST_LOG` so failing cases can be
/// replayed with the tree's events visible. Safe to call from every test.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Delete one occurrence of the value from the data structure
    Delete(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) || bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Delete(T::arbitrary(g))
        }
    }
}
