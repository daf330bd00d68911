use std::fmt::Debug;

use forward_list::{prelude::*, traits::iter::same_items};
use rand::{
    distributions::{Distribution, Standard},
    rngs::StdRng,
    Rng, SeedableRng,
};
use thiserror::Error;

use crate::list_ops::{ListOperation, ListOperationGenerator, Outcome};

mod traits;
pub use traits::*;

pub type ListFailure = OperationFailure<ListOperationGenerator<StdRng>, StdRng>;

/// Runs `ops` random operations against a `ForwardList<i32>` and a `Vec`
/// model, stopping at the first divergence. A random seed is drawn when
/// `seed` is `None`; it is logged and carried in the failure so the run can
/// be replayed.
pub fn test_forward_list(seed: Option<[u8; 32]>, ops: usize) -> Result<(), Box<ListFailure>> {
    run_operations::<ListOperationGenerator<StdRng>, StdRng>(seed, ops)
}

pub fn run_operations<G, R>(seed: Option<R::Seed>, ops: usize) -> Result<(), Box<OperationFailure<G, R>>>
where
    G: OperationGenerator<R>,
    G::Operation: Debug,
    <G::Operation as Operation>::Result: PartialEq + Debug,
    <G::Operation as Operation>::Target: Default + Iterable + Debug,
    G::ReferenceImpl: Iterable + Clone + Debug,
    <<G::Operation as Operation>::Target as Iterable>::Item:
        PartialEq<<G::ReferenceImpl as Iterable>::Item>,
    R: SeedableRng + Rng,
    R::Seed: Clone + Debug,
    Standard: Distribution<R::Seed>,
{
    let seed = seed.unwrap_or_else(<G as RandomOperationGenerator<R>>::random_seed);
    log::info!("running {ops} operations with seed {seed:?}");

    let mut target = <G::Operation as Operation>::Target::default();
    let mut gen = G::from_seed(seed.clone());
    let mut operations = Vec::with_capacity(ops);

    for op_num in 0..ops {
        let Some((op, expected)) = gen.next() else {
            break;
        };
        let actual = op.apply(&mut target);
        let diverged = actual != expected || !same_items(&target, gen.data());
        operations.push((op, expected));
        if diverged {
            log::error!("operation {op_num} diverged: got {actual:?}");
            return Err(Box::new(OperationFailure {
                seed,
                op_num,
                operations,
                actual,
                data: gen.data().clone(),
                target,
            }));
        }
    }
    Ok(())
}

#[derive(Debug, Error)]
#[error("operation {op_num} diverged from the reference (seed {seed:?})")]
pub struct OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    G::Operation: Debug,
    <G::Operation as Operation>::Result: Debug,
    <G::Operation as Operation>::Target: Debug,
    G::ReferenceImpl: Debug,
    R: SeedableRng + Rng,
    R::Seed: Debug,
{
    pub seed: R::Seed,
    pub op_num: usize,
    pub operations: Vec<(G::Operation, <G::Operation as Operation>::Result)>,
    pub actual: <G::Operation as Operation>::Result,
    pub data: G::ReferenceImpl,
    pub target: <G::Operation as Operation>::Target,
}

impl<G, R> OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    G::Operation: Debug,
    <G::Operation as Operation>::Result: Debug,
    <G::Operation as Operation>::Target: Debug,
    G::ReferenceImpl: Debug,
    R: SeedableRng + Rng,
    R::Seed: Debug,
{
    /// Logs the last few operations leading up to the divergence.
    pub fn playback(&self) {
        let lower = self.op_num.saturating_sub(5);
        for (ind, (op, re)) in self.operations.iter().enumerate().skip(lower) {
            log::warn!("--------- operation {ind} ----------");
            log::warn!("operation: {op:?}");
            log::warn!("expected: {re:?}");
        }
        log::warn!("actual: {:?}", self.actual);
        log::warn!("reference state: {:?}", self.data);
        log::warn!("list state: {:?}", self.target);
    }
}

/// Replays a recorded sequence against a fresh list and returns every outcome.
pub fn replay(operations: &[ListOperation]) -> (ForwardList<i32>, Vec<Outcome>) {
    let mut list = ForwardList::new();
    let outcomes = operations.iter().map(|op| op.apply(&mut list)).collect();
    (list, outcomes)
}
