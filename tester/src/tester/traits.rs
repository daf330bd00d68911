use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

/// deterministically applies an operation to a T returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

// deterministically generates a sequence of valid operations together with the
// result the reference implementation produced for each one
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_seed(seed: R::Seed) -> Self;
    fn data(&self) -> &Self::ReferenceImpl;
}

// extends operation generator so that it can be created from a random seed if the seed can be randomly generated.
pub trait RandomOperationGenerator<R: SeedableRng + Rng>: OperationGenerator<R>
where
    Standard: Distribution<R::Seed>,
{
    fn random_seed() -> R::Seed {
        rand::thread_rng().gen()
    }
}

impl<R, T: OperationGenerator<R>> RandomOperationGenerator<R> for T
where
    R: SeedableRng + Rng,
    Standard: Distribution<R::Seed>,
{
}
