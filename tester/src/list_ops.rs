use forward_list::{ForwardList, ListError};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::tester::{Operation, OperationGenerator};

/// `None` addresses the before-begin position, `Some(i)` the `i`th element.
/// `Some(len)` is the end position.
pub type Position = Option<usize>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOperation {
    PushFront(i32),
    PopFront,
    InsertAfter { position: Position, value: i32 },
    EraseAfter { position: Position },
    Front,
    Len,
    Clear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Value(Option<i32>),
    Len(usize),
    Failed(ListError),
}

impl Operation for ListOperation {
    type Result = Outcome;
    type Target = ForwardList<i32>;

    fn apply(&self, list: &mut Self::Target) -> Self::Result {
        match *self {
            Self::PushFront(value) => {
                list.push_front(value);
                Outcome::Done
            }
            Self::PopFront => Outcome::Value(list.pop_front()),
            Self::InsertAfter { position, value } => {
                let mut cursor = list.before_begin_mut();
                for _ in 0..steps(position) {
                    cursor.move_next();
                }
                match cursor.insert_after(value) {
                    Ok(inserted) => Outcome::Value(Some(*inserted)),
                    Err(err) => Outcome::Failed(err),
                }
            }
            Self::EraseAfter { position } => {
                let mut cursor = list.before_begin_mut();
                for _ in 0..steps(position) {
                    cursor.move_next();
                }
                Outcome::Value(cursor.erase_after())
            }
            Self::Front => Outcome::Value(list.front().copied()),
            Self::Len => Outcome::Len(list.len()),
            Self::Clear => {
                list.clear();
                Outcome::Done
            }
        }
    }
}

fn steps(position: Position) -> usize {
    position.map_or(0, |i| i + 1)
}

/// Number of distinct operations the generator draws from.
const OPERATION_KINDS: u32 = 7;

/// Generates list operations and runs each one against a `Vec` model.
#[derive(Debug)]
pub struct ListOperationGenerator<R = StdRng>
where
    R: Rng + SeedableRng,
{
    rng: R,
    data: Vec<i32>,
}

impl<R: Rng + SeedableRng> ListOperationGenerator<R> {
    fn position(&mut self) -> Position {
        // before-begin, any element, or now and then the end
        let len = self.data.len();
        match self.rng.gen_range(0..=len + 1) {
            0 => None,
            i => Some(i - 1),
        }
    }
}

impl<R: Rng + SeedableRng> OperationGenerator<R> for ListOperationGenerator<R> {
    type Operation = ListOperation;
    type ReferenceImpl = Vec<i32>;

    fn from_seed(seed: R::Seed) -> Self {
        Self {
            rng: R::from_seed(seed),
            data: Vec::new(),
        }
    }

    fn data(&self) -> &Self::ReferenceImpl {
        &self.data
    }
}

impl<R: Rng + SeedableRng> Iterator for ListOperationGenerator<R> {
    type Item = (ListOperation, Outcome);

    fn next(&mut self) -> Option<Self::Item> {
        // clearing is rare so the list gets a chance to grow
        let kind = if self.rng.gen_ratio(1, 50) {
            OPERATION_KINDS - 1
        } else {
            self.rng.gen_range(0..OPERATION_KINDS - 1)
        };

        let item = match kind {
            0 => {
                let value = self.rng.gen();
                self.data.insert(0, value);
                (ListOperation::PushFront(value), Outcome::Done)
            }
            1 => {
                let res = (!self.data.is_empty()).then(|| self.data.remove(0));
                (ListOperation::PopFront, Outcome::Value(res))
            }
            2 => {
                let position = self.position();
                let value = self.rng.gen();
                let at = steps(position);
                let res = if at > self.data.len() {
                    Outcome::Failed(ListError::PastEnd)
                } else {
                    self.data.insert(at, value);
                    Outcome::Value(Some(value))
                };
                (ListOperation::InsertAfter { position, value }, res)
            }
            3 => {
                let position = self.position();
                let at = steps(position);
                let res = (at < self.data.len()).then(|| self.data.remove(at));
                (ListOperation::EraseAfter { position }, Outcome::Value(res))
            }
            4 => (ListOperation::Front, Outcome::Value(self.data.first().copied())),
            5 => (ListOperation::Len, Outcome::Len(self.data.len())),
            6 => {
                self.data.clear();
                (ListOperation::Clear, Outcome::Done)
            }
            _ => unreachable!(),
        };
        Some(item)
    }
}
