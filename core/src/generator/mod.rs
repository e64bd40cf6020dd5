use crate::*;
pub use random::*;

mod random;

pub trait ProblemGenerator {
    fn generate(self, config: &GameConfig) -> ProblemSet;
}

pub trait BoardGenerator {
    fn generate(self) -> Board;
}
