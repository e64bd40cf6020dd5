use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Problem generation that samples operands and operators uniformly, retrying until the result is exact.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomProblemGenerator {
    seed: u64,
}

impl RandomProblemGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ProblemGenerator for RandomProblemGenerator {
    fn generate(self, config: &GameConfig) -> ProblemSet {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let count = config.problem_count.max(1);
        ProblemSet::new_unchecked(generate_problems(&mut rng, count.into()))
    }
}

pub fn generate_problems(rng: &mut SmallRng, count: usize) -> Vec<Problem> {
    (0..count).map(|_| generate_one_problem(rng)).collect()
}

/// Draws until a sample yields a valid problem. Addition, subtraction and multiplication of distinct operands
/// always do, so only an uneven division is ever thrown away.
pub fn generate_one_problem(rng: &mut SmallRng) -> Problem {
    loop {
        let operand1 = rng.random_range(OPERAND_RANGE);
        let operand2 = rng.random_range(OPERAND_RANGE);
        if operand1 == operand2 {
            continue;
        }
        let operator = Operator::ALL[rng.random_range(0..Operator::ALL.len())];

        match Problem::new(operand1, operator, operand2) {
            Ok(problem) => return problem,
            Err(_) => log::trace!(
                "Discarded problem sample {} {} {}",
                operand1,
                operator,
                operand2
            ),
        }
    }
}

/// Board generation that shuffles the full face pool and pairs it with a shuffled alphabet.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self) -> Board {
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut faces = Face::POOL;
        faces.shuffle(&mut rng);

        let mut letters: [char; 26] = core::array::from_fn(|i| char::from(b'A' + i as u8));
        letters.shuffle(&mut rng);

        // the pool fills the grid exactly, so only the first 16 letters are used
        let (rows, cols) = GRID_SIZE;
        let cards = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            let index = row * usize::from(cols) + col;
            Card::new(faces[index], letters[index])
        });
        Board::from_grid(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn generated_problems_hold_their_invariant() {
        for seed in 0..200 {
            let problems = RandomProblemGenerator::new(seed).generate(&GameConfig::default());

            assert_eq!(problems.len(), 5);
            for problem in problems.iter() {
                assert_ne!(problem.operand1(), problem.operand2());
                assert!(OPERAND_RANGE.contains(&problem.operand1()));
                assert!(OPERAND_RANGE.contains(&problem.operand2()));
                assert_eq!(
                    problem
                        .operator()
                        .apply(problem.operand1(), problem.operand2()),
                    Some(problem.result())
                );
            }
        }
    }

    #[test]
    fn problem_count_follows_config() {
        let config = GameConfig::new(8, 10, 1000, 1000);

        assert_eq!(RandomProblemGenerator::new(1).generate(&config).len(), 8);
    }

    #[test]
    fn generated_boards_use_each_face_and_distinct_letters() {
        let pool: BTreeSet<Face> = Face::POOL.into_iter().collect();

        for seed in 0..200 {
            let board = RandomBoardGenerator::new(seed).generate();

            assert_eq!(board.iter().count(), usize::from(CARD_COUNT));
            let faces: BTreeSet<Face> = board.iter().map(Card::face).collect();
            let letters: BTreeSet<char> = board.iter().map(Card::letter).collect();
            assert_eq!(faces, pool);
            assert_eq!(letters.len(), usize::from(CARD_COUNT));
            assert!(letters.iter().all(char::is_ascii_uppercase));
            assert!(board.iter().all(|card| !card.is_revealed()));
        }
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(
            RandomBoardGenerator::new(42).generate(),
            RandomBoardGenerator::new(42).generate()
        );
        assert_eq!(
            RandomProblemGenerator::new(42).generate(&GameConfig::default()),
            RandomProblemGenerator::new(42).generate(&GameConfig::default())
        );
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let faces = |seed| {
            RandomBoardGenerator::new(seed)
                .generate()
                .iter()
                .map(Card::face)
                .collect::<Vec<_>>()
        };

        assert_ne!(faces(1), faces(2));
    }
}
