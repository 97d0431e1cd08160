use chess::ChessMove;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Position;

/// Picks a legal move uniformly at random, or `None` when there is none.
pub fn random_move<R: Rng + ?Sized>(position: &Position, rng: &mut R) -> Option<ChessMove> {
    position.legal_moves().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_is_legal() {
        let position = Position::starting_position();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let chess_move = random_move(&position, &mut rng).unwrap();
            assert!(position.is_legal(chess_move));
        }
    }

    #[test]
    fn test_random_move_is_reproducible_with_seed() {
        let position = Position::starting_position();

        let first = random_move(&position, &mut StdRng::seed_from_u64(42));
        let second = random_move(&position, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_move_eventually_varies() {
        let position = Position::starting_position();
        let mut rng = StdRng::seed_from_u64(3);

        let first = random_move(&position, &mut rng);
        let varied = (0..100).any(|_| random_move(&position, &mut rng) != first);

        assert!(varied);
    }

    #[test]
    fn test_no_random_move_when_checkmated() {
        let position =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();

        assert_eq!(random_move(&position, &mut StdRng::seed_from_u64(0)), None);
    }
}
