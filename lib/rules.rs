use crate::{Board, Color, Piece, Rank, Role, Square};

/// Whether the piece may travel from `from` to `to` given the current
/// occupancy of the board.
///
/// This is the per-role geometric predicate only; whose turn it is and
/// whether the source square actually holds the piece are the caller's
/// responsibility.
pub fn is_legal(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    match piece.role() {
        Role::Pawn => pawn(piece.color(), from, to, board),
        Role::Knight => knight(piece.color(), from, to, board),
        Role::Bishop => bishop(piece.color(), from, to, board),
        Role::Rook => rook(piece.color(), from, to, board),
        Role::Queen => queen(piece.color(), from, to, board),
        Role::King => king(piece.color(), from, to, board),
    }
}

/// Whether a piece of this color may land on the square, i.e. it is either
/// empty or held by the opponent.
fn may_land_on(color: Color, to: Square, board: &Board) -> bool {
    board[to].map_or(true, |p| p.color() != color)
}

/// Pawns only ever travel towards the opponent's back rank.
fn pawn(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let df = to.file - from.file;
    let dr = to.rank - from.rank;

    let (ahead, start) = match color {
        Color::White => (1, Rank::Second),
        Color::Black => (-1, Rank::Seventh),
    };

    if df == 0 && dr == ahead {
        board[to].is_none()
    } else if df == 0 && dr == 2 * ahead && from.rank == start {
        let skipped = Square::new(
            from.file,
            Rank::from_index((from.rank.index() as i8 + ahead) as u8),
        );

        board[skipped].is_none() && board[to].is_none()
    } else if df.abs() == 1 && dr == ahead {
        board[to].map_or(false, |p| p.color() != color)
    } else {
        false
    }
}

fn knight(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let df = (to.file - from.file).abs();
    let dr = (to.rank - from.rank).abs();

    // Knights jump, so intermediate squares are never consulted.
    (df == 1 && dr == 2 || df == 2 && dr == 1) && may_land_on(color, to, board)
}

fn bishop(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let df = to.file - from.file;
    let dr = to.rank - from.rank;

    df.abs() == dr.abs()
        && df != 0
        && board.is_path_clear(from, to)
        && may_land_on(color, to, board)
}

fn rook(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let df = to.file - from.file;
    let dr = to.rank - from.rank;

    (df == 0) != (dr == 0) && board.is_path_clear(from, to) && may_land_on(color, to, board)
}

fn queen(color: Color, from: Square, to: Square, board: &Board) -> bool {
    bishop(color, from, to, board) || rook(color, from, to, board)
}

fn king(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let df = (to.file - from.file).abs();
    let dr = (to.rank - from.rank).abs();

    df <= 1 && dr <= 1 && (df, dr) != (0, 0) && may_land_on(color, to, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn lone(piece: Piece, sq: Square) -> Board {
        let mut board = Board::empty();
        board.place(sq, piece);
        board
    }

    #[proptest]
    fn knight_moves_in_l_shapes(c: Color, from: Square, to: Square) {
        let piece = Piece::new(c, Role::Knight);
        let df = (to.file - from.file).abs();
        let dr = (to.rank - from.rank).abs();

        assert_eq!(
            is_legal(piece, from, to, &lone(piece, from)),
            df == 1 && dr == 2 || df == 2 && dr == 1
        );
    }

    #[proptest]
    fn bishop_moves_diagonally_on_an_empty_board(c: Color, from: Square, to: Square) {
        let piece = Piece::new(c, Role::Bishop);
        let df = (to.file - from.file).abs();
        let dr = (to.rank - from.rank).abs();

        assert_eq!(
            is_legal(piece, from, to, &lone(piece, from)),
            df == dr && df != 0
        );
    }

    #[proptest]
    fn rook_moves_along_files_and_ranks_on_an_empty_board(c: Color, from: Square, to: Square) {
        let piece = Piece::new(c, Role::Rook);
        let df = to.file - from.file;
        let dr = to.rank - from.rank;

        assert_eq!(
            is_legal(piece, from, to, &lone(piece, from)),
            (df == 0) != (dr == 0)
        );
    }

    #[proptest]
    fn queen_combines_bishop_and_rook(c: Color, from: Square, to: Square) {
        let queen = Piece::new(c, Role::Queen);
        let bishop = Piece::new(c, Role::Bishop);
        let rook = Piece::new(c, Role::Rook);
        let board = lone(queen, from);

        assert_eq!(
            is_legal(queen, from, to, &board),
            is_legal(bishop, from, to, &board) || is_legal(rook, from, to, &board)
        );
    }

    #[proptest]
    fn king_moves_one_square_in_any_direction(c: Color, from: Square, to: Square) {
        let piece = Piece::new(c, Role::King);
        let df = (to.file - from.file).abs();
        let dr = (to.rank - from.rank).abs();

        assert_eq!(
            is_legal(piece, from, to, &lone(piece, from)),
            df <= 1 && dr <= 1 && (df, dr) != (0, 0)
        );
    }

    #[proptest]
    fn no_piece_may_capture_its_own_color(
        c: Color,
        r: Role,
        s: Role,
        from: Square,
        #[filter(#from != #to)] to: Square,
    ) {
        let piece = Piece::new(c, r);
        let mut board = lone(piece, from);
        board.place(to, Piece::new(c, s));

        assert!(!is_legal(piece, from, to, &board));
    }

    #[proptest]
    fn sliding_pieces_cannot_jump(c: Color, #[filter(#r != Role::Knight)] r: Role, b: Piece) {
        let piece = Piece::new(c, r);
        let mut board = lone(piece, "d4".parse()?);
        board.place("d5".parse()?, b);
        board.place("e5".parse()?, b);
        board.place("e4".parse()?, b);
        board.place("e3".parse()?, b);
        board.place("d3".parse()?, b);
        board.place("c3".parse()?, b);
        board.place("c4".parse()?, b);
        board.place("c5".parse()?, b);

        for to in ["d7", "g7", "g4", "g1", "d1", "a1", "a4", "a7"] {
            assert!(!is_legal(piece, "d4".parse()?, to.parse()?, &board));
        }
    }

    #[proptest]
    fn knight_jumps_over_surrounding_pieces(c: Color, b: Piece) {
        let piece = Piece::new(c, Role::Knight);
        let mut board = lone(piece, "d4".parse()?);
        board.place("d5".parse()?, b);
        board.place("e5".parse()?, b);
        board.place("e4".parse()?, b);
        board.place("e3".parse()?, b);
        board.place("d3".parse()?, b);
        board.place("c3".parse()?, b);
        board.place("c4".parse()?, b);
        board.place("c5".parse()?, b);

        assert!(is_legal(piece, "d4".parse()?, "e6".parse()?, &board));
        assert!(is_legal(piece, "d4".parse()?, "f5".parse()?, &board));
        assert!(is_legal(piece, "d4".parse()?, "c2".parse()?, &board));
    }

    #[proptest]
    fn pawn_steps_one_square_towards_the_opponent(f: crate::File) {
        let white = Piece::new(Color::White, Role::Pawn);
        let black = Piece::new(Color::Black, Role::Pawn);

        let w2 = Square::new(f, Rank::Second);
        let w3 = Square::new(f, Rank::Third);
        let b7 = Square::new(f, Rank::Seventh);
        let b6 = Square::new(f, Rank::Sixth);

        assert!(is_legal(white, w2, w3, &lone(white, w2)));
        assert!(is_legal(black, b7, b6, &lone(black, b7)));

        assert!(!is_legal(white, w3, w2, &lone(white, w3)));
        assert!(!is_legal(black, b6, b7, &lone(black, b6)));
    }

    #[proptest]
    fn pawn_cannot_step_onto_an_occupied_square(f: crate::File, b: Piece) {
        let white = Piece::new(Color::White, Role::Pawn);
        let w2 = Square::new(f, Rank::Second);
        let w3 = Square::new(f, Rank::Third);

        let mut board = lone(white, w2);
        board.place(w3, b);

        assert!(!is_legal(white, w2, w3, &board));
        assert!(!is_legal(white, w2, Square::new(f, Rank::Fourth), &board));
    }

    #[proptest]
    fn pawn_double_steps_only_from_its_starting_rank(f: crate::File) {
        let white = Piece::new(Color::White, Role::Pawn);
        let black = Piece::new(Color::Black, Role::Pawn);

        let w2 = Square::new(f, Rank::Second);
        let w3 = Square::new(f, Rank::Third);
        let b7 = Square::new(f, Rank::Seventh);

        assert!(is_legal(white, w2, Square::new(f, Rank::Fourth), &lone(white, w2)));
        assert!(is_legal(black, b7, Square::new(f, Rank::Fifth), &lone(black, b7)));

        assert!(!is_legal(white, w3, Square::new(f, Rank::Fifth), &lone(white, w3)));
        assert!(!is_legal(white, w2, Square::new(f, Rank::Fifth), &lone(white, w2)));
    }

    #[proptest]
    fn pawn_double_step_requires_both_squares_empty(f: crate::File, b: Piece) {
        let white = Piece::new(Color::White, Role::Pawn);
        let w2 = Square::new(f, Rank::Second);
        let w4 = Square::new(f, Rank::Fourth);

        let mut blocked_near = lone(white, w2);
        blocked_near.place(Square::new(f, Rank::Third), b);
        assert!(!is_legal(white, w2, w4, &blocked_near));

        let mut blocked_far = lone(white, w2);
        blocked_far.place(w4, b);
        assert!(!is_legal(white, w2, w4, &blocked_far));
    }

    #[proptest]
    fn pawn_captures_diagonally_onto_opponents_only(c: Color, r: Role) {
        let pawn = Piece::new(Color::White, Role::Pawn);
        let d4 = "d4".parse()?;
        let e5 = "e5".parse()?;
        let c5 = "c5".parse()?;

        // empty diagonal is not a capture
        assert!(!is_legal(pawn, d4, e5, &lone(pawn, d4)));

        let mut board = lone(pawn, d4);
        board.place(e5, Piece::new(c, r));
        board.place(c5, Piece::new(c, r));

        assert_eq!(is_legal(pawn, d4, e5, &board), c == Color::Black);
        assert_eq!(is_legal(pawn, d4, c5, &board), c == Color::Black);
    }

    #[proptest]
    fn pawn_never_moves_sideways_or_more_than_one_file(f: crate::File, to: Square) {
        let pawn = Piece::new(Color::White, Role::Pawn);
        let from = Square::new(f, Rank::Fourth);

        let df = (to.file - from.file).abs();
        let dr = to.rank - from.rank;

        if df > 1 || dr != 1 {
            assert!(!is_legal(pawn, from, to, &lone(pawn, from)));
        }
    }
}
