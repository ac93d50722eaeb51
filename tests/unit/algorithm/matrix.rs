//! Tests for matrix construction, registries and reversible covering

#[cfg(test)]
mod tests {
    use dlxcover::{Callbacks, Matrix};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn random_matrix(rng: &mut StdRng, rows: u32, columns: u32) -> Matrix<u32, u32> {
        let mut matrix = Matrix::new();
        for row in 0..rows {
            for column in 0..columns {
                if rng.random_bool(0.35) {
                    matrix.add(row, column);
                }
            }
        }
        matrix
    }

    fn live_size_total(matrix: &Matrix<u32, u32>) -> usize {
        matrix.live_columns().iter().map(|&(_, size)| size).sum()
    }

    // Tests headers join the ring in first-insertion order with correct sizes
    // Verified by inserting new headers right of the root
    #[test]
    fn test_add_registers_columns_in_order() {
        let mut matrix = Matrix::new();
        matrix.add("r1", 'b');
        matrix.add("r1", 'a');
        matrix.add("r2", 'b');

        assert_eq!(matrix.live_columns(), vec![(&'b', 2), (&'a', 1)]);
        assert_eq!(matrix.row_columns(&"r1"), vec![&'b', &'a']);
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column_count(), 2);
        assert!(matrix.is_consistent());
    }

    // Tests duplicate entries create parallel cells that inflate the column size
    // Verified by skipping duplicate pairs in add
    #[test]
    fn test_duplicate_pairs_inflate_size() {
        let mut matrix = Matrix::new();
        matrix.add(1, 1);
        matrix.add(1, 1);
        matrix.add(2, 2);

        assert_eq!(matrix.live_columns(), vec![(&1, 2), (&2, 1)]);
        assert_eq!(matrix.row_columns(&1), vec![&1, &1]);
        assert!(matrix.is_consistent());
    }

    // Tests optional columns leave the header ring but keep their rows
    // Verified by clearing the column ring in optional
    #[test]
    fn test_optional_detaches_header_only() {
        let mut matrix = Matrix::new();
        matrix.add(1, 10);
        matrix.add(1, 20);
        matrix.optional(20);

        assert_eq!(matrix.live_columns(), vec![(&10, 1)]);
        assert_eq!(matrix.columns(), vec![(&10, false), (&20, true)]);
        let header = matrix.header(&20).unwrap();
        assert_eq!(matrix.size(header), 1);
        assert!(matrix.is_consistent());
    }

    // Tests optional may precede add and be repeated without effect
    // Verified by linking the header when add meets an existing optional column
    #[test]
    fn test_optional_before_add_and_repeated() {
        let mut matrix = Matrix::new();
        matrix.optional(5);
        matrix.add(1, 5);
        matrix.add(1, 6);
        matrix.optional(5);
        let snapshot = matrix.fabric().clone();
        matrix.optional(5);

        assert_eq!(matrix.fabric(), &snapshot);
        assert_eq!(matrix.live_columns(), vec![(&6, 1)]);
        assert!(matrix.is_consistent());
    }

    // Tests the heuristic picks the smallest column, earliest on ties
    // Verified by using <= when comparing sizes
    #[test]
    fn test_choose_column_min_size_first_tie() {
        let mut matrix = Matrix::new();
        matrix.add(1, 'x');
        matrix.add(2, 'x');
        matrix.add(1, 'y');
        matrix.add(3, 'z');

        let chosen = matrix.choose_column().unwrap();
        assert_eq!(matrix.column_name(chosen), Some(&'y'));

        let empty: Matrix<u8, u8> = Matrix::new();
        assert_eq!(empty.choose_column(), None);
    }

    // Tests covering removes the column and every intersecting row elsewhere
    // Verified by skipping the size decrement in cover
    #[test]
    fn test_cover_removes_conflicting_rows() {
        let mut matrix = Matrix::new();
        matrix.add(1, 1);
        matrix.add(1, 3);
        matrix.add(2, 2);
        matrix.add(3, 1);
        matrix.add(3, 2);
        matrix.add(4, 3);

        let header = matrix.header(&1).unwrap();
        let token = matrix.cover(header).unwrap();

        assert_eq!(matrix.live_columns(), vec![(&3, 1), (&2, 1)]);
        assert_eq!(matrix.cover_depth(), 1);
        assert!(matrix.is_consistent());

        matrix.uncover(token);
        assert_eq!(matrix.live_columns(), vec![(&1, 2), (&3, 2), (&2, 2)]);
        assert_eq!(matrix.cover_depth(), 0);
    }

    // Tests cover followed by uncover restores every link and size
    // Verified by restoring cells in cover order inside uncover
    #[test]
    fn test_cover_uncover_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let mut matrix = random_matrix(&mut rng, 8, 6);
            let snapshot = matrix.fabric().clone();
            let headers: Vec<usize> = (0..6).filter_map(|c| matrix.header(&c)).collect();

            for &header in &headers {
                let token = matrix.cover(header).unwrap();
                matrix.uncover(token);
                assert_eq!(matrix.fabric(), &snapshot);
            }
        }
    }

    // Tests nested covers stay consistent and unwind to the original state
    // Verified by incrementing sizes after restoring in uncover
    #[test]
    fn test_nested_covers_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..40 {
            let mut matrix = random_matrix(&mut rng, 10, 7);
            let snapshot = matrix.fabric().clone();
            let mut tokens = Vec::new();

            while let Some(header) = matrix.choose_column() {
                tokens.push(matrix.cover(header).unwrap());
                assert!(matrix.is_consistent());
                let recount: usize = matrix
                    .live_columns()
                    .iter()
                    .map(|(column, _)| {
                        let header = matrix.header(column).unwrap();
                        matrix.fabric().column_ring(header).count()
                    })
                    .sum();
                assert_eq!(live_size_total(&matrix), recount);
            }

            while let Some(token) = tokens.pop() {
                matrix.uncover(token);
            }
            assert_eq!(matrix.fabric(), &snapshot);
        }
    }

    // Tests covering a covered column or a non-header is refused
    // Verified by removing the covered check in cover
    #[test]
    fn test_cover_rejects_covered_and_non_headers() {
        let mut matrix = Matrix::new();
        matrix.add(1, 1);
        let header = matrix.header(&1).unwrap();
        let cell = matrix.row_cell(&1).unwrap();

        assert!(matrix.cover(cell).is_none());
        assert!(matrix.cover(999).is_none());

        let token = matrix.cover(header).unwrap();
        assert!(matrix.cover(header).is_none());
        matrix.uncover(token);
        assert!(matrix.is_consistent());
    }

    // Tests returning tokens out of order is refused before any link changes
    // Verified by removing the ordering assertion in uncover
    #[test]
    #[should_panic(expected = "reverse order")]
    fn test_uncover_out_of_order_panics() {
        let mut matrix = Matrix::new();
        matrix.add(1, 1);
        matrix.add(2, 2);
        let first = matrix.cover(matrix.header(&1).unwrap()).unwrap();
        let _second = matrix.cover(matrix.header(&2).unwrap()).unwrap();
        matrix.uncover(first);
    }

    // Tests marking a covered column optional waits until the selection unwinds
    // Verified by detaching the header while it is still covered
    #[test]
    fn test_optional_on_covered_column_deferred() {
        let mut matrix = Matrix::new();
        matrix.add(1, 1);
        matrix.add(1, 3);
        matrix.add(2, 2);

        matrix.push(1);
        matrix.optional(3);
        assert_eq!(matrix.columns(), vec![(&1, false), (&3, false), (&2, false)]);
        assert!(matrix.is_consistent());

        assert_eq!(matrix.pop(), Some(1));
        assert!(matrix.is_consistent());
        assert_eq!(matrix.live_columns(), vec![(&1, 1), (&2, 1)]);
        assert_eq!(matrix.columns(), vec![(&1, false), (&3, true), (&2, false)]);

        let mut solutions = Vec::new();
        let mut terminal = Callbacks::solutions(|rows: &[i32]| {
            solutions.push(rows.to_vec());
            true
        });
        matrix.search(&mut terminal);
        assert_eq!(solutions, vec![vec![1, 2]]);
    }

    // Tests marking a linked neighbour of a covered column optional stays consistent
    // Verified by detaching the header while covers are outstanding
    #[test]
    fn test_optional_on_neighbour_during_selection() {
        let mut matrix = Matrix::new();
        matrix.add(1, 1);
        matrix.add(2, 2);
        matrix.add(2, 3);

        matrix.push(1);
        matrix.optional(2);
        matrix.optional(2);
        matrix.pop();

        assert!(matrix.is_consistent());
        assert_eq!(matrix.live_columns(), vec![(&1, 1), (&3, 1)]);
    }

    // Tests a brand new optional column applies at once even mid-selection
    // Verified by deferring every optional call made during a selection
    #[test]
    fn test_new_optional_column_during_selection() {
        let mut matrix = Matrix::new();
        matrix.add(1, 1);
        matrix.push(1);
        matrix.optional(9);

        assert_eq!(matrix.columns(), vec![(&1, false), (&9, true)]);
        assert!(matrix.is_consistent());
        matrix.pop();
        assert!(matrix.is_consistent());
    }

    // Tests a token can only be returned to the matrix that issued it
    // Verified by comparing only the header index in uncover
    #[test]
    #[should_panic(expected = "different matrix")]
    fn test_uncover_foreign_token_panics() {
        let mut first = Matrix::new();
        let mut second = Matrix::new();
        first.add(1, 1);
        second.add(1, 1);

        let foreign = first.cover(first.header(&1).unwrap()).unwrap();
        let _own = second.cover(second.header(&1).unwrap()).unwrap();
        second.uncover(foreign);
    }
}
