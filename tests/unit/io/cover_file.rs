//! Tests for cover file parsing, writing and matrix construction

#[cfg(test)]
mod tests {
    use dlxcover::DlxError;
    use dlxcover::analysis::tally::SolutionCollector;
    use dlxcover::io::cover_file::CoverFile;
    use std::fs;

    const THREE_COLUMNS: &str = "6\n1 1\n1 3\n2 2\n3 1\n3 2\n4 3\n0\n";

    fn token_of(error: DlxError) -> usize {
        match error {
            DlxError::InvalidInput { token, .. } => token,
            other => unreachable!("Expected InvalidInput, got {other}"),
        }
    }

    // Tests entries and optional columns are read in order
    // Verified by swapping row and column while parsing pairs
    #[test]
    fn test_parse_with_optional_section() {
        let cover = CoverFile::parse("3 1 1 1 4\n2 4\n1 4").unwrap();
        assert_eq!(cover.pairs, vec![(1, 1), (1, 4), (2, 4)]);
        assert_eq!(cover.optional, vec![4]);
    }

    // Tests the optional section may be left out
    // Verified by requiring the optional count
    #[test]
    fn test_parse_without_optional_section() {
        let cover = CoverFile::parse("2\n5 6\n7 8\n").unwrap();
        assert_eq!(cover.pairs, vec![(5, 6), (7, 8)]);
        assert!(cover.optional.is_empty());
    }

    // Tests negative ids are accepted while negative counts are not
    // Verified by parsing counts as signed values
    #[test]
    fn test_negative_ids_and_counts() {
        let cover = CoverFile::parse("1 -3 -9 1 -9").unwrap();
        assert_eq!(cover.pairs, vec![(-3, -9)]);
        assert_eq!(cover.optional, vec![-9]);

        assert_eq!(token_of(CoverFile::parse("-1").unwrap_err()), 1);
        assert_eq!(token_of(CoverFile::parse("0 -2").unwrap_err()), 2);
    }

    // Tests malformed streams point at the offending token
    // Verified by reporting the token after the offending one
    #[test]
    fn test_malformed_input_positions() {
        assert_eq!(token_of(CoverFile::parse("").unwrap_err()), 1);
        assert_eq!(token_of(CoverFile::parse("2 1 1 1").unwrap_err()), 5);
        assert_eq!(token_of(CoverFile::parse("1 1 x").unwrap_err()), 3);
        assert_eq!(token_of(CoverFile::parse("1 1 1 2 5").unwrap_err()), 6);
        assert_eq!(token_of(CoverFile::parse("1 1 1 0 9").unwrap_err()), 5);
    }

    // Tests written files parse back to the same instance
    // Verified by omitting the optional count when writing
    #[test]
    fn test_write_then_parse() {
        let cover = CoverFile {
            pairs: vec![(1, 10), (2, 20), (2, 30)],
            optional: vec![30],
        };
        let mut buffer = Vec::new();
        cover.write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "3\n1 10\n2 20\n2 30\n1\n30\n");
        assert_eq!(CoverFile::parse(&text).unwrap(), cover);
    }

    // Tests files on disk are saved and loaded, with missing files reported
    // Verified by reporting a missing file as malformed input
    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.txt");
        let cover = CoverFile::parse(THREE_COLUMNS).unwrap();

        cover.save(&path).unwrap();
        assert_eq!(CoverFile::from_path(&path).unwrap(), cover);

        fs::remove_file(&path).unwrap();
        let error = CoverFile::from_path(&path).unwrap_err();
        assert!(matches!(error, DlxError::FileSystem { operation: "read", .. }));
    }

    // Tests the built matrix adds entries in order and marks optional columns
    // Verified by marking optional columns before adding entries
    #[test]
    fn test_build_matrix() {
        let mut matrix = CoverFile::parse("3 1 1 1 3 2 2 1 3").unwrap().build();
        assert_eq!(matrix.columns(), vec![(&1, false), (&3, true), (&2, false)]);
        assert_eq!(matrix.live_columns(), vec![(&1, 1), (&2, 1)]);

        let mut collector = SolutionCollector::new();
        matrix.search(&mut collector);
        assert_eq!(collector.solutions(), &[vec![1, 2]]);
    }
}
