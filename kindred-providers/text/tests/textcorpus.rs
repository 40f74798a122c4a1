#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Integration tests covering the text-backed [`TokenSource`] implementation.
use std::io::{BufRead, Cursor, Read};

use kindred_core::{KindredBuilder, TokenSource};
use kindred_providers_text::{TextCorpus, TextCorpusError, TextCorpusErrorCode, WindowHeader};
use rstest::rstest;

#[rstest]
#[case("2\nalpha beta\ngamma\n", 2, &["alpha", "beta", "gamma"])]
#[case("1\r\nCarriage Return\r\n", 1, &["carriage", "return"])]
#[case("0\nlonely", 0, &["lonely"])]
#[case("4\n", 4, &[])]
#[case("3", 3, &[])]
fn try_from_reader_reads_header_and_text(
    #[case] raw: &str,
    #[case] radius: usize,
    #[case] expected: &[&str],
) {
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new(raw)).expect("corpus must build");
    assert_eq!(corpus.window_radius(), Some(radius));
    assert_eq!(corpus.tokens(), expected);
}

#[rstest]
fn try_from_reader_stops_at_first_empty_line() {
    let raw = "1\nfirst part\n\nsecond part\n";
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new(raw)).expect("corpus must build");
    assert_eq!(corpus.tokens(), ["first", "part"]);
}

#[rstest]
fn whitespace_only_line_does_not_terminate() {
    let raw = "1\nfirst\n   \nsecond\n";
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new(raw)).expect("corpus must build");
    assert_eq!(corpus.tokens(), ["first", "second"]);
}

#[rstest]
fn crlf_empty_line_terminates() {
    let raw = "1\r\nfirst\r\n\r\nsecond\r\n";
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new(raw)).expect("corpus must build");
    assert_eq!(corpus.tokens(), ["first"]);
}

#[rstest]
fn empty_input_has_no_radius_and_no_tokens() {
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new("")).expect("empty input is valid");
    assert_eq!(corpus.header(), None);
    assert_eq!(corpus.window_radius(), None);
    assert!(corpus.is_empty());
}

#[rstest]
#[case("\ncat bat\n")]
#[case("1.0\ncat bat\n")]
#[case("k\ncat bat\n")]
fn try_from_reader_rejects_bad_header(#[case] raw: &str) {
    let err = TextCorpus::try_from_reader("demo", Cursor::new(raw))
        .expect_err("bad header must fail");
    assert!(matches!(err, TextCorpusError::InvalidWindowRadius { .. }));
    assert_eq!(err.code(), TextCorpusErrorCode::InvalidWindowRadius);
}

#[rstest]
#[case("-1\ncat cats bat\n")]
#[case("-12\ncat cat cats bat\n")]
fn negative_radius_is_accepted_and_ranks_nothing(#[case] raw: &str) -> anyhow::Result<()> {
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new(raw))?;
    assert_eq!(corpus.header(), Some(WindowHeader::Negative));
    assert_eq!(corpus.window_radius(), None);
    assert!(corpus.window_is_empty());
    assert!(!corpus.is_empty());

    let kindred = KindredBuilder::new().with_window_radius(3).build()?;
    assert!(kindred.run(&corpus)?.is_empty());
    Ok(())
}

#[rstest]
fn digit_separators_are_accepted_in_radius() -> anyhow::Result<()> {
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new("1_0\ncat cats bat\n"))?;
    assert_eq!(corpus.header(), Some(WindowHeader::Radius(10)));
    let ranking = KindredBuilder::new().build()?.run(&corpus)?;
    let rendered: Vec<(&str, usize)> = ranking
        .iter()
        .map(|entry| (entry.representative(), entry.count()))
        .collect();
    assert_eq!(rendered, [("bat", 3)]);
    Ok(())
}

#[rstest]
fn try_from_reader_propagates_io_error() {
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    let err = TextCorpus::try_from_reader("demo", FailingReader)
        .expect_err("I/O failure must propagate");
    assert!(matches!(err, TextCorpusError::Io(_)));
    assert_eq!(err.code().as_str(), "TEXT_IO");
}

#[rstest]
fn token_source_reports_metadata() {
    let corpus = TextCorpus::new("demo", None, vec!["left".into(), "right".into()]);
    assert_eq!(corpus.name(), "demo");
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.window_radius(), None);
}

#[rstest]
fn corpus_radius_drives_the_pipeline() -> anyhow::Result<()> {
    let raw = "1\nThe cat, CATS and a bat bats.\n\nhope hopes\n";
    let corpus = TextCorpus::try_from_reader("demo", Cursor::new(raw))?;
    let kindred = KindredBuilder::new().with_window_radius(0).build()?;
    let ranking = kindred.run(&corpus)?;
    let rendered: Vec<(String, usize)> = ranking
        .iter()
        .map(|entry| (entry.representative().to_owned(), entry.count()))
        .collect();
    assert_eq!(rendered, [("bat".to_owned(), 4)]);
    Ok(())
}
