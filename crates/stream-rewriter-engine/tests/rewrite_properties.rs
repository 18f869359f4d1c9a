use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use stream_rewriter_engine::{
    BufferedTokenStream, RewriteError, Rewriter, SyntaxKind, TokenStream,
};
use stream_rewriter_syntax::EOF_TEXT;

/// One token per letter, so token index == letter position.
fn letters(text: &str) -> BufferedTokenStream {
    BufferedTokenStream::from_tokens(text.chars().map(|c| (SyntaxKind::IDENT, c.to_string())))
}

#[derive(Debug, Clone, Copy)]
enum Edit {
    Before(usize, &'static str),
    After(usize, &'static str),
    Replace(usize, usize, &'static str),
    Delete(usize, usize),
}

fn queue(rewriter: &mut Rewriter<'_>, edits: &[Edit]) {
    for edit in edits {
        match *edit {
            Edit::Before(index, text) => rewriter.insert_before(index, text),
            Edit::After(index, text) => rewriter.insert_after(index, text),
            Edit::Replace(from, to, text) => rewriter.replace(from, to, text).unwrap(),
            Edit::Delete(from, to) => rewriter.delete(from, to).unwrap(),
        }
    }
}

fn error_kind(err: &RewriteError) -> &'static str {
    match err {
        RewriteError::InvalidRange { .. } => "InvalidRange",
        RewriteError::OverlappingReplace { .. } => "OverlappingReplace",
        RewriteError::InsertWithinReplace { .. } => "InsertWithinReplace",
    }
}

#[rstest]
#[case("abc", &[Edit::Before(0, "0")], "0abc")]
#[case("abc", &[Edit::After(2, "x")], "abcx")]
#[case("abc", &[Edit::Before(1, "x"), Edit::After(1, "x")], "axbxc")]
#[case("abc", &[Edit::Replace(0, 0, "x")], "xbc")]
#[case("abc", &[Edit::Replace(2, 2, "x")], "abx")]
#[case("abc", &[Edit::Replace(1, 1, "x"), Edit::Replace(1, 1, "y")], "ayc")]
#[case("abc", &[Edit::Before(0, "_"), Edit::Replace(1, 1, "x"), Edit::Replace(1, 1, "y")], "_ayc")]
#[case("abc", &[Edit::Replace(1, 1, "x"), Edit::Delete(1, 1)], "ac")]
#[case("abc", &[Edit::Before(0, "0"), Edit::Replace(0, 0, "x")], "0xbc")]
#[case("abc", &[Edit::Replace(2, 2, "x"), Edit::Before(2, "y")], "abyx")]
#[case("abc", &[Edit::Before(2, "y"), Edit::Replace(2, 2, "x")], "abyx")]
#[case("abc", &[Edit::Replace(2, 2, "x"), Edit::After(2, "y")], "abxy")]
#[case("abc", &[Edit::Before(2, "y"), Edit::Delete(2, 2)], "aby")]
#[case("abc", &[Edit::Before(1, "x"), Edit::Before(2, "y"), Edit::Before(0, "z")], "zaxbyc")]
#[case("abc", &[Edit::Replace(0, 2, "foo"), Edit::Before(0, "z")], "zfoo")]
#[case("abc", &[Edit::Delete(0, 2), Edit::Before(0, "z")], "z")]
#[case("abcccba", &[Edit::Replace(2, 4, "x"), Edit::Before(2, "y")], "abyxba")]
#[case("abcccba", &[Edit::Replace(2, 4, "x"), Edit::After(4, "y")], "abxyba")]
#[case("abcccba", &[Edit::Replace(0, 6, "x")], "x")]
#[case("abcba", &[Edit::Replace(2, 2, "xyz"), Edit::Replace(0, 3, "foo")], "fooa")]
#[case("abcc", &[Edit::Replace(1, 2, "foo"), Edit::Replace(0, 3, "bar")], "bar")]
#[case("abcc", &[Edit::Replace(1, 2, "foo"), Edit::Replace(0, 2, "bar")], "barc")]
#[case("abcc", &[Edit::Replace(1, 2, "foo"), Edit::Replace(1, 3, "bar")], "abar")]
#[case("abcc", &[Edit::Replace(1, 2, "foo"), Edit::Replace(1, 2, "foo")], "afooc")]
#[case("abcc", &[Edit::Before(1, "foo"), Edit::Replace(1, 2, "foo")], "afoofooc")]
#[case("abcc", &[Edit::Before(1, "x"), Edit::Replace(2, 3, "foo")], "axbfoo")]
#[case("abcc", &[Edit::Replace(2, 3, "foo"), Edit::Before(1, "x")], "axbfoo")]
#[case("abcdefg", &[Edit::Before(2, "A"), Edit::Before(2, "B")], "abABcdefg")]
#[case("abcdefg", &[Edit::Before(2, "X"), Edit::Replace(1, 3, "Y")], "aYefg")]
#[case("abcdefg", &[Edit::Before(1, "X"), Edit::Replace(1, 3, "Y")], "aXYefg")]
#[case("abcdefg", &[Edit::Replace(1, 3, "Y"), Edit::Before(1, "X")], "aXYefg")]
#[case("abcdefg", &[Edit::Delete(1, 3), Edit::Delete(2, 5)], "ag")]
#[case("abcdefg", &[Edit::Delete(2, 4), Edit::Before(2, "X"), Edit::Delete(3, 5)], "abXg")]
#[case("abcdefg", &[Edit::After(7, "Z")], "abcdefgZ")]
fn renders_queued_edits(#[case] source: &str, #[case] edits: &[Edit], #[case] expected: &str) {
    let tokens = letters(source);
    let mut rewriter = Rewriter::new(&tokens);
    queue(&mut rewriter, edits);

    assert_eq!(rewriter.text().unwrap(), expected);
}

#[rstest]
#[case("abcdefg", &[Edit::Replace(1, 3, "Y"), Edit::Before(2, "X")], "InsertWithinReplace")]
#[case("abc", &[Edit::Replace(0, 2, "x"), Edit::Before(1, "0")], "InsertWithinReplace")]
#[case("abcccba", &[Edit::Replace(2, 4, "x"), Edit::Before(4, "y")], "InsertWithinReplace")]
#[case("abcdefg", &[Edit::Replace(1, 3, "A"), Edit::Replace(2, 5, "B")], "OverlappingReplace")]
#[case("abcccba", &[Edit::Replace(2, 4, "xyz"), Edit::Replace(3, 5, "foo")], "OverlappingReplace")]
#[case("abcccba", &[Edit::Replace(2, 4, "xyz"), Edit::Replace(1, 3, "foo")], "OverlappingReplace")]
#[case("abcc", &[Edit::Replace(0, 3, "bar"), Edit::Replace(1, 2, "foo")], "OverlappingReplace")]
#[case("abcdefg", &[Edit::Delete(1, 3), Edit::Replace(2, 5, "B")], "OverlappingReplace")]
fn rejects_conflicting_edits(
    #[case] source: &str,
    #[case] edits: &[Edit],
    #[case] expected: &str,
) {
    let tokens = letters(source);
    let mut rewriter = Rewriter::new(&tokens);
    queue(&mut rewriter, edits);

    let err = rewriter.text().unwrap_err();
    assert_eq!(error_kind(&err), expected);
    // The same conflict is reported again; nothing was partially applied.
    assert_eq!(rewriter.text().unwrap_err(), err);
}

#[rstest]
#[case(5, 2)]
#[case(0, 8)]
#[case(8, 8)]
fn invalid_ranges_are_rejected_at_call_time(#[case] from: usize, #[case] to: usize) {
    let tokens = letters("abcdefg");
    let mut rewriter = Rewriter::new(&tokens);

    let err = rewriter.replace(from, to, "x").unwrap_err();
    assert_eq!(error_kind(&err), "InvalidRange");
    assert!(rewriter.delete(from, to).is_err());
    assert!(rewriter.operations().is_empty());
}

#[test]
fn empty_log_renders_original_text() {
    let tokens = BufferedTokenStream::lex("uint8_t i = 0;\nfor (; i < n; i++) {}\n");
    let rewriter = Rewriter::new(&tokens);

    assert_eq!(
        rewriter.text().unwrap(),
        tokens.text(0..=tokens.last_index())
    );
    assert_eq!(rewriter.text_for_range(2, 6).unwrap(), tokens.text(2..=6));
}

#[test]
fn repeated_renders_are_identical() {
    let tokens = letters("abcdefg");
    let mut rewriter = Rewriter::new(&tokens);
    queue(
        &mut rewriter,
        &[
            Edit::Before(1, "x"),
            Edit::Delete(2, 3),
            Edit::Delete(3, 4),
            Edit::Replace(6, 6, "G"),
            Edit::Before(6, "y"),
        ],
    );

    let first = rewriter.text().unwrap();
    assert_eq!(first, "axbfyG");
    assert_eq!(rewriter.text().unwrap(), first);
    assert_eq!(rewriter.text().unwrap(), first);
}

#[rstest]
#[case(&[], "abcdefg")]
#[case(&[Edit::Before(7, "!")], "abcdefg!")]
#[case(&[Edit::Replace(6, 7, "Z")], "abcdefZ")]
#[case(&[Edit::Delete(7, 7)], "abcdefg")]
#[case(&[Edit::Replace(7, 7, "end")], "abcdefgend")]
fn end_of_stream_text_is_never_rendered(#[case] edits: &[Edit], #[case] expected: &str) {
    let tokens = letters("abcdefg");
    let mut rewriter = Rewriter::new(&tokens);
    queue(&mut rewriter, edits);

    let text = rewriter.text().unwrap();
    assert_eq!(text, expected);
    assert!(!text.contains(EOF_TEXT));
}

#[test]
fn trailing_insert_needs_stop_at_last_index() {
    let tokens = letters("abcdefg");
    let mut rewriter = Rewriter::new(&tokens);
    rewriter.insert_after(tokens.last_index(), "Z");

    assert_eq!(rewriter.text_for_range(0, 7).unwrap(), "abcdefgZ");
    assert_eq!(rewriter.text_for_range(0, 100).unwrap(), "abcdefgZ");
    assert_eq!(rewriter.text_for_range(0, 6).unwrap(), "abcdefg");
}

#[rstest]
#[case(5, 2)]
#[case(100, 200)]
#[case(8, 8)]
fn inverted_interval_renders_nothing(#[case] start: usize, #[case] stop: usize) {
    let tokens = letters("abcdefg");
    let mut rewriter = Rewriter::new(&tokens);
    assert_eq!(rewriter.text_for_range(start, stop).unwrap(), "");

    rewriter.insert_before(3, "x");
    rewriter.insert_after(tokens.last_index(), "Z");
    assert_eq!(rewriter.text_for_range(start, stop).unwrap(), "");
    assert_eq!(rewriter.text().unwrap(), "abcxdefgZ");
}

#[test]
fn interval_includes_edits_on_its_edges() {
    let tokens = letters("abcdefg");
    let mut rewriter = Rewriter::new(&tokens);
    rewriter.insert_before(2, "[");
    rewriter.insert_after(4, "]");
    rewriter.replace(0, 0, "A").unwrap();

    let start = tokens.get(2).unwrap();
    let stop = tokens.get(5).unwrap();
    assert_eq!(rewriter.interval_text(start, stop).unwrap(), "[cde]f");
    assert_eq!(rewriter.text_for_range(3, 4).unwrap(), "de");
}

#[test]
fn overlapping_delete_reduces_to_one_gap() {
    let tokens = letters("abcdefg");
    let mut rewriter = Rewriter::new(&tokens);
    rewriter.delete(1, 3).unwrap();
    rewriter.delete(2, 5).unwrap();

    let reduced: Vec<String> = rewriter
        .reduced_operations()
        .unwrap()
        .iter()
        .map(|op| op.to_string())
        .collect();
    assert_eq!(reduced, vec!["D.1-5"]);
}

#[test]
fn rewrites_lexed_c_source() {
    // int0 ws1 main2 (3 )4 ws5 {6 ws7 return8 ws9 0(10) ;11 ws12 }13 EOF14
    let tokens = BufferedTokenStream::lex("int main() { return 0; }");
    let mut rewriter = Rewriter::new(&tokens);

    rewriter.replace(2, 2, "plugin_main").unwrap();
    rewriter.replace(10, 10, "PLUGIN_OK").unwrap();
    rewriter.insert_after(6, "\n\t/* entry */");

    assert_eq!(
        rewriter.text().unwrap(),
        "int plugin_main() {\n\t/* entry */ return PLUGIN_OK; }"
    );
    let body = rewriter
        .interval_text(&tokens.tokens()[8], &tokens.tokens()[11])
        .unwrap();
    assert_eq!(body, "return PLUGIN_OK;");
}

#[test]
fn snapshot_reformatted_function() {
    // void0 ws1 name2 (3 type4 ws5 arg6 )7 ws8 {9 }10 EOF11
    let tokens = BufferedTokenStream::lex("void hapi_gpio_init(uint16_t pin_num) {}");
    let mut rewriter = Rewriter::new(&tokens);

    rewriter.insert_before(0, "#line 27 \"blink.c\"\n");
    rewriter.delete(8, 8).unwrap();
    rewriter.replace(9, 10, "\n{\n}").unwrap();

    assert_snapshot!(rewriter.text().unwrap(), @r#"
    #line 27 "blink.c"
    void hapi_gpio_init(uint16_t pin_num)
    {
    }
    "#);
}
