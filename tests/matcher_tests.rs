use std::collections::HashSet;

use word_play::{solve, SubsetMatcher, Tokens, WordIndex};

fn get_test_words() -> Vec<&'static str> {
    vec![
        "cat", "cats", "act", "Cats", "dog", "ca's", "scat", "tact", "a", "at", "sat's", "Paris",
        "5", "acts", "casts",
    ]
}

#[test]
fn test_end_to_end_example() {
    let report = solve("cats", ["cat", "cats", "act", "Cats", "dog", "ca's"]);

    let found: HashSet<&str> = report.words.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = ["act", "ca", "cat", "cats"].into_iter().collect();
    assert_eq!(found, expected);
    assert_eq!(report.total, 4);
    assert_eq!(report.words, ["ca", "cat", "act", "cats"]);
}

#[test]
fn test_report_display() {
    let report = solve("cats", ["cat", "cats", "act", "Cats", "dog", "ca's"]);
    assert_eq!(report.to_string(), "ca\ncat\nact\ncats\nTotal matches: 4");
}

#[test]
fn test_empty_report_display() {
    let report = solve("xyz", ["cat"]);
    assert_eq!(report.total, 0);
    assert_eq!(report.to_string(), "Total matches: 0");
}

#[test]
fn test_signature_is_not_sufficient() {
    let tokens = Tokens::parse("aabc");
    let index = WordIndex::build(&tokens, ["aaab", "aab", "cab"]);
    // all three pass the signature pre-filter
    assert_eq!(index.len(), 3);

    let report = SubsetMatcher::new(&tokens).find_matches(&index);
    assert!(!report.contains("aaab"));
    assert!(report.contains("aab"));
    assert!(report.contains("cab"));
    assert_eq!(report.total, 2);
}

#[test]
fn test_multiplicity_balloon() {
    let report = solve("balloon", ["ball", "bloom", "loan", "balloons", "noon"]);
    assert_eq!(report.words, ["ball", "loan"]);
}

#[test]
fn test_case_insensitive_tokens() {
    let words = get_test_words();
    assert_eq!(solve("CAT", &words), solve("cat", &words));
    assert_eq!(solve("CaTs", &words), solve("cats", &words));
}

#[test]
fn test_proper_nouns_never_match() {
    let report = solve("aiprs", ["Paris", "5"]);
    assert_eq!(report.total, 0);
    assert!(report.words.is_empty());
}

#[test]
fn test_annotations_match_like_plain_entries() {
    let plain = solve("cats", ["cat"]);
    assert_eq!(solve("cats", ["cat's"]), plain);
    assert_eq!(solve("cats", ["cat/verb"]), plain);
    assert_eq!(solve("cat", ["cat's"]).words, ["cat"]);
}

#[test]
fn test_duplicate_entries_match_once() {
    let report = solve("cat", ["cat", "cat"]);
    assert_eq!(report.words, ["cat"]);
    assert_eq!(report.total, 1);
}

#[test]
fn test_ineligible_tokens_match_nothing() {
    let words = get_test_words();
    for tokens in ["c4t", "it's", "-cats", "cats!"] {
        let report = solve(tokens, &words);
        assert_eq!(report.total, 0, "Matches for tokens: {}", tokens);
        assert_eq!(report.to_string(), "Total matches: 0");
    }
}

#[test]
fn test_is_match() {
    let matcher = SubsetMatcher::new(&Tokens::parse("tacts"));
    assert!(matcher.is_match("tact"));
    assert!(matcher.is_match("cast"));
    assert!(!matcher.is_match("tatts"));
    assert!(!matcher.is_match("tactss"));
    assert!(!matcher.is_match("Tact"));
}

#[test]
fn test_parallel_matches_sequential() {
    let words = get_test_words();
    for tokens in ["cats", "tacts", "a", "scat", "xyz", ""] {
        let tokens = Tokens::parse(tokens);
        let index = WordIndex::build(&tokens, &words);
        let matcher = SubsetMatcher::new(&tokens);
        assert_eq!(
            matcher.find_matches_par(&index),
            matcher.find_matches(&index),
            "Mismatch for tokens: {}",
            tokens.as_str()
        );
    }
}

#[test]
fn test_output_order_shortest_first() {
    let words = get_test_words();
    let report = solve("tacts", &words);
    for pair in report.words.windows(2) {
        assert!(pair[0].len() <= pair[1].len(), "{} before {}", pair[0], pair[1]);
    }
    assert_eq!(
        report.words,
        ["a", "ca", "at", "cat", "act", "sat", "cats", "scat", "tact", "acts"]
    );
}
