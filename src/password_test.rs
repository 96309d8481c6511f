use super::*;

#[test]
fn empty_scores_zero() {
    assert_eq!(score(""), 0);
}

#[test]
fn eight_lowercase_scores_length_and_lower() {
    assert_eq!(score("abcdefgh"), 2);
}

#[test]
fn ten_chars_all_classes_misses_long_bonus() {
    assert_eq!(score("Abcdefgh1!"), 5);
}

#[test]
fn twelve_chars_all_classes_is_max() {
    assert_eq!(score("aA1!aA1!aA1!"), MAX_SCORE);
}

#[test]
fn each_class_counts_once() {
    assert_eq!(score("a"), 1);
    assert_eq!(score("A"), 1);
    assert_eq!(score("7"), 1);
    assert_eq!(score("#"), 1);
    assert_eq!(score("aaaa"), 1);
}

#[test]
fn length_thresholds_are_inclusive() {
    assert_eq!(score("1234567"), 1);
    assert_eq!(score("12345678"), 2);
    assert_eq!(score("12345678901"), 2);
    assert_eq!(score("123456789012"), 3);
}

#[test]
fn whitespace_counts_as_special() {
    assert_eq!(score("a b"), 2);
}

#[test]
fn non_ascii_letters_are_special_not_letters() {
    // 'é' is neither ASCII lowercase nor ASCII alphanumeric.
    assert_eq!(score("é"), 1);
    assert_eq!(score("É"), 1);
}

#[test]
fn bmp_characters_count_once() {
    // Seven two-byte characters: 14 bytes but one UTF-16 unit each.
    assert_eq!(score("ééééééé"), 1);
}

#[test]
fn astral_characters_count_as_two_units() {
    // Four emoji are eight UTF-16 units.
    assert_eq!(score("😀😀😀😀"), 2);
    assert_eq!(score("😀😀😀"), 1);
}

#[test]
fn six_emoji_reach_long_bonus() {
    assert_eq!(score("😀😀😀😀😀😀"), 3);
}

#[test]
fn score_never_exceeds_max() {
    let samples = ["", "x", "Passw0rd!", "correct horse battery staple", "ZZZZzzzz9999$$$$"];
    for sample in samples {
        assert!(score(sample) <= MAX_SCORE, "{sample}");
    }
}
