use nem_distance::{is_word_char, phrase_edit_distance, tokenize, Algorithm};

/// Drops the separator that ends each token and keeps the words.
fn words(text: &str) -> Vec<&str> {
    tokenize(text)
        .map(|t| t.trim_end_matches(|c: char| !is_word_char(c)))
        .filter(|w| !w.is_empty())
        .collect()
}

#[test]
fn declaration() {
    let text = "We the people of the United States.";

    let tokens = tokenize(text).collect::<Vec<_>>();
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens.last(), Some(&"States."));
    assert_eq!(tokens.concat(), text);

    assert_eq!(words(text).join(" "), "We the people of the United States");
}

#[test]
fn word_order_survives() {
    let text = "This is a test of the emergency broadcast system.  It is only a test.";
    assert_eq!(
        words(text).join(" "),
        "This is a test of the emergency broadcast system It is only a test"
    );
}

#[test]
fn tokens_cover_the_text() {
    for text in [
        "Hello, world!",
        "It's a dog-eat-dog world, isn't it?",
        "--dashes-- and 'quotes'.",
        "tabs\tand\nnewlines\n",
    ] {
        // every character is yielded exactly once when the trailing token is kept
        assert_eq!(tokenize(text).with_trailing().collect::<String>(), text);
    }
}

#[test]
fn reordered_words() {
    let x = "It's a dog-eat-dog world.";
    let y = "A dog-eat-dog world it's.";

    assert_eq!(words(x), vec!["It's", "a", "dog-eat-dog", "world"]);
    assert_eq!(phrase_edit_distance(x, y, Algorithm::None), Ok(0));
    assert_eq!(phrase_edit_distance(x, y, Algorithm::Levenshtein), Ok(4));
}
