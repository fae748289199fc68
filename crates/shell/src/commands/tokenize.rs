//! Splitting a text into tokens.

/// Prints the tokens of `text`, one per line.
pub fn run(text: &str, trailing: bool, json: bool) -> Result<(), String> {
    let tokens = nem_distance::tokenize(text);
    let tokens = if trailing { tokens.with_trailing().collect::<Vec<_>>() } else { tokens.collect() };
    ftlog::debug!("{} tokens in {text:?}", tokens.len());

    if json {
        println!("{}", serde_json::to_string(&tokens).map_err(|e| e.to_string())?);
    } else {
        for token in tokens {
            println!("{token:?}");
        }
    }

    Ok(())
}
