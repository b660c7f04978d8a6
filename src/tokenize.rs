/// Splits raw text into lowercase alphabetic tokens.
///
/// Words are split on whitespace first, then on internal apostrophes and
/// hyphens, so "don't" yields "don" and "t". Anything non-alphabetic is
/// stripped and pieces that end up empty are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for word in text.split_whitespace() {
        for piece in word.split(['\'', '-']) {
            let token: String = piece
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_lowercase())
                .collect();

            if !token.is_empty() {
                tokens.push(token);
            }
        }
    }

    tokens
}
