use std::io::{self, Write};

use collections::Dict;

/// Number of ranked lines the client prints
pub const TOP_WORDS: usize = 20;

/// One line of the frequency ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    pub token: String,
    pub count: u64,
    /// `count / total_tokens`, rounded half-up to two decimals
    pub frequency: f64,
}

/// Extracts the `limit` highest-count words from the tally.
///
/// The entry snapshot is insertion-sorted ascending by count, then the tail
/// of the sorted run is reversed into descending rank order. Equal counts
/// keep the order the snapshot handed them over in.
pub fn top_words(tally: &Dict<String, u64>, total_tokens: u64, limit: usize) -> Vec<RankedWord> {
    let mut entries: Vec<(String, u64)> = tally.entry_set().into_iter().collect();
    if entries.is_empty() || total_tokens == 0 {
        return Vec::new();
    }

    insertion_sort(&mut entries);

    let cut = entries.len() - limit.min(entries.len());
    entries[cut..]
        .iter()
        .rev()
        .map(|(token, count)| RankedWord {
            token: token.clone(),
            count: *count,
            frequency: round_to_hundredths(*count as f64 / total_tokens as f64),
        })
        .collect()
}

/// Prints `<rank>. <token> - <frequency>` lines, best first, rank from 1
pub fn print_ranking<W: Write>(out: &mut W, ranking: &[RankedWord]) -> io::Result<()> {
    for (place, word) in ranking.iter().enumerate() {
        writeln!(out, "{}. {} - {:.2}", place + 1, word.token, word.frequency)?;
    }
    Ok(())
}

// [private]

/// Stable insertion sort, ascending by count
fn insertion_sort(entries: &mut [(String, u64)]) {
    for i in 1..entries.len() {
        let mut j = i;
        // strict less-than: equal counts never move past each other
        while j > 0 && entries[j].1 < entries[j - 1].1 {
            entries.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Round half-up to two decimal places
fn round_to_hundredths(x: f64) -> f64 {
    (x * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod test {
    use collections::Dict;

    use super::{
        RankedWord, TOP_WORDS, insertion_sort, print_ranking, round_to_hundredths, top_words,
    };

    fn tally(counts: &[(&str, u64)]) -> Dict<String, u64> {
        let mut d = Dict::new();
        for (token, count) in counts {
            d.insert(token.to_string(), *count);
        }
        d
    }

    #[test]
    fn ranks_by_descending_count_with_normalized_frequencies() {
        let d = tally(&[("a", 5), ("b", 3), ("c", 9), ("d", 1)]);

        let ranking = top_words(&d, 18, TOP_WORDS);

        let tokens: Vec<&str> = ranking.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(tokens, ["c", "a", "b", "d"]);

        let frequencies: Vec<f64> = ranking.iter().map(|w| w.frequency).collect();
        assert_eq!(frequencies, [0.50, 0.28, 0.17, 0.06]);
    }

    #[test]
    fn printed_lines_carry_rank_token_and_two_decimals() {
        let d = tally(&[("a", 5), ("b", 3), ("c", 9), ("d", 1)]);
        let ranking = top_words(&d, 18, TOP_WORDS);

        let mut out = Vec::new();
        print_ranking(&mut out, &ranking).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. c - 0.50\n2. a - 0.28\n3. b - 0.17\n4. d - 0.06\n"
        );
    }

    #[test]
    fn limit_cuts_the_ranking() {
        let d = tally(&[("a", 5), ("b", 3), ("c", 9), ("d", 1)]);

        let ranking = top_words(&d, 18, 2);
        let tokens: Vec<&str> = ranking.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(tokens, ["c", "a"]);
    }

    #[test]
    fn fewer_entries_than_the_limit_all_rank() {
        let d = tally(&[("a", 2), ("b", 1)]);

        assert_eq!(top_words(&d, 3, TOP_WORDS).len(), 2);
    }

    #[test]
    fn empty_tally_ranks_nothing() {
        let d = Dict::new();

        let ranking = top_words(&d, 0, TOP_WORDS);
        assert!(ranking.is_empty());

        let mut out = Vec::new();
        print_ranking(&mut out, &ranking).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn insertion_sort_is_stable_on_equal_counts() {
        let mut entries = vec![
            ("x".to_string(), 2),
            ("y".to_string(), 1),
            ("z".to_string(), 2),
        ];

        insertion_sort(&mut entries);

        let tokens: Vec<&str> = entries.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, ["y", "x", "z"]);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(0.5), 0.50);
        assert_eq!(round_to_hundredths(1.0 / 18.0), 0.06);
        assert_eq!(round_to_hundredths(5.0 / 18.0), 0.28);
    }

    #[test]
    fn ranked_word_carries_the_raw_count() {
        let d = tally(&[("a", 5)]);

        let ranking = top_words(&d, 5, TOP_WORDS);
        assert_eq!(ranking, [RankedWord {
            token: "a".to_string(),
            count: 5,
            frequency: 1.0,
        }]);
    }
}
