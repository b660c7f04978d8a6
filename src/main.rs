use std::io;
use std::process::ExitCode;
use std::{env, fs};

use collections::Dict;
use log::{debug, trace};
use wordfreqs::WordFreqsError;
use wordfreqs::rank::{self, TOP_WORDS};
use wordfreqs::tokenize::tokenize;

fn main() -> ExitCode {
    env_logger::builder().init();

    match run(env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: Option<String>) -> Result<(), WordFreqsError> {
    let path = path.ok_or(WordFreqsError::MissingInputPath)?;
    let text = fs::read_to_string(&path)?;

    let tokens = tokenize(&text);
    debug!(target:"run", "read {} tokens from {}", tokens.len(), path);

    if tokens.is_empty() {
        println!("File contains no text");
        return Ok(());
    }

    let total = tokens.len() as u64;
    let mut tally: Dict<String, u64> = Dict::new();
    for token in tokens {
        match tally.get_mut(&token) {
            Some(count) => *count += 1,
            None => {
                tally.insert(token, 1);
            }
        }
    }
    trace!(target:"run", "{} distinct words, table capacity {}", tally.len(), tally.capacity());

    let ranking = rank::top_words(&tally, total, TOP_WORDS);
    let mut stdout = io::stdout().lock();
    rank::print_ranking(&mut stdout, &ranking)?;

    Ok(())
}
