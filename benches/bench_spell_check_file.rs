use spellcheck::{RegexTokenizer, SpellCorrector, read_corpus};
use std::time::Instant;

fn main() {
    let corpus_file = "benches/corpus.txt".to_string();
    let text_file = "benches/test_text.txt".to_string();

    let corrector_load_start_time = Instant::now();

    let spell_corrector = SpellCorrector::from_corpus_file(&corpus_file)
        .expect("Unable to build the spell corrector, please ensure benches/corpus.txt exists and contains text.");

    let corrector_load_elapsed_time = corrector_load_start_time.elapsed();
    println!(
        "Elapsed time for loading the spell corrector: {:?}",
        corrector_load_elapsed_time
    );

    let tokenizer = RegexTokenizer::new().expect("word pattern compiles");
    let words = read_corpus(&text_file, &tokenizer).expect("Unable to read text file, please ensure benches/test_text.txt exists.");

    let start_time = Instant::now();

    let _ = spell_corrector.suggest_word_corrections(&words);

    let elapsed_time = start_time.elapsed();
    println!("Elapsed time for spell checking: {:?}", elapsed_time);
    println!(
        "Words corrected per second: {}",
        words.len() as f64 / elapsed_time.as_secs_f64()
    );
}
