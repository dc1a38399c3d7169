use criterion::{Criterion, criterion_group, criterion_main};
use spellcheck::{RegexTokenizer, SpellCorrector, Tokenizer};

const CORPUS: &str = include_str!("corpus.txt");

fn bench_spell_check_string(c: &mut Criterion) {
    let tokenizer = RegexTokenizer::new().expect("word pattern compiles");
    let spell_corrector =
        SpellCorrector::from_tokens(tokenizer.tokenize(CORPUS)).expect("corpus is not empty");

    let text_content = "This is a short sntence with some misspelled wrds. It is used for testing the spell checker functionality.";
    let words = tokenizer.tokenize(text_content);

    c.bench_function("spell_check_words", |b| {
        b.iter(|| {
            let _ = spell_corrector.suggest_word_corrections(&words);
        })
    });

    c.bench_function("spell_check_single_word", |b| {
        b.iter(|| {
            let _ = spell_corrector.suggest("misspeled");
        })
    });
}

criterion_group!(benches, bench_spell_check_string);
criterion_main!(benches);
