use spellcheck::{CorrectorConfig, SpellCorrector, SuggestedCorrection};
use std::{
    env,
    io::{self, Write},
    path::Path,
    process,
};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let corpus_path = args.next().unwrap_or_else(|| "english.txt".into());

    if !Path::new(&corpus_path).exists() {
        eprintln!("Corpus file not found: {}", corpus_path);
        process::exit(1);
    }

    let config = match args.next() {
        Some(config_path) => match CorrectorConfig::from_json_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Unable to load config {}: {}", config_path, e);
                process::exit(1);
            }
        },
        None => CorrectorConfig {
            max_suggestions: Some(5),
            ..Default::default()
        },
    };

    let corrector = match SpellCorrector::from_corpus_file_with_config(&corpus_path, config) {
        Ok(corrector) => corrector,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!(
        "Spell corrector REPL - corpus: {} ({} words)\n:type text, :json to toggle JSON output, :q to quit",
        corpus_path,
        corrector.model().len()
    );
    let mut json = false;
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        match input.trim() {
            ":q" => break,
            ":json" => {
                json = !json;
                continue;
            }
            _ => {}
        }

        for token in input.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            let result = corrector.suggest(&word);
            if json {
                match serde_json::to_string(&result) {
                    Ok(line) => println!("  {}  ->  {}", word, line),
                    Err(e) => eprintln!("  {}  ->  {}", word, e),
                }
                continue;
            }

            match result {
                SuggestedCorrection::AlreadyCorrect => {}
                SuggestedCorrection::NoSuggestions => println!("  {}  ->  ?", word),
                SuggestedCorrection::Suggestions(list) => {
                    let suggestions: Vec<_> = list
                        .into_iter()
                        .map(|s| format!("{} ({:.6})", s.word, s.probability))
                        .collect();
                    println!("  {}  ->  {}", word, suggestions.join(", "));
                }
            }
        }
    }
    Ok(())
}
