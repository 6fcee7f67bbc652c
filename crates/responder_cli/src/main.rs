use std::error::Error;
use std::io::{self, BufRead, BufReader, Write};

use chat_model::Category;
use clap::Parser;
use clio::{Input, Output};
use flexi_logger::Logger;
use log::info;
use responder::{RandomSource, Responder, ResponderConfig, SeededRandom, ThreadRandom};

/// Answers chat messages with the portfolio chatbot, one message per line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Messages to answer, one per line
    #[clap(long, short, value_parser, default_value = "-")]
    input: Input,

    /// YAML response table replacing the built-in one
    #[clap(long, value_parser)]
    responses: Option<Input>,

    /// Seed for reproducible response selection
    #[clap(long)]
    seed: Option<u64>,

    /// Print only the category of each message
    #[clap(long)]
    classify_only: bool,

    #[clap(long, short, value_parser, default_value = "-")]
    output: Output,
}

/// Answers every non-blank line of `input`. Returns how many lines were answered.
fn run<R: RandomSource>(
    input: impl BufRead,
    mut output: impl Write,
    responder: &Responder<R>,
    classify_only: bool,
) -> io::Result<usize> {
    let mut answered = 0;
    for line in input.lines() {
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        let category: Category = responder.classify(message);
        if classify_only {
            writeln!(output, "{category}")?;
        } else {
            writeln!(output, "{category}: {}\n", responder.respond(category))?;
        }
        answered += 1;
    }
    Ok(answered)
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;
    let Args {
        input,
        responses,
        seed,
        classify_only,
        output,
    } = Args::parse();

    let config: ResponderConfig = match responses {
        Some(file) => serde_yaml::from_reader(file)?,
        None => Default::default(),
    };
    let random: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let responder = Responder::with_random(config, random)?;

    let answered = run(BufReader::new(input), output, &responder, classify_only)?;
    info!("Answered {answered} messages");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: &str = "Hello!\n\n   \nWhat services do you offer?\r\nasdkjasd\n";

    fn seeded(seed: u64) -> Responder<SeededRandom> {
        Responder::with_random(ResponderConfig::default(), SeededRandom::new(seed)).unwrap()
    }

    fn run_to_string(responder: &Responder<SeededRandom>, classify_only: bool) -> (usize, String) {
        let mut output = vec![];
        let answered = run(MESSAGES.as_bytes(), &mut output, responder, classify_only).unwrap();
        (answered, String::from_utf8(output).unwrap())
    }

    #[test]
    fn classify_only_skips_blank_lines() {
        let (answered, output) = run_to_string(&seeded(1), true);
        assert_eq!(answered, 3);
        assert_eq!(output, "greeting\nservices\ndefault\n");
    }

    #[test]
    fn answers_as_category_and_response() {
        let (answered, output) = run_to_string(&seeded(5), false);
        assert_eq!(answered, 3);
        let replay = seeded(5);
        let expected: String = [Category::Greeting, Category::Services, Category::Default]
            .into_iter()
            .map(|category| format!("{category}: {}\n\n", replay.respond(category)))
            .collect();
        assert_eq!(output, expected);
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(run_to_string(&seeded(42), false), run_to_string(&seeded(42), false));
    }

    #[test]
    fn empty_input_answers_nothing() {
        let mut output = vec![];
        let answered = run("\n \n".as_bytes(), &mut output, &seeded(1), false).unwrap();
        assert_eq!(answered, 0);
        assert!(output.is_empty());
    }
}
