use crate::commands::{print_json, Context};
use crate::error::{invalid_input, reference_unavailable, round_failed};
use crate::source::SelectedSource;
use anyhow::{Context as _, Result};
use clap::Args;
use okved_core::{Game, GameResult, MatchOutcome};
use okved_source::CachedRepository;
use std::io::{self, BufRead, Write};

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Phone number in any format; prompts on stdin when omitted
    pub phone: Option<String>,
}

pub fn play(ctx: &Context<'_>, args: PlayArgs) -> Result<()> {
    let source = SelectedSource::resolve(&ctx.source, ctx.config)?;
    let mut repository = CachedRepository::new(source);

    if !ctx.json {
        println!("Find your OKVED code by phone number");
        println!("Loading reference list...");
    }
    repository.preload().map_err(reference_unavailable)?;
    if !ctx.json {
        println!("Reference list loaded.\n");
    }

    let raw_phone = match args.phone {
        Some(phone) => phone,
        None => prompt_phone(ctx.json)?,
    };

    let result = Game::new(&mut repository).play(&raw_phone);

    if ctx.json {
        print_json(&result)?;
    }
    match result {
        GameResult::Match(outcome) => {
            if !ctx.json {
                render_outcome(&outcome);
            }
            Ok(())
        }
        GameResult::Error(info) => Err(round_failed(info)),
    }
}

// Prompts go to stderr in JSON mode so stdout stays machine-readable.
fn prompt_phone(json: bool) -> Result<String> {
    let prompt = "Enter a Russian mobile number in any format.\n(Press Ctrl+C to quit)\n\nPhone number: ";
    if json {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt}")?;
        stderr.flush()?;
    } else {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
    }

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .with_context(|| "read phone number")?;
    if read == 0 {
        return Err(invalid_input("no phone number entered"));
    }
    Ok(line)
}

fn render_outcome(outcome: &MatchOutcome) {
    println!("Result:");
    println!("- normalized phone: {}", outcome.normalized_phone);
    println!("- OKVED: {} - {}", outcome.code, outcome.name);
    println!("- suffix match length: {}", outcome.match_length);
    println!("- fallback used: {}", outcome.used_fallback);
}
