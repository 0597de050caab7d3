use anyhow::Context;
use clap::Parser;
use dice_engine::{Engine, parse};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "roll")]
#[command(about = "Roll dice using RPG notation, e.g. 3d6 or 1d20+5")]
#[command(version = dice_engine::version())]
struct Cli {
    /// Dice notation: <count>d<sides> with an optional +N/-N modifier
    notation: String,
    /// RNG seed for determinism (omit for a random seed)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of times to roll the notation
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
    /// Show each die alongside the total
    #[arg(long)]
    individual: bool,
    /// Emit results as JSON
    #[arg(long)]
    json: bool,
    /// Log every die draw
    #[arg(long)]
    verbose: bool,
}

#[derive(Serialize)]
struct RollRecord {
    notation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    rolls: Vec<RollLine>,
}

#[derive(Serialize)]
struct RollLine {
    total: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    dice: Option<Vec<i32>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        dice_engine::init_tracing();
    }

    let request =
        parse(&cli.notation).with_context(|| format!("cannot roll '{}'", cli.notation))?;
    let mut engine = Engine::seeded(cli.seed);

    let mut lines = Vec::with_capacity(cli.count as usize);
    for _ in 0..cli.count {
        if cli.individual {
            let detail = engine.roll_individual(request.count, request.sides)?;
            lines.push(RollLine {
                total: detail.sum + request.modifier,
                dice: Some(detail.rolls),
            });
        } else {
            lines.push(RollLine {
                total: engine.roll_notation(&cli.notation)?,
                dice: None,
            });
        }
    }

    if cli.json {
        let record = RollRecord {
            notation: request.to_string(),
            seed: cli.seed,
            rolls: lines,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let label_runs = cli.count > 1;
    for (i, line) in lines.iter().enumerate() {
        if label_runs {
            print!("Roll {}: ", i + 1);
        }
        match &line.dice {
            Some(dice) => {
                let shown: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
                if request.modifier != 0 {
                    println!(
                        "{} [{}] {:+} = {}",
                        request,
                        shown.join(", "),
                        request.modifier,
                        line.total
                    );
                } else {
                    println!("{} [{}] = {}", request, shown.join(", "), line.total);
                }
            }
            None => println!("{}", line.total),
        }
    }
    Ok(())
}
