use anyhow::{anyhow, bail, Result};
use locomotion_tuner::config::Config;
use locomotion_tuner::motion::derive_motion_constants;
use locomotion_tuner::pose::{load_frames, load_json};
use locomotion_tuner::render::{render_json, render_ts, Format};

const CONFIG_PATH: &str = "config.toml";

struct Args {
    input: String,
    min_confidence: Option<f64>,
    format: Format,
}

fn print_usage() {
    eprintln!("Usage: locomotion-tuner <input.json> [--min-confidence N] [--format ts|json]");
}

fn take_value<'a>(argv: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    argv.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_args(argv: &[String]) -> Result<Args> {
    let mut input = None;
    let mut min_confidence = None;
    let mut format = Format::Ts;

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "--min-confidence" => {
                let value = take_value(argv, &mut i, "--min-confidence")?;
                min_confidence = Some(value.parse()?);
            }
            "--format" => {
                let value = take_value(argv, &mut i, "--format")?;
                format = Format::from_name(value)
                    .ok_or_else(|| anyhow!("Unknown format: {}", value))?;
            }
            arg if arg.starts_with("--") => {
                print_usage();
                bail!("Unknown option: {}", arg);
            }
            arg => {
                if input.is_some() {
                    bail!("Multiple input paths given");
                }
                input = Some(arg.to_string());
            }
        }
        i += 1;
    }

    let input = match input {
        Some(path) => path,
        None => {
            print_usage();
            bail!("Input JSON path is required");
        }
    };
    Ok(Args {
        input,
        min_confidence,
        format,
    })
}

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|arg| arg == "--version") {
        println!("locomotion-tuner {}", env!("GIT_VERSION"));
        return Ok(());
    }
    let args = parse_args(&argv)?;
    let config = Config::load_or_default(CONFIG_PATH);
    let min_confidence = args.min_confidence.unwrap_or(config.tuning.min_confidence);

    let payload = load_json(&args.input)?;
    let frames = load_frames(&payload);
    if frames.is_empty() {
        bail!("No valid OpenPose-style frames found in input");
    }
    eprintln!(
        "フレーム数: {} (min_confidence = {}, format = {})",
        frames.len(),
        min_confidence,
        args.format.name()
    );

    let constants = derive_motion_constants(&frames, min_confidence)?;
    match args.format {
        Format::Json => println!("{}", render_json(&constants)?),
        Format::Ts => println!("{}", render_ts(&constants)),
    }
    Ok(())
}
