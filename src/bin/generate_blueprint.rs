use anyhow::{anyhow, bail, Result};
use serde_json::json;

use locomotion_tuner::blueprint::{build_payload, Action, Magnitudes, Mode};

fn print_usage() {
    eprintln!("Usage: generate_blueprint --action <name> [--mode ik|fk]");
    eprintln!("       [--stride N] [--lift N] [--jump-height N]");
    eprintln!("       [--nudge-step N] [--crouch-drop N] [--dash-distance N]");
    eprintln!();
    eprintln!("Actions: nudge_up nudge_down walk_left walk_right run_left run_right");
    eprintln!("         jump crouch_enter crouch_exit dash_left dash_right");
}

fn take_value<'a>(argv: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    argv.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut action = None;
    let mut mode = Mode::Ik;
    let mut magnitudes = Magnitudes::default();

    let mut i = 0;
    while i < argv.len() {
        let flag = argv[i].clone();
        match flag.as_str() {
            "--action" => {
                let value = take_value(&argv, &mut i, &flag)?;
                action = Some(
                    Action::from_name(value)
                        .ok_or_else(|| anyhow!("Unsupported action: {}", value))?,
                );
            }
            "--mode" => {
                let value = take_value(&argv, &mut i, &flag)?;
                mode = Mode::from_name(value).ok_or_else(|| anyhow!("Unknown mode: {}", value))?;
            }
            "--stride" => magnitudes.stride = take_value(&argv, &mut i, &flag)?.parse()?,
            "--lift" => magnitudes.lift = take_value(&argv, &mut i, &flag)?.parse()?,
            "--jump-height" => magnitudes.jump_height = take_value(&argv, &mut i, &flag)?.parse()?,
            "--nudge-step" => magnitudes.nudge_step = take_value(&argv, &mut i, &flag)?.parse()?,
            "--crouch-drop" => magnitudes.crouch_drop = take_value(&argv, &mut i, &flag)?.parse()?,
            "--dash-distance" => {
                magnitudes.dash_distance = take_value(&argv, &mut i, &flag)?.parse()?
            }
            _ => {
                print_usage();
                bail!("Unknown option: {}", flag);
            }
        }
        i += 1;
    }

    let action = match action {
        Some(action) => action,
        None => {
            print_usage();
            bail!("--action is required");
        }
    };

    let payload = build_payload(action, mode, &magnitudes);
    let doc = json!({
        "action": action.name(),
        "mode": mode.name(),
        "payload": payload,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
