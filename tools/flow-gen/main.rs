use clap::Parser;
use rand::rngs::ThreadRng;
use rand::{Rng, rng};
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate synthetic flow maps for the Flowwalk engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of screens to generate
    #[arg(long, default_value_t = 12)]
    screens: usize,

    /// The maximum number of outgoing transitions per screen
    #[arg(long, default_value_t = 3)]
    max_out: usize,

    /// Percentage of transitions that get a hotspot rectangle
    #[arg(long, default_value_t = 70)]
    hotspot_percent: u32,
}

const SCREEN_WIDTH: f64 = 375.0;
const SCREEN_HEIGHT: f64 = 812.0;
const TRIGGERS: [&str; 6] = ["tap_card", "tap_button", "swipe_left", "open_menu", "submit", "select_item"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.screens == 0 {
        eprintln!("Error: --screens must be at least 1");
        std::process::exit(1);
    }
    if cli.hotspot_percent > 100 {
        eprintln!("Error: --hotspot-percent ({}) cannot exceed 100", cli.hotspot_percent);
        std::process::exit(1);
    }

    println!(
        "Generating flow map ({} screens, up to {} transitions each)...",
        cli.screens, cli.max_out
    );

    let ids: Vec<String> = (0..cli.screens).map(|i| format!("screen_{:03}", i)).collect();
    let screens: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "id": id, "image": format!("screens/{}.png", id) }))
        .collect();
    let transitions = generate_transitions(&mut rng, &ids, cli.max_out, cli.hotspot_percent);
    println!("-> Generated {} transition(s).", transitions.len());

    let flow_map = json!({
        "flow_name": "Generated flow",
        "platform": "mobile",
        "start_screen": ids[0],
        "screens": screens,
        "transitions": transitions,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&flow_map)?)?;
    println!("Successfully generated and saved flow map to '{}'", cli.output);

    Ok(())
}

/// Links every screen to its successor so the whole map is reachable, then adds random edges.
fn generate_transitions(
    rng: &mut ThreadRng,
    ids: &[String],
    max_out: usize,
    hotspot_percent: u32,
) -> Vec<Value> {
    let mut transitions = Vec::new();

    for (index, from) in ids.iter().enumerate() {
        let mut count = if max_out == 0 { 0 } else { rng.random_range(0..=max_out) };
        if let Some(next) = ids.get(index + 1) {
            transitions.push(generate_transition(rng, from, next, hotspot_percent));
            count = count.saturating_sub(1);
        }
        for _ in 0..count {
            let to = &ids[rng.random_range(0..ids.len())];
            transitions.push(generate_transition(rng, from, to, hotspot_percent));
        }
    }

    transitions
}

fn generate_transition(rng: &mut ThreadRng, from: &str, to: &str, hotspot_percent: u32) -> Value {
    let trigger = TRIGGERS[rng.random_range(0..TRIGGERS.len())];
    let mut transition = json!({ "from_screen": from, "to_screen": to, "trigger": trigger });

    if rng.random_range(0..100) < hotspot_percent {
        let width = rng.random_range(40.0..SCREEN_WIDTH);
        let height = rng.random_range(30.0..120.0);
        transition["hotspot"] = json!({
            "x": rng.random_range(0.0..SCREEN_WIDTH - width).round(),
            "y": rng.random_range(0.0..SCREEN_HEIGHT - height).round(),
            "width": width.round(),
            "height": height.round(),
        });
    }

    transition
}
