use clap::Parser;
use flowwalk::flow::MISSING_LABEL;
use flowwalk::prelude::*;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Walk a UI prototype flow map from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path or URL of the flow map JSON, relative to the working directory
    #[arg(env = "FLOWWALK_MAP", default_value = "flow.json")]
    map_path: String,

    /// Comma-separated triggers to replay; `back` goes back one screen
    #[arg(short, long, value_delimiter = ',')]
    steps: Vec<String>,

    /// Print hotspot rectangles next to each transition
    #[arg(long)]
    show_hotspots: bool,

    /// Keep prompting for commands after loading (and after any scripted steps)
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Keep the later screen when two screens share an id instead of rejecting the map
    #[arg(long)]
    allow_duplicate_screens: bool,
}

/// Everything the terminal front end needs between commands.
struct Walker {
    loader: FlowLoader,
    engine: NavigationEngine,
    base: Url,
    map_path: String,
    show_hotspots: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flowwalk=info,warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let policy = if cli.allow_duplicate_screens {
        DuplicatePolicy::LastWriteWins
    } else {
        DuplicatePolicy::Reject
    };
    let base = current_dir_base().unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let mut walker = Walker {
        loader: FlowLoader::with_indexer(Indexer::builder().duplicate_screens(policy).build()),
        engine: NavigationEngine::new(),
        base,
        map_path: cli.map_path.clone(),
        show_hotspots: cli.show_hotspots,
    };

    if let Err(e) = walker.load(&cli.map_path) {
        exit_with_error(&e.to_string());
    }
    walker.render();

    for step in &cli.steps {
        if let Err(e) = walker.step(step.trim()) {
            exit_with_error(&e.to_string());
        }
    }

    if cli.interactive {
        run_interactive(&mut walker);
    }
}

impl Walker {
    fn load(&mut self, map_path: &str) -> Result<()> {
        match self
            .loader
            .load_from(&FileSource, map_path, &self.base, &mut self.engine)?
        {
            LoadOutcome::Applied { start_screen, .. } => {
                self.map_path = map_path.to_string();
                println!("Loaded screen: {}", start_screen);
            }
            LoadOutcome::Superseded { .. } | LoadOutcome::AlreadyApplied { .. } => {}
        }
        Ok(())
    }

    /// Replays one scripted step. The first transition carrying the trigger wins.
    fn step(&mut self, step: &str) -> Result<()> {
        if step.eq_ignore_ascii_case("back") {
            let outcome = self.engine.go_back()?;
            println!("{}", StatusFormatter::back(&outcome));
        } else {
            let target = self
                .engine
                .current_view()?
                .transitions_for(step)
                .next()
                .map(|t| t.to_screen.clone());
            let Some(target) = target else {
                return Err(format!(
                    "No transition with trigger '{}' from screen '{}'",
                    step,
                    self.engine.current_screen_id().unwrap_or(MISSING_LABEL)
                )
                .into());
            };
            let event = self.engine.navigate(&target, step)?;
            println!("{}", StatusFormatter::event(&event));
        }
        self.render();
        Ok(())
    }

    fn render(&self) {
        let view = match self.engine.current_view() {
            Ok(view) => view,
            Err(e) => {
                println!("{}", StatusFormatter::error(&e));
                return;
            }
        };

        println!("\n--- {} ({}) ---", view.meta.display_name(), view.meta.display_platform());
        println!("Screen:  {}", view.screen.id);
        println!("Image:   {}", view.screen.image_url);
        println!(
            "Path:    {}",
            StatusFormatter::breadcrumbs(view.history, &view.screen.id)
        );

        if view.outgoing.is_empty() {
            println!("No transitions from this screen.");
            return;
        }
        println!("Transitions:");
        for (index, transition) in view.outgoing.iter().enumerate() {
            let affordance = match (transition.affordance(), self.show_hotspots) {
                (Affordance::Hotspot(h), true) => {
                    format!(" [hotspot x={} y={} w={} h={}]", h.x, h.y, h.width, h.height)
                }
                (Affordance::Hotspot(_), false) => " [hotspot]".to_string(),
                (Affordance::List, _) => String::new(),
            };
            println!(
                "  {}: {} -> {}{}",
                index + 1,
                transition.trigger,
                transition.to_screen,
                affordance
            );
        }
    }
}

/// Runs the walker in an interactive, human-friendly mode with prompts.
fn run_interactive(walker: &mut Walker) {
    println!("\nCommands: <number> take transition, b back, h toggle hotspots, r reload, l <path> load, q quit");

    loop {
        let Some(line) = prompt_for_input("Command") else {
            break;
        };
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.as_str(), ""),
        };

        let result = match command {
            "" => continue,
            "q" | "quit" => break,
            "b" | "back" => walker.step("back"),
            "h" => {
                walker.show_hotspots = !walker.show_hotspots;
                walker.render();
                Ok(())
            }
            "r" | "reload" => {
                let path = walker.map_path.clone();
                walker.load(&path).map(|_| walker.render())
            }
            "l" | "load" if !argument.is_empty() => {
                walker.load(argument).map(|_| walker.render())
            }
            other => match other.parse::<usize>() {
                Ok(number) if number > 0 => walker
                    .engine
                    .follow(number - 1)
                    .map(|event| {
                        println!("{}", StatusFormatter::event(&event));
                        walker.render();
                    })
                    .map_err(Into::into),
                _ => Err(format!("Unknown command '{}'", line).into()),
            },
        };

        if let Err(e) = result {
            println!("{}", StatusFormatter::error(e.as_ref()));
        }
    }
}

/// A helper function to prompt the user and read a line of input. `None` on end of input.
fn prompt_for_input(prompt_text: &str) -> Option<String> {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout().flush().ok()?;

    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
