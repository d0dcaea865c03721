use airtype::config::Config;
use airtype::engine::{EngineEvent, KeyboardEngine};
use airtype::input::{GestureSource, TraceSource};
use airtype::suggest::Suggester;
use clap::Args;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON gesture trace to replay through the engine.
    #[arg(short, long)]
    pub trace: String,

    /// Print the hover target on every tick, not just on commits.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn run(args: SimulateArgs, suggester: Suggester) {
    if let Err(e) = args.config.geometry.validate() {
        eprintln!("❌ {}", e);
        process::exit(1);
    }

    let mut source = match TraceSource::load_from_file(&args.trace) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Could not load trace '{}': {}", args.trace, e);
            process::exit(1);
        }
    };

    let mut engine = KeyboardEngine::new(&args.config.geometry, suggester);

    println!("\n▶️  Replaying trace: {}", args.trace);
    let mut ticks = 0usize;
    let mut commits = 0usize;

    while let Some(sample) = source.next_sample() {
        ticks += 1;
        match engine.tick(sample) {
            // A commit would trigger the acknowledgment cue here; the
            // audio collaborator consumes the event fire-and-forget.
            Some(EngineEvent::KeyCommitted(key)) => {
                commits += 1;
                println!("   [{:>4}] 🔊 key: {}", ticks, key.legend());
            }
            Some(EngineEvent::SuggestionApplied(word)) => {
                commits += 1;
                println!("   [{:>4}] 🔊 suggestion: {}", ticks, word);
            }
            None => {
                if args.verbose {
                    println!("   [{:>4}] hover: {:?}", ticks, engine.target());
                }
            }
        }
    }

    println!("\n📝 === SESSION RESULT ===");
    println!("   Ticks: {} | Commits: {}", ticks, commits);
    println!("   Text: \"{}\"", engine.text());

    let suggestions = engine.suggestions();
    if !suggestions.is_empty() {
        println!("   Suggestions: {}", suggestions.join(", "));
    }
}
