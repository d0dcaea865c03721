// ===== airtype/src/main.rs =====
use airtype::config::SuggestParams;
use airtype::suggest::{FrequencyModel, Suggester, TrainedModel, WordPredictor};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/corpus_es.tsv")]
    corpus: String,

    #[arg(global = true, short, long, default_value = "data/trained_model.json")]
    model: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Simulate(cmd::simulate::SimulateArgs),
    Suggest(cmd::suggest::SuggestArgs),
    Layout(cmd::layout::LayoutArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "airtype=debug" } else { "airtype=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    println!("\n🖐️  Initializing AirType Engine...");

    match cli.command {
        Commands::Simulate(args) => {
            let suggester = build_suggester(&cli.corpus, &cli.model, args.config.suggest.clone());
            cmd::simulate::run(args, suggester);
        }
        Commands::Suggest(args) => {
            let suggester = build_suggester(&cli.corpus, &cli.model, args.config.suggest.clone());
            cmd::suggest::run(args, suggester);
        }
        // Layout inspection needs no models.
        Commands::Layout(args) => cmd::layout::run(args),
    }
}

/// Loads the corpus and the trained prediction artifact. Both loads
/// degrade gracefully: a missing corpus means an empty frequency model,
/// a missing artifact means a frequency-only session.
fn build_suggester(corpus_path: &str, model_path: &str, params: SuggestParams) -> Suggester {
    println!("📚 Loading Corpus: {}", corpus_path);
    let freq = match FrequencyModel::load_from_tsv(corpus_path, &params) {
        Ok(model) => {
            println!("   -> {} words loaded.", model.len());
            model
        }
        Err(e) => {
            eprintln!("⚠️  Could not load corpus: {} (suggestions degraded)", e);
            FrequencyModel::default()
        }
    };

    println!("🧠 Loading Prediction Model: {}", model_path);
    let predictor: Option<Box<dyn WordPredictor>> = match TrainedModel::load_from_file(model_path)
    {
        Ok(model) => {
            println!("   -> Prediction model ready.");
            Some(Box::new(model))
        }
        Err(e) => {
            eprintln!("⚠️  Could not load prediction model: {} (frequency fallback)", e);
            None
        }
    };

    Suggester::new(freq, predictor, params)
}
