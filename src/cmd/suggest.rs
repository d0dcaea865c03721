use airtype::config::Config;
use airtype::suggest::Suggester;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub config: Config,

    /// Text to complete; suggestions target the last token.
    pub text: String,
}

pub fn run(args: SuggestArgs, suggester: Suggester) {
    println!("\n🔎 Suggestions for \"{}\":", args.text);

    let words = suggester.suggestions(&args.text);
    if words.is_empty() {
        println!("   (none)");
        return;
    }

    for (i, word) in words.iter().enumerate() {
        println!("   {}. {}", i + 1, word);
    }
}
