use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use verbclad::construct::ClassNode;
use verbclad::identifier::SenseKey;
use verbclad::index::Index;
use verbclad::parsed::ParsedClass;
use verbclad::settings::Settings;
use verbclad::{Result, VerbcladError};

#[derive(Debug, Parser)]
#[command(name = "verbclad")]
#[command(about = "Look up verb classes, members and sense keys in a parsed verb class resource")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (defaults to an optional verbclad.toml in the working directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON file with the parsed forest, overriding the settings
    #[arg(long, value_name = "FILE")]
    resource: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show a class with its inherited members and frames
    Id { id: String },
    /// Classes and members for a lemma
    Lemma { lemma: String },
    /// Members mapped to a sense key
    Key { key: String },
    /// Thematic roles of a class with resolved selectional restrictions
    Roles { id: String },
    /// Size of the loaded resource
    Stats,
}

fn load(path: &Path) -> Result<Index> {
    let reader = BufReader::new(File::open(path)?);
    let roots: Vec<ParsedClass> = serde_json::from_reader(reader)?;
    Index::build(roots)
}

fn show_class(index: &Index, class: &ClassNode) {
    let forest = index.forest();
    println!("{}", class);
    if let Some(parent) = forest.parent(class) {
        println!("  parent: {}", parent);
    }
    let subclasses: Vec<String> = forest.subclasses(class).iter().map(|c| c.to_string()).collect();
    if !subclasses.is_empty() {
        println!("  subclasses: {}", subclasses.join(", "));
    }
    let members: Vec<&str> = forest
        .members_include_inherited(class)
        .iter()
        .map(|m| m.verbnet_key())
        .collect();
    println!("  members: {}", members.join(", "));
    for frame in forest.frames_include_inherited(class) {
        let syntax: Vec<String> = frame.syntax.iter().map(|s| s.to_string()).collect();
        println!("  frame {}: {}", frame.description.primary, syntax.join(" "));
    }
}

fn run(cli: Cli, settings: Settings) -> Result<()> {
    let resource = cli
        .resource
        .or(settings.resource)
        .ok_or_else(|| VerbcladError::Config(String::from("no resource file given")))?;
    info!(resource = %resource.display(), "loading resource");
    let index = load(&resource)?;
    match cli.command {
        Commands::Id { id } => {
            let class = index.get_by_id(&id)?;
            show_class(&index, class);
        }
        Commands::Lemma { lemma } => {
            for class in index.get_by_lemma(&lemma) {
                println!("{}", class);
            }
            for member in index.get_members_by_lemma(&lemma) {
                let keys: Vec<String> = member.sense_keys().iter().map(|k| k.to_string()).collect();
                println!("  {} [{}]", member, keys.join(" "));
            }
        }
        Commands::Key { key } => {
            let sense_key = SenseKey::parse(&key).ok_or(VerbcladError::MalformedIdentifier {
                kind: "sense key",
                text: key.clone(),
            })?;
            for member in index.get_members_by_word_net_key(&sense_key) {
                println!("{} in {}", member, index.forest().class_of(member));
            }
        }
        Commands::Roles { id } => {
            let class = index.get_by_id(&id)?;
            for role in index.forest().roles_include_inherited(class) {
                println!("{}: {}", role.role_type(), role.restrictions());
            }
        }
        Commands::Stats => {
            let members: usize = index.forest().iter().map(|c| c.members().len()).sum();
            println!("roots: {}", index.roots().len());
            println!("classes: {}", index.forest().len());
            println!("members: {}", members);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    // RUST_LOG wins over the settings file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    match run(cli, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "lookup failed");
            ExitCode::FAILURE
        }
    }
}
