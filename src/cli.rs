//! Command-line interface for termremote.
//!
//! Builds a profile change set from a seed file and command-line
//! assignments, then prints the request payload or a preview of the
//! resulting profile.

use crate::writer::{MemoryProfileStore, ProfileWriter, SetProfilePropertyRequest};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use termremote_profile::{
    BackgroundImageMode, CharacterEncoding, Color, CursorType, IconMode, InitialWorkingDirectory,
    LocalWriteOnlyProfile, OptionKeySends, ProfileGuid, SeedOptions, ThinStrokes, TitleComponents,
    UnicodeNormalization,
};

/// termremote - stage terminal profile changes for remote application
#[derive(Parser)]
#[command(name = "termremote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (off, error, warn, info, debug, trace); overrides TERMREMOTE_LOG
    #[arg(long, value_name = "LEVEL", global = true, value_parser = parse_level_arg)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the set-profile-property request for a change set as JSON
    Encode {
        #[command(flatten)]
        changes: ChangeArgs,

        /// Profile guid(s) the request targets (default: current session)
        #[arg(long = "guid", value_name = "GUID")]
        guids: Vec<String>,
    },

    /// Apply a change set to a blank in-memory profile and print the result
    Preview {
        #[command(flatten)]
        changes: ChangeArgs,

        /// Name of the blank profile
        #[arg(long, default_value = "Preview")]
        name: String,
    },

    /// List the values accepted for enumerated profile options
    Options,
}

/// Arguments that build a change set.
///
/// Applied by group, not in command-line order: seed, `--set`, `--color`,
/// `--clear-color`, then the title flags. A later group overwrites an
/// earlier one for the same key.
#[derive(Args, Debug, Default)]
pub struct ChangeArgs {
    /// YAML or JSON seed file of field name -> value
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Resolve every ${VAR} in the seed, not only allowlisted ones
    #[arg(long)]
    pub allow_all_env_vars: bool,

    /// Set a field: KEY=VALUE, where VALUE is JSON (bare text is taken as a string)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Set a color field: KEY=#rrggbb[aa] (applied after every --set)
    #[arg(long = "color", value_name = "KEY=HEX")]
    pub colors: Vec<String>,

    /// Clear a color field (applied after every --color, so it wins for the same key)
    #[arg(long = "clear-color", value_name = "KEY")]
    pub clear_colors: Vec<String>,

    /// Title components, comma separated (session-name, job, working-directory, ...)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub title_components: Vec<String>,

    /// Custom title function: display name and identifier
    #[arg(long, num_args = 2, value_names = ["NAME", "ID"])]
    pub title_function: Option<Vec<String>>,
}

fn parse_level_arg(s: &str) -> std::result::Result<LevelFilter, String> {
    crate::debug::parse_level(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

/// Build the change set described by `args`.
///
/// The seed is applied first; explicit flags then overwrite seeded keys,
/// group by group in the order documented on [`ChangeArgs`].
pub fn build_change_set(args: &ChangeArgs) -> Result<LocalWriteOnlyProfile> {
    let options = SeedOptions {
        allow_all_env_vars: args.allow_all_env_vars,
    };
    let mut profile = match &args.seed {
        Some(path) => LocalWriteOnlyProfile::load_seed(path, options)
            .with_context(|| format!("loading seed {}", path.display()))?,
        None => LocalWriteOnlyProfile::new(),
    };

    for assignment in &args.set {
        let (key, raw) = split_assignment(assignment)?;
        let value = serde_json::from_str::<serde_json::Value>(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
        profile.set_property(Some(key), &value)?;
    }

    for assignment in &args.colors {
        let (key, hex) = split_assignment(assignment)?;
        let color = Color::from_hex(hex).with_context(|| format!("color for '{key}'"))?;
        profile.set_color_property(key, Some(&color))?;
    }

    for key in &args.clear_colors {
        profile.set_color_property::<Color>(key, None)?;
    }

    if !args.title_components.is_empty() {
        let components = args
            .title_components
            .iter()
            .map(|name| {
                TitleComponents::from_kebab_name(name)
                    .with_context(|| format!("unknown title component '{name}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        profile.set_title_components(components)?;
    }

    if let Some(function) = &args.title_function
        && let [display_name, identifier] = function.as_slice()
    {
        profile.set_title_function(display_name, identifier)?;
    }

    Ok(profile)
}

fn split_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => bail!("expected KEY=VALUE, got '{assignment}'"),
    }
}

/// Run a parsed command, writing its output to stdout
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Encode { changes, guids } => {
            let profile = build_change_set(&changes)?;
            let guids = guids
                .iter()
                .map(|g| ProfileGuid::parse(g))
                .collect::<termremote_profile::Result<Vec<_>>>()?;
            let request = SetProfilePropertyRequest::new(guids, &profile);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Preview { changes, name } => {
            let profile = build_change_set(&changes)?;
            let mut store = MemoryProfileStore::new();
            let guid = store.create(&name)?;
            store.apply(&guid, &profile)?;
            let Some(result) = store.get(&guid) else {
                bail!("preview profile {guid} disappeared");
            };
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        Commands::Options => print_options(),
    }
    Ok(())
}

fn print_options() {
    fn table<T>(
        title: &str,
        items: &[T],
        value: impl Fn(&T) -> String,
        name: impl Fn(&T) -> &str,
    ) {
        println!("{title}:");
        for item in items {
            println!("  {:>12}  {}", value(item), name(item));
        }
        println!();
    }

    macro_rules! enum_table {
        ($title:expr, $ty:ty) => {
            table(
                $title,
                <$ty>::all(),
                |v| v.value().to_string(),
                |v| v.display_name(),
            )
        };
    }

    enum_table!("Cursor Type", CursorType);
    enum_table!("Thin Strokes", ThinStrokes);
    enum_table!("Background Image Mode", BackgroundImageMode);
    enum_table!("Unicode Normalization", UnicodeNormalization);
    enum_table!("Character Encoding", CharacterEncoding);
    enum_table!("Option Key Sends", OptionKeySends);
    enum_table!("Initial Working Directory", InitialWorkingDirectory);
    enum_table!("Icon", IconMode);

    println!("Title Components:");
    for (name, flag) in TitleComponents::all().iter_names() {
        let name = name.to_ascii_lowercase().replace('_', "-");
        println!("  {:>12}  {name}", flag.bits());
    }
}
