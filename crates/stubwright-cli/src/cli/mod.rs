//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubwright",
    bin_name = "stubwright",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Repository, transformer and filter generator for Laravel-style projects",
    long_about = "Stubwright fills stub templates to create repository classes, \
                  repository interfaces, data transformers and list filters in \
                  the conventional folder and namespace layout.",
    after_help = "EXAMPLES:\n\
        \x20 stubwright make:repository Item\n\
        \x20 stubwright make:repository Common/Book --model=BookModel\n\
        \x20 stubwright make:transformer Common/Book\n\
        \x20 stubwright make:filter Admin/Book\n\
        \x20 stubwright completions bash > /usr/share/bash-completion/completions/stubwright",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a repository and its interface.
    #[command(
        name = "make:repository",
        about = "Generate a repository and its interface",
        after_help = "EXAMPLES:\n\
            \x20 stubwright make:repository Item\n\
            \x20 stubwright make:repository Common/Book --model=BookModel"
    )]
    MakeRepository(MakeArgs),

    /// Generate a data transformer.
    #[command(
        name = "make:transformer",
        about = "Generate a transformer class",
        after_help = "EXAMPLES:\n\
            \x20 stubwright make:transformer Book\n\
            \x20 stubwright make:transformer Common/Book --model=BookModel"
    )]
    MakeTransformer(MakeArgs),

    /// Generate a list filter.
    #[command(
        name = "make:filter",
        about = "Generate a list filter class",
        after_help = "EXAMPLES:\n\
            \x20 stubwright make:filter Book\n\
            \x20 stubwright make:filter Admin/Book"
    )]
    MakeFilter(MakeFilterArgs),

    /// Publish the configuration file and, optionally, the stubs.
    #[command(
        about = "Publish configuration and stubs",
        after_help = "EXAMPLES:\n\
            \x20 stubwright init           # write ./stubwright.toml\n\
            \x20 stubwright init --stubs   # also copy stubs to ./stubs/stubwright\n\
            \x20 stubwright init --force   # overwrite existing files"
    )]
    Init(InitArgs),

    /// Inspect the interface bindings built at startup.
    #[command(
        about = "Show interface bindings",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubwright bindings list\n\
            \x20 stubwright bindings resolve 'App\\Repositories\\ItemRepositoryInterface'"
    )]
    Bindings(BindingsCommands),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubwright config show\n\
            \x20 stubwright config get repository_path\n\
            \x20 stubwright config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubwright completions bash > ~/.local/share/bash-completion/completions/stubwright\n\
            \x20 stubwright completions zsh  > ~/.zfunc/_stubwright\n\
            \x20 stubwright completions fish > ~/.config/fish/completions/stubwright.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make:* ────────────────────────────────────────────────────────────────────

/// Arguments for `make:repository` and `make:transformer`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Class name with optional sub-folders, e.g. `Common/Item`.
    #[arg(value_name = "NAME", help = "Name with optional subdirectory (e.g. Common/Item)")]
    pub name: String,

    /// Model class name; defaults to the base name.
    #[arg(long = "model", value_name = "MODEL", help = "Model name to use")]
    pub model: Option<String>,

    /// Print what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be created")]
    pub dry_run: bool,
}

/// Arguments for `make:filter`.
#[derive(Debug, Args)]
pub struct MakeFilterArgs {
    /// Class name with optional sub-folders, e.g. `Admin/Book`.
    #[arg(value_name = "NAME", help = "Name with optional subdirectory (e.g. Admin/Book)")]
    pub name: String,

    /// Print what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be created")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubwright init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite files that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Also publish the built-in stubs for editing.
    #[arg(long = "stubs", help = "Copy the built-in stubs into stubs/stubwright")]
    pub stubs: bool,
}

// ── bindings ──────────────────────────────────────────────────────────────────

/// `stubwright bindings` subcommands.
#[derive(Debug, Subcommand)]
pub enum BindingsCommands {
    /// List every configured binding.
    #[command(visible_alias = "ls")]
    List,

    /// Show the implementation bound to a contract.
    Resolve {
        /// Fully-qualified interface name.
        #[arg(value_name = "CONTRACT")]
        contract: String,
    },
}

// ── config ────────────────────────────────────────────────────────────────────

/// `stubwright config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    #[command(visible_alias = "list")]
    Show,

    /// Print one configuration value.
    Get {
        /// Key, e.g. `repository_path` or `bindings.repositories`.
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file in use.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubwright completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
