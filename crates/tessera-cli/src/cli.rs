use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tessera",
    about = "Tessera: render loosely-typed content through a pluggable renderer pipeline",
    version
)]
pub struct Cli {
    /// Log filter directive (e.g. `debug`, `tessera_kernel=trace`); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one piece of content and print the resulting node
    Render {
        /// Content as JSON; anything that is not valid JSON is taken as a plain string
        content: String,

        /// Entity identity
        #[arg(long)]
        id: Option<String>,

        /// Style tag (repeatable; joined with spaces)
        #[arg(long = "class")]
        classes: Vec<String>,

        /// Return policy: first or last (overrides the config file)
        #[arg(long)]
        policy: Option<String>,

        /// Path to a TOML pipeline settings file
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the pipeline's renderers in scan order
    Renderers {
        /// Path to a TOML pipeline settings file
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
