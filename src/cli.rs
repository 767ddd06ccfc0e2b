use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rasa-recipes")]
#[command(about = "Browse and check the RASA recipe collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Recipes document (defaults to the configured file)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every recipe
    List,

    /// Show one recipe as its detail page
    Show {
        /// Recipe id
        #[arg(required = true)]
        id: String,

        /// Scale ingredients to this many servings (1-20)
        #[arg(short, long)]
        servings: Option<u32>,
    },

    /// Choose a recipe and serving count interactively
    Pick,

    /// Check the collection for problems
    Validate,

    /// Show or edit settings
    Config {
        /// Set the default recipes document
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set the site URL used for links
        #[arg(long)]
        set_site_url: Option<String>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_with_servings() {
        let cli = Cli::parse_from(["rasa-recipes", "show", "3", "--servings", "8"]);
        match cli.command {
            Commands::Show { id, servings } => {
                assert_eq!(id, "3");
                assert_eq!(servings, Some(8));
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_global_flags_after_command() {
        let cli = Cli::parse_from(["rasa-recipes", "list", "--data", "r.json", "-v"]);
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.data, Some(PathBuf::from("r.json")));
        assert!(cli.verbose);
    }
}
