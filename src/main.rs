use clap::Parser;
use rasa_recipes::{catalog, cli, config, error, source};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use rasa_recipes_common::RecipeStore;
use source::FileSource;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let store = RecipeStore::new(FileSource::new(config.data_path(cli.data.clone())));

    match cli.command {
        Commands::List => {
            let recipes = store.load_all().await?;
            for line in catalog::list_lines(recipes, &config) {
                println!("{}", line);
            }
            println!("\n{} recipes", recipes.len());
        }

        Commands::Show { id, servings } => {
            for line in catalog::show(&store, &id, servings).await? {
                println!("{}", line);
            }
        }

        Commands::Pick => {
            let recipes = store.load_all().await?;
            let (id, servings) = catalog::pick(recipes)?;
            println!();
            for line in catalog::show(&store, &id.to_string(), Some(servings)).await? {
                println!("{}", line);
            }
        }

        Commands::Validate => {
            println!("Checking {}", store.source().path().display());
            let recipes = store.load_all().await?;
            if let Err(error) = catalog::check(recipes) {
                if let error::RecipesError::Invalid(problems) = &error {
                    for problem in problems {
                        println!("✗ {}", problem);
                    }
                }
                return Err(error);
            }
            println!("✔ {} recipes, no problems", recipes.len());
        }

        Commands::Config { set_data_file, set_site_url, show } => {
            let mut config = config;
            let changed = set_data_file.is_some() || set_site_url.is_some();

            if let Some(path) = set_data_file {
                config.data_file = Some(path);
            }
            if let Some(url) = set_site_url {
                config.site_url = Some(url);
            }
            if changed {
                config.save()?;
                println!("✔ Settings saved to {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Settings:");
                println!(
                    "  Data file: {}",
                    config.data_path(cli.data).display()
                );
                println!(
                    "  Site URL: {}",
                    config.site_url.as_deref().unwrap_or("(relative links)")
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    if std::env::var_os("RUST_LOG").is_none() {
        let level = if verbose { "debug" } else { "warn" };
        std::env::set_var("RUST_LOG", level);
    }
    pretty_env_logger::init();
}
