//! Storefront CLI - browse a product catalog from the terminal

mod catalog;
mod prefs;
mod render;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use storefront_core::address::with_query_param;
use storefront_core::{
    ListingAction, ListingConfig, ListingController, ManualScheduler, MemoryAddress, NoopViewport, Product,
    SortMode, ViewMode, CATEGORY_ALL, categories,
};

use crate::catalog::{Source, load_products};
use crate::prefs::{JsonFilePrefs, default_prefs_path};

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(author, version, about = "Storefront product catalog browser", long_about = None)]
struct Cli {
    /// Listing configuration file (TOML)
    #[arg(long, global = true, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Catalog API URL returning the product collection
    #[arg(long, env = "STOREFRONT_SOURCE")]
    source: Option<String>,

    /// Read the product collection from a JSON file instead
    #[arg(long, conflicts_with = "source")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the product listing
    Browse {
        #[command(flatten)]
        source: SourceArgs,

        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Only show this category ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: default, asc or desc
        #[arg(long, default_value = "default")]
        sort: SortMode,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Display density: grid or list. Remembered for the next run.
        #[arg(long)]
        view: Option<ViewMode>,

        /// Products per page (overrides the config file)
        #[arg(long)]
        page_size: Option<usize>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,

        /// Preferences file (defaults to the user config directory)
        #[arg(long, env = "STOREFRONT_PREFS")]
        prefs: Option<PathBuf>,
    },

    /// List the categories present in the collection
    Categories {
        #[command(flatten)]
        source: SourceArgs,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive("storefront=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Browse {
            source,
            search,
            category,
            sort,
            page,
            view,
            page_size,
            json,
            prefs,
        } => {
            let options = BrowseOptions {
                search,
                category,
                sort,
                page,
                view,
                page_size,
                json,
                prefs: prefs.unwrap_or_else(default_prefs_path),
            };
            cmd_browse(&Source::from_args(source.source, source.file), config, options).await?;
        }
        Commands::Categories { source, json } => {
            cmd_categories(&Source::from_args(source.source, source.file), json).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ListingConfig> {
    let Some(path) = path else {
        return Ok(ListingConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
    let config =
        ListingConfig::from_toml_str(&text).with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!(?config, "loaded config");
    Ok(config)
}

struct BrowseOptions {
    search: Option<String>,
    category: Option<String>,
    sort: SortMode,
    page: i64,
    view: Option<ViewMode>,
    page_size: Option<usize>,
    json: bool,
    prefs: PathBuf,
}

async fn cmd_browse(source: &Source, mut config: ListingConfig, options: BrowseOptions) -> Result<()> {
    if let Some(size) = options.page_size {
        config.page_size = size;
    }
    config.validate().context("Invalid listing options")?;

    let products = load_products(source).await?;
    let output = browse(products, config, JsonFilePrefs::new(&options.prefs), &options)?;
    println!("{}", output);
    Ok(())
}

/// Run the listing engine headlessly and render the requested page
fn browse(
    products: Vec<Product>,
    config: ListingConfig,
    prefs: JsonFilePrefs,
    options: &BrowseOptions,
) -> Result<String> {
    // The search term enters the listing the same way a shared link does
    let query = with_query_param("", &config.search_param, options.search.as_deref());
    let address = Rc::new(MemoryAddress::new(&query));
    let mut listing = ListingController::new(products, config, address, prefs, ManualScheduler::new(), NoopViewport);

    if let Some(category) = &options.category {
        if !listing.categories().iter().any(|c| c == category) {
            bail!(
                "Unknown category '{}'. Available: {}",
                category,
                listing.categories().join(", ")
            );
        }
        listing.apply(ListingAction::SetCategory(category.clone()));
    }
    listing.apply(ListingAction::SetSort(options.sort));
    if let Some(mode) = options.view {
        listing.apply(ListingAction::SetViewMode(mode));
    }
    if !listing.set_page(options.page) {
        tracing::warn!(
            page = options.page,
            page_count = listing.page_count(),
            "page out of range, showing page {}",
            listing.state().page
        );
    }

    let view = listing.view();
    listing.unmount();

    if options.json {
        serde_json::to_string_pretty(&view).context("Failed to serialize listing")
    } else {
        Ok(render::render_listing(&view))
    }
}

async fn cmd_categories(source: &Source, json: bool) -> Result<()> {
    let products = load_products(source).await?;
    let names = categories(&products);

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        println!("Categories");
        println!("==========");
        for name in &names {
            let count = if name == CATEGORY_ALL {
                products.len()
            } else {
                products.iter().filter(|p| &p.category == name).count()
            };
            println!("  {:30} {:>4} products", name, count);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::testing::{catalog, product};

    fn options() -> BrowseOptions {
        BrowseOptions {
            search: None,
            category: None,
            sort: SortMode::Default,
            page: 1,
            view: None,
            page_size: None,
            json: false,
            prefs: PathBuf::new(),
        }
    }

    fn temp_prefs(name: &str) -> JsonFilePrefs {
        let dir = std::env::temp_dir().join(format!("storefront-cli-{}-{}", std::process::id(), name));
        fs::remove_dir_all(&dir).ok();
        JsonFilePrefs::new(dir.join("prefs.json"))
    }

    #[test]
    fn test_browse_search_category_sort() {
        let products = vec![
            product(1, "Smartphone Case", 10.0, "Electronics"),
            product(2, "Phone Charger", 30.0, "Electronics"),
            product(3, "Phone Pouch", 20.0, "Accessories"),
            product(4, "Laptop", 900.0, "Electronics"),
        ];
        let opts = BrowseOptions {
            search: Some("PHONE".to_string()),
            category: Some("Electronics".to_string()),
            sort: SortMode::PriceDesc,
            view: Some(ViewMode::List),
            ..options()
        };

        let text = browse(products, ListingConfig::default(), temp_prefs("search"), &opts).unwrap();
        assert!(text.starts_with("Showing 1–2 of 2 products"));
        let charger = text.find("Phone Charger").unwrap();
        let case = text.find("Smartphone Case").unwrap();
        assert!(charger < case);
        assert!(!text.contains("Laptop"));
        assert!(!text.contains("Phone Pouch"));
    }

    #[test]
    fn test_browse_unknown_category_fails() {
        let opts = BrowseOptions {
            category: Some("Toys".to_string()),
            ..options()
        };
        let err = browse(catalog(3, &["Books"]), ListingConfig::default(), temp_prefs("unknown"), &opts).unwrap_err();
        assert!(err.to_string().contains("Unknown category 'Toys'"));
    }

    #[test]
    fn test_browse_out_of_range_page_shows_first() {
        let opts = BrowseOptions { page: 7, json: true, ..options() };
        let json = browse(catalog(20, &["Books"]), ListingConfig::default(), temp_prefs("range"), &opts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["current_page"], 1);
        assert_eq!(value["page_count"], 3);
        assert_eq!(value["visible_items"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_browse_remembers_view_mode() {
        let prefs = temp_prefs("view");
        let list = BrowseOptions { view: Some(ViewMode::List), ..options() };
        browse(catalog(2, &["Books"]), ListingConfig::default(), prefs.clone(), &list).unwrap();

        // No --view on the second run: the stored list mode renders a table
        let text = browse(catalog(2, &["Books"]), ListingConfig::default(), prefs.clone(), &options()).unwrap();
        assert!(text.contains("Title"));
        assert!(text.contains("Category"));
        fs::remove_dir_all(prefs.path().parent().unwrap()).ok();
    }

    #[test]
    fn test_load_config_defaults_without_file() {
        assert_eq!(load_config(None).unwrap(), ListingConfig::default());
    }
}
