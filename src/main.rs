use clap::{Parser, Subcommand};
use essenza_core::{ConstraintSet, Field, Item, Strategy};
use essenza_shops::{ShopFinder, DEFAULT_LOCATION};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find your signature scent from the command line
#[derive(Parser, Debug)]
#[command(name = "essenza")]
#[command(about = "An in-memory fragrance recommender", long_about = None)]
struct Args {
    /// Path to the semicolon-separated catalog CSV
    #[arg(short, long, default_value = "perfumes.csv")]
    data: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the catalog by exact attribute values
    Filter {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        /// Scent direction (e.g. Floral, Woody)
        #[arg(long)]
        scent: Option<String>,
        #[arg(long)]
        season: Option<String>,
        #[arg(long)]
        personality: Option<String>,
        #[arg(long)]
        occasion: Option<String>,
        /// Price band (e.g. Low, High)
        #[arg(long)]
        price: Option<String>,
    },
    /// Recommend fragrances similar to the named one
    Similar {
        name: String,
        /// Use tag-overlap scoring instead of the similarity index
        #[arg(long)]
        tag_overlap: bool,
    },
    /// List the observed values of one attribute
    Vocab {
        /// Field name (brand, gender, scent_direction, season,
        /// personality, occasion, price)
        field: String,
    },
    /// Look up shops carrying the named fragrance
    Shops {
        name: String,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        /// Places API key
        #[arg(long, env = "PLACES_API_KEY")]
        api_key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting essenza v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.data);

    let engine = essenza_data::load_engine(&args.data)?;
    info!("Loaded {} fragrances", engine.len());

    match args.command {
        Command::Filter {
            brand,
            gender,
            scent,
            season,
            personality,
            occasion,
            price,
        } => {
            let mut constraints = ConstraintSet::new();
            constraints.set(Field::Brand, brand);
            constraints.set(Field::Gender, gender);
            constraints.set(Field::ScentDirection, scent);
            constraints.set(Field::Season, season);
            constraints.set(Field::Personality, personality);
            constraints.set(Field::Occasion, occasion);
            constraints.set(Field::Price, price);

            let matches = engine.filter(&constraints);
            println!("{} matches found:", matches.len());
            for item in &matches {
                print_item(item);
            }
        }
        Command::Similar { name, tag_overlap } => {
            let strategy = if tag_overlap {
                Strategy::TagOverlap
            } else {
                Strategy::Similarity
            };
            let similar = engine.recommend_with(&name, strategy)?;
            if similar.is_empty() {
                println!("No similar fragrances found for {name}.");
            } else {
                println!("Fragrances similar to {name}:");
                for item in &similar {
                    print_item(item);
                }
            }
        }
        Command::Vocab { field } => {
            let field: Field = field
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            for value in engine.vocabulary(field) {
                println!("{value}");
            }
        }
        Command::Shops {
            name,
            location,
            api_key,
        } => {
            let finder = ShopFinder::new(api_key);
            let shops = finder.find_shops(&name, &location).await;
            if shops.is_empty() {
                println!("No shops found nearby. Try a different location.");
            } else {
                println!("Shops found nearby:");
                for shop in &shops {
                    println!("- {} - {}", shop.name, shop.address);
                }
            }
        }
    }

    Ok(())
}

fn print_item(item: &Item) {
    println!("{} by {}", item.name, item.brand);
    println!(
        "  Gender: {} | Scent: {} | Season: {}",
        item.gender, item.scent_direction, item.season
    );
    println!(
        "  Occasion: {} | Personality: {} | Price: {}",
        item.occasion, item.personality, item.price
    );
}
