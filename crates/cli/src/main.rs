//! TezTayor CLI - Drive the ordering widget from a terminal.
//!
//! The cart lives in a JSON key-value file (see `TEZTAYOR_STORAGE_PATH`), so
//! it survives between invocations the way a browser's local storage does.
//!
//! # Usage
//!
//! ```bash
//! # List the menu
//! tt-cli menu --menu menu.json
//!
//! # Add a dish from the menu, or by hand
//! tt-cli add --id 1 --menu menu.json
//! tt-cli add --id 7 --name Tea --price 10 --image tea.png
//!
//! # Adjust, inspect and clear
//! tt-cli qty --id 1 --delta -1
//! tt-cli show
//! tt-cli clear --yes
//!
//! # Place an order locally, or hand it to the messenger
//! tt-cli order --name Ann --phone 555123456 --mode pickup
//! tt-cli send --name Ann --phone 555123456 --mode delivery --address "Rudaki 10"
//! ```
//!
//! # Commands
//!
//! - `menu` - Print the menu
//! - `show` - Print the cart
//! - `add` / `qty` / `remove` / `clear` - Change the cart
//! - `order` - Validate, confirm and place the order (clears the cart)
//! - `send` - Validate and print the messaging hand-off link (keeps the cart)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use teztayor_core::{DeliveryMode, Price, ProductId};
use teztayor_storefront::{FileStore, OrderController, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod host;

use commands::cart::AddSource;
use commands::order::FormArgs;
use host::{PrintLauncher, TerminalNotifier};

#[derive(Parser)]
#[command(name = "tt-cli")]
#[command(author, version, about = "TezTayor ordering widget")]
struct Cli {
    /// Storage file (overrides `TEZTAYOR_STORAGE_PATH`)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the menu
    Menu {
        /// Menu JSON file
        #[arg(short, long)]
        menu: PathBuf,
    },
    /// Print the cart
    Show,
    /// Add one unit of a dish
    Add {
        /// Product id
        #[arg(long)]
        id: ProductId,

        /// Look the dish up in this menu file
        #[arg(short, long, conflicts_with_all = ["name", "price", "image"])]
        menu: Option<PathBuf>,

        /// Dish name (without --menu)
        #[arg(long)]
        name: Option<String>,

        /// Unit price (without --menu)
        #[arg(long)]
        price: Option<Price>,

        /// Image reference (without --menu)
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Change a line's quantity
    Qty {
        /// Product id
        #[arg(long)]
        id: ProductId,

        /// Amount to add; negative to remove
        #[arg(long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line
    Remove {
        /// Product id
        #[arg(long)]
        id: ProductId,
    },
    /// Empty the cart
    Clear,
    /// Place the order after confirmation
    Order(OrderArgs),
    /// Print the messaging hand-off link for the order
    Send(OrderArgs),
}

#[derive(clap::Args)]
struct OrderArgs {
    /// Customer name (letters only)
    #[arg(long)]
    name: String,

    /// Nine-digit local phone number
    #[arg(long)]
    phone: String,

    /// `pickup` or `delivery`
    #[arg(long, default_value = "pickup")]
    mode: DeliveryMode,

    /// Delivery address
    #[arg(long, default_value = "")]
    address: String,
}

impl From<OrderArgs> for FormArgs {
    fn from(args: OrderArgs) -> Self {
        Self {
            name: args.name,
            phone: args.phone,
            mode: args.mode,
            address: args.address,
        }
    }
}

fn main() {
    // Logs go to stderr; stdout carries the command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "teztayor_storefront=info,teztayor_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(path) = cli.storage {
        config.storage_path = path;
    }

    let mut out = io::stdout();

    if let Commands::Menu { menu } = &cli.command {
        commands::menu::list(menu, config.currency(), &mut out)?;
        return Ok(());
    }

    tracing::debug!(path = %config.storage_path.display(), "Using storage file");
    let store = FileStore::new(config.storage_path.clone());
    let notifier = TerminalNotifier::new(io::stdin().lock(), io::stdout(), cli.yes);
    let launcher = PrintLauncher::new(io::stdout());
    let mut controller = OrderController::new(config, store, notifier, launcher);

    match cli.command {
        Commands::Menu { .. } => {}
        Commands::Show => commands::cart::show(&controller, &mut out)?,
        Commands::Add {
            id,
            menu,
            name,
            price,
            image,
        } => {
            let source = match menu {
                Some(path) => AddSource::Menu(path),
                None => AddSource::Manual { name, price, image },
            };
            commands::cart::add(&mut controller, id, source, &mut out)?;
        }
        Commands::Qty { id, delta } => {
            commands::cart::change_quantity(&mut controller, id, delta, &mut out)?;
        }
        Commands::Remove { id } => commands::cart::remove(&mut controller, id, &mut out)?,
        Commands::Clear => commands::cart::clear(&mut controller, &mut out)?,
        Commands::Order(args) => commands::order::submit(&mut controller, &args.into(), &mut out)?,
        Commands::Send(args) => commands::order::send(&mut controller, &args.into(), &mut out)?,
    }
    Ok(())
}
