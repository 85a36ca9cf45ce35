//! # Command Line and Shell
//!
//! One clap command set serves both entry points:
//!
//! ```text
//! storefront [--config PATH] [--data-dir PATH] add 3     one-shot
//! storefront [--config PATH] [--data-dir PATH]           interactive shell
//!
//! > add 3
//! { "items": [ ... ], "total": 1, ... }
//! > checkout --selected --confirm
//! { "error": { "code": "CHECKOUT_ERROR", "message": "..." } }
//! > quit
//! ```
//!
//! Shell lines are split on whitespace; single or double quotes keep a
//! phrase together (`dashboard add --title "Big Mug" ...`).

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use storefront_core::checkout::CheckoutScope;
use storefront_core::ProductId;
use tracing::debug;

use crate::commands::dashboard::ProductForm;
use crate::commands::{auth, cart, catalog, checkout, dashboard, preferences};
use crate::error::{ApiError, ApiResult};
use crate::Session;

/// Storefront: browse the catalog, fill a cart, check out.
#[derive(Debug, Parser)]
#[command(name = "storefront", version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding storage.json
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Run one command and exit; without one, start the shell
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the cart
    Cart,
    /// Add a product to the cart
    Add { id: ProductId },
    /// Increase a line's quantity by one
    Inc { id: ProductId },
    /// Decrease a line's quantity by one (removes it at 1)
    Dec { id: ProductId },
    /// Set a line's quantity
    Set {
        id: ProductId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Select or unselect a line
    Toggle { id: ProductId },
    SelectAll,
    DeselectAll,
    /// Remove a line from the cart
    Delete { id: ProductId },
    /// Remove every selected line
    DeleteSelected,
    /// Empty the cart
    Clear,
    /// List products
    Products {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Show one product
    Product { id: ProductId },
    /// List the category names accepted by --category
    Categories,
    Register {
        email: String,
        password: String,
        confirm: String,
    },
    Login { email: String, password: String },
    Logout,
    Whoami,
    /// Preview (or with --confirm, place) an order
    Checkout {
        /// Only the selected lines
        #[arg(long)]
        selected: bool,
        #[arg(long)]
        confirm: bool,
    },
    /// Show or change the theme
    Theme {
        #[arg(long, conflicts_with = "set")]
        toggle: bool,
        #[arg(long, value_name = "NAME")]
        set: Option<String>,
    },
    /// Manage your own products (sign-in required)
    #[command(subcommand)]
    Dashboard(DashboardCommand),
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum DashboardCommand {
    List,
    Add(ProductArgs),
    Edit {
        id: ProductId,
        #[command(flatten)]
        product: ProductArgs,
    },
    Remove { id: ProductId },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ProductArgs {
    #[arg(long, default_value = "")]
    pub title: String,
    /// Decimal price, e.g. 7.50
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub image: String,
}

impl From<ProductArgs> for ProductForm {
    fn from(args: ProductArgs) -> Self {
        ProductForm {
            title: args.title,
            price: args.price,
            category: args.category,
            description: args.description,
            image: args.image,
        }
    }
}

/// A shell line, parsed with the same command set as the binary.
#[derive(Debug, Parser)]
#[command(name = "storefront", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

// =============================================================================
// Execution
// =============================================================================

/// Runs one command against the session and returns its JSON response.
pub async fn execute(session: &Session, command: Command) -> ApiResult<Value> {
    match command {
        Command::Cart => respond(cart::get_cart(&session.cart)),
        Command::Add { id } => respond(cart::add_to_cart(&session.lookup, &session.cart, id).await?),
        Command::Inc { id } => respond(cart::increase_quantity(&session.cart, id)),
        Command::Dec { id } => respond(cart::decrease_quantity(&session.cart, id)),
        Command::Set { id, quantity } => respond(cart::set_quantity(&session.cart, id, quantity)),
        Command::Toggle { id } => respond(cart::toggle_selection(&session.cart, id)),
        Command::SelectAll => respond(cart::select_all(&session.cart)),
        Command::DeselectAll => respond(cart::deselect_all(&session.cart)),
        Command::Delete { id } => respond(cart::remove_from_cart(&session.cart, id)),
        Command::DeleteSelected => respond(cart::delete_selected(&session.cart)),
        Command::Clear => respond(cart::clear_cart(&session.cart)),

        Command::Products { search, category } => {
            respond(catalog::list_products(&session.lookup, &search, &category).await?)
        }
        Command::Product { id } => respond(catalog::get_product(&session.lookup, id).await?),
        Command::Categories => respond(catalog::list_categories()),

        Command::Register {
            email,
            password,
            confirm,
        } => respond(auth::register(&session.auth, &email, &password, &confirm)?),
        Command::Login { email, password } => {
            respond(auth::login(&session.auth, &email, &password)?)
        }
        Command::Logout => respond(auth::logout(&session.auth)?),
        Command::Whoami => respond(auth::whoami(&session.auth)),

        Command::Checkout { selected, confirm } => {
            let scope = if selected {
                CheckoutScope::Selected
            } else {
                CheckoutScope::All
            };
            if confirm {
                respond(checkout::confirm_checkout(&session.auth, &session.cart, scope)?)
            } else {
                respond(checkout::preview_checkout(&session.auth, &session.cart, scope)?)
            }
        }

        Command::Theme { toggle, set } => {
            let prefs = session.storage.preferences();
            match (toggle, set) {
                (true, _) => respond(preferences::toggle_theme(&prefs)?),
                (false, Some(name)) => respond(preferences::set_theme(&prefs, &name)?),
                (false, None) => respond(preferences::get_theme(&prefs)?),
            }
        }

        Command::Dashboard(command) => {
            let products = session.storage.products();
            match command {
                DashboardCommand::List => {
                    respond(dashboard::list_local_products(&session.auth, &products)?)
                }
                DashboardCommand::Add(args) => respond(dashboard::create_product(
                    &session.auth,
                    &products,
                    &args.into(),
                )?),
                DashboardCommand::Edit { id, product } => respond(dashboard::update_product(
                    &session.auth,
                    &products,
                    id,
                    &product.into(),
                )?),
                DashboardCommand::Remove { id } => {
                    respond(dashboard::delete_product(&session.auth, &products, id)?)
                }
            }
        }
    }
}

fn respond<T: Serialize>(value: T) -> ApiResult<Value> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a ApiError,
}

/// Pretty JSON for a command outcome; errors are wrapped as `{ "error": ... }`.
pub fn render(result: &ApiResult<Value>) -> String {
    let text = match result {
        Ok(value) => serde_json::to_string_pretty(value),
        Err(error) => serde_json::to_string_pretty(&ErrorBody { error }),
    };
    text.unwrap_or_else(|e| e.to_string())
}

// =============================================================================
// Shell
// =============================================================================

/// Parses one shell line.
///
/// Returns `Ok(None)` for a blank line and `Err(text)` with clap's help or
/// usage message when the line is not a command.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let words = split_words(line)?;
    if words.is_empty() {
        return Ok(None);
    }

    ShellLine::try_parse_from(words)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| e.render().to_string())
}

fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("error: unterminated quote\n".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Reads commands line by line until `quit`, `exit` or end of input.
pub async fn run_shell<R: BufRead, W: Write>(
    session: &Session,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    writeln!(
        output,
        "storefront shell: `help` lists commands, `quit` leaves"
    )?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        match parse_line(trimmed) {
            Ok(None) => {}
            Ok(Some(command)) => {
                let result = execute(session, command).await;
                writeln!(output, "{}", render(&result))?;
            }
            Err(message) => write!(output, "{}", message)?,
        }
    }

    debug!("Shell closed");
    Ok(())
}
