use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Inventory and point-of-sale tool for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (defaults to a file in the user data dir)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the catalog
    #[command(alias = "a")]
    Add {
        /// Product id (must be unique)
        id: u32,

        /// Product name
        name: String,

        /// Unit price before discount
        price: Decimal,

        /// Discount percentage applied at order time
        #[arg(long, default_value_t = Decimal::ZERO)]
        discount: Decimal,
    },

    /// List the catalog
    #[command(alias = "ls")]
    List,

    /// Show one product by id
    Show {
        /// Product id
        id: u32,
    },

    /// Modify a product's fields
    #[command(alias = "mod")]
    Modify {
        /// Product id
        id: u32,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New unit price
        #[arg(long)]
        price: Option<Decimal>,

        /// New discount percentage
        #[arg(long)]
        discount: Option<Decimal>,
    },

    /// Delete a product by id
    #[command(alias = "rm")]
    Delete {
        /// Product id
        id: u32,
    },

    /// Price an order and print the invoice
    Checkout {
        /// Order lines as id:qty pairs (e.g. 1:2 4:1)
        #[arg(required = true, num_args = 1..)]
        lines: Vec<String>,
    },

    /// Run the interactive administrator menu
    Admin,

    /// Run the interactive customer menu
    Shop,
}
