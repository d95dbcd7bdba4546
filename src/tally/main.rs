use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rust_decimal::Decimal;
use std::io::{self, Write};
use tally::api::{CmdMessage, CmdResult, MessageLevel, TallyApi};
use tally::catalog::ProductPatch;
use tally::error::{Result, TallyError};
use tally::input;
use tally::model::{Order, OrderLine, Product};
use tally::render;
use tally::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

const CATALOG_FILENAME: &str = "catalog.json";
const BANNER: &str = "=============================================";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TallyApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            price,
            discount,
        }) => handle_add(&mut ctx, id, name, price, discount),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Modify {
            id,
            name,
            price,
            discount,
        }) => handle_modify(&mut ctx, id, name, price, discount),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Checkout { lines }) => handle_checkout(&ctx, lines),
        Some(Commands::Admin) => admin_menu(&mut ctx),
        Some(Commands::Shop) => shop_menu(&mut ctx),
        None => main_menu(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_file = match &cli.data_file {
        Some(path) => path.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "tally", "tally")
                .ok_or_else(|| TallyError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().join(CATALOG_FILENAME)
        }
    };

    let store = FileStore::new(data_file);
    Ok(AppContext {
        api: TallyApi::new(store),
    })
}

// --- One-shot subcommand handlers ---

fn handle_add(
    ctx: &mut AppContext,
    id: u32,
    name: String,
    price: Decimal,
    discount: Decimal,
) -> Result<()> {
    let product = Product::new(id, name, price, discount);
    if let Some(result) = report_recoverable(ctx.api.add_product(product))? {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print!("{}", render::products(&result.listed_products));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u32) -> Result<()> {
    if let Some(result) = report_recoverable(ctx.api.show_product(id))? {
        print!("{}", render::product(&result.listed_products[0]));
    }
    Ok(())
}

fn handle_modify(
    ctx: &mut AppContext,
    id: u32,
    name: Option<String>,
    price: Option<Decimal>,
    discount: Option<Decimal>,
) -> Result<()> {
    let patch = ProductPatch {
        name,
        price,
        discount_percent: discount,
    };
    if let Some(result) = report_recoverable(ctx.api.modify_product(id, patch))? {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u32) -> Result<()> {
    if let Some(result) = report_recoverable(ctx.api.delete_product(id))? {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_checkout(ctx: &AppContext, lines: Vec<String>) -> Result<()> {
    let mut order = Order::new();
    for spec in &lines {
        match parse_line_spec(spec) {
            Ok(line) => order.add_line(line.product_id, line.quantity),
            Err(e) => {
                println!("{}", e.to_string().red());
                return Ok(());
            }
        }
    }
    let result = ctx.api.checkout(&order)?;
    print_invoice(&result)
}

/// Parse an `id:qty` (or `idxqty`) order-line spec.
fn parse_line_spec(spec: &str) -> Result<OrderLine> {
    let (id, qty) = spec
        .split_once(':')
        .or_else(|| spec.split_once('x'))
        .ok_or_else(|| TallyError::Input(format!("Invalid order line: {} (expected id:qty)", spec)))?;
    Ok(OrderLine::new(
        input::parse_id(id)?,
        input::parse_quantity(qty)?,
    ))
}

// --- Interactive menus ---

fn main_menu(ctx: &mut AppContext) -> Result<()> {
    loop {
        print_menu("MAIN MENU", &["1. Customer", "2. Administrator", "3. Exit"]);
        let Some(choice) = prompt_field("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => shop_menu(ctx)?,
            "2" => admin_menu(ctx)?,
            "3" => {
                println!("Thanks for visiting!");
                return Ok(());
            }
            _ => println!("Invalid choice, try again."),
        }
    }
}

fn admin_menu(ctx: &mut AppContext) -> Result<()> {
    loop {
        print_menu(
            "ADMINISTRATOR MENU",
            &[
                "1. Add Product",
                "2. Display All Products",
                "3. Modify Product",
                "4. Delete Product",
                "5. Back to Main Menu",
            ],
        );
        let Some(choice) = prompt_field("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => prompt_add(ctx)?,
            "2" => handle_list(ctx)?,
            "3" => prompt_modify(ctx)?,
            "4" => prompt_delete(ctx)?,
            "5" => return Ok(()),
            _ => println!("Invalid choice, try again."),
        }
    }
}

fn shop_menu(ctx: &mut AppContext) -> Result<()> {
    loop {
        print_menu(
            "CUSTOMER MENU",
            &[
                "1. Place Order",
                "2. View Product Menu",
                "3. Back to Main Menu",
            ],
        );
        let Some(choice) = prompt_field("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => prompt_order(ctx)?,
            "2" => handle_list(ctx)?,
            "3" => return Ok(()),
            _ => println!("Invalid choice, try again."),
        }
    }
}

fn prompt_add(ctx: &mut AppContext) -> Result<()> {
    println!("{}", BANNER);
    println!("        Enter Product Details");
    println!("{}", BANNER);
    let Some(product) = prompt_product()? else {
        return Ok(());
    };
    if let Some(result) = report_recoverable(ctx.api.add_product(product))? {
        print_messages(&result.messages);
    }
    Ok(())
}

fn prompt_product() -> Result<Option<Product>> {
    let Some(id_raw) = prompt_field("Product No.: ")? else {
        return Ok(None);
    };
    let Some(name) = prompt_field("Product Name: ")? else {
        return Ok(None);
    };
    let Some(price_raw) = prompt_field("Price: ")? else {
        return Ok(None);
    };
    let Some(discount_raw) = prompt_field("Discount (%): ")? else {
        return Ok(None);
    };
    Ok(Some(Product::new(
        input::parse_id(&id_raw)?,
        name,
        input::parse_decimal(&price_raw)?,
        input::parse_decimal(&discount_raw)?,
    )))
}

fn prompt_modify(ctx: &mut AppContext) -> Result<()> {
    let Some(id_raw) = prompt_field("Enter product number to modify: ")? else {
        return Ok(());
    };
    let id = match report_recoverable(input::parse_id(&id_raw))? {
        Some(id) => id,
        None => return Ok(()),
    };

    if let Some(current) = report_recoverable(ctx.api.show_product(id))? {
        println!("\nCurrent Product Details");
        print!("{}", render::product(&current.listed_products[0]));
    } else {
        return Ok(());
    }

    println!("Enter New Details (blank keeps the current value)");
    let Some(name) = prompt_field("Product Name: ")? else {
        return Ok(());
    };
    let Some(price_raw) = prompt_field("Price: ")? else {
        return Ok(());
    };
    let Some(discount_raw) = prompt_field("Discount (%): ")? else {
        return Ok(());
    };

    let patch = ProductPatch {
        name: (!name.is_empty()).then_some(name),
        price: match price_raw.is_empty() {
            true => None,
            false => Some(input::parse_decimal(&price_raw)?),
        },
        discount_percent: match discount_raw.is_empty() {
            true => None,
            false => Some(input::parse_decimal(&discount_raw)?),
        },
    };

    if let Some(result) = report_recoverable(ctx.api.modify_product(id, patch))? {
        print_messages(&result.messages);
    }
    Ok(())
}

fn prompt_delete(ctx: &mut AppContext) -> Result<()> {
    let Some(id_raw) = prompt_field("Enter product number to delete: ")? else {
        return Ok(());
    };
    let id = input::parse_id(&id_raw)?;
    if let Some(result) = report_recoverable(ctx.api.delete_product(id))? {
        print_messages(&result.messages);
    }
    Ok(())
}

fn prompt_order(ctx: &AppContext) -> Result<()> {
    let mut order = Order::new();
    loop {
        let Some(id_raw) = prompt_field("Enter product number: ")? else {
            break;
        };
        let Some(qty_raw) = prompt_field("Enter quantity: ")? else {
            break;
        };
        match input::parse_id(&id_raw).and_then(|id| {
            input::parse_quantity(&qty_raw).map(|qty| OrderLine::new(id, qty))
        }) {
            Ok(line) => order.add_line(line.product_id, line.quantity),
            Err(e) => println!("{}", e.to_string().red()),
        }

        let Some(more) = prompt_field("Do you want to add more products? (y/n): ")? else {
            break;
        };
        if !more.eq_ignore_ascii_case("y") {
            break;
        }
    }

    if order.is_empty() {
        return Ok(());
    }
    let result = ctx.api.checkout(&order)?;
    print_invoice(&result)
}

// --- Output helpers ---

fn print_menu(title: &str, entries: &[&str]) {
    println!("\n{}", BANNER);
    println!("{:^45}", title);
    println!("{}", BANNER);
    for entry in entries {
        println!("{}", entry);
    }
}

fn print_invoice(result: &CmdResult) -> Result<()> {
    println!("\n{}", BANNER);
    println!("{:^45}", "INVOICE");
    println!("{}", BANNER);
    if let Some(invoice) = &result.invoice {
        print!("{}", render::invoice(invoice));
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Recoverable errors print a message and return to the caller's loop;
/// anything else propagates and terminates the process.
fn report_recoverable<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(
            e @ (TallyError::ProductNotFound(_)
            | TallyError::DuplicateProduct(_)
            | TallyError::Input(_)),
        ) => {
            println!("{}", e.to_string().red());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn prompt_field(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().map_err(TallyError::Io)?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line).map_err(TallyError::Io)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
