//! Shopping list CLI commands.
//!
//! Build the list from recipe ingredients, edit quantities and remove items.

use clap::{Args, Subcommand, ValueEnum};

use kitchen_core::{shopping_candidates, Action, Change, ShoppingItem, ShoppingList};

use super::{parse_item_ref, resolve_recipe, KitchenSession};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args)]
pub struct ShoppingCommand {
    #[command(subcommand)]
    pub command: ShoppingSubcommand,
}

#[derive(Subcommand)]
pub enum ShoppingSubcommand {
    /// List shopping list items
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Add a recipe's ingredients to the shopping list
    Add {
        /// Position in the last search, or recipe id
        recipe: String,
    },

    /// Add a single item to the shopping list
    AddItem {
        /// Item name
        name: String,

        /// Quantity (optional)
        #[arg(long, short)]
        qty: Option<String>,
    },

    /// Set the quantity of an item
    SetQty {
        /// Item name or position in the list
        item: String,

        /// New quantity (free text)
        quantity: String,
    },

    /// Remove an item from the shopping list
    Remove {
        /// Item name or position in the list
        item: String,
    },

    /// Remove every item
    Clear,

    /// Print the list as plain text
    Print,
}

impl ShoppingCommand {
    pub fn run(&self, session: &mut KitchenSession) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ShoppingSubcommand::List { format } => {
                let list = session.state().shopping();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(list)?);
                    }
                    OutputFormat::Table => print_table(list),
                }
                Ok(())
            }

            ShoppingSubcommand::Add { recipe } => {
                let recipe = resolve_recipe(session.state(), recipe)?;
                let name = recipe.name.clone();
                let candidates = shopping_candidates(recipe);
                let offered = candidates.len();

                let transition = session.dispatch(Action::AddToShopping(candidates))?;
                if let Change::ItemsAdded(added) = transition.change {
                    println!(
                        "Added {} of {} ingredients from '{}' to the shopping list",
                        added, offered, name
                    );
                    if added < offered {
                        println!("{} already on the list, skipped", offered - added);
                    }
                }
                Ok(())
            }

            ShoppingSubcommand::AddItem { name, qty } => {
                if name.trim().is_empty() {
                    return Err("Item name cannot be empty".into());
                }

                let item = match qty {
                    Some(q) => ShoppingItem::with_quantity(name, q),
                    None => ShoppingItem::new(name),
                };

                let transition = session.dispatch(Action::AddToShopping(vec![item]))?;
                if transition.shopping_changed() {
                    println!("Added '{}' to the shopping list", name);
                } else {
                    println!("Warning: '{}' is already on the list, skipping", name);
                }
                Ok(())
            }

            ShoppingSubcommand::SetQty { item, quantity } => {
                let item = parse_item_ref(session.state().shopping(), item);
                let transition = session.dispatch(Action::SetQuantity {
                    item,
                    quantity: quantity.clone(),
                })?;
                if let Change::QuantitySet { name } = transition.change {
                    println!("Set quantity of '{}' to '{}'", name, quantity);
                }
                Ok(())
            }

            ShoppingSubcommand::Remove { item } => {
                let item = parse_item_ref(session.state().shopping(), item);
                let transition = session.dispatch(Action::RemoveItem(item))?;
                if let Change::ItemRemoved(removed) = transition.change {
                    println!("Removed '{}' from the shopping list", removed.name);
                }
                Ok(())
            }

            ShoppingSubcommand::Clear => {
                let transition = session.dispatch(Action::ClearShopping)?;
                match transition.change {
                    Change::ShoppingCleared { removed } if removed > 0 => {
                        println!("Cleared {} items", removed)
                    }
                    _ => println!("Shopping list is already empty"),
                }
                Ok(())
            }

            ShoppingSubcommand::Print => {
                let list = session.state().shopping();
                if !list.is_empty() {
                    println!("{}", list.printable());
                }
                Ok(())
            }
        }
    }
}

fn print_table(list: &ShoppingList) {
    println!("Shopping List");
    println!("{}", "=".repeat(44));

    if list.is_empty() {
        println!("Your shopping list is empty.");
        return;
    }

    for (i, item) in list.items().iter().enumerate() {
        let quantity = if item.quantity.is_empty() {
            "-"
        } else {
            item.quantity.as_str()
        };
        println!("{:>3}. {:<12} {}", i + 1, quantity, item.name);
    }

    println!("{}", "-".repeat(44));
    println!("{} items", list.len());
}
