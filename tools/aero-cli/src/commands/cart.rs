//! Cart commands.

use aero_cache::FileStore;
use aero_commerce::cart::{CartStore, DeliveryMode};
use aero_commerce::ids::ProductId;
use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store();

    match args.command {
        CartCommand::Show { mode } => show(&store, mode, ctx),
        CartCommand::Add { product_id } => add(&mut store, &ProductId::new(product_id), ctx),
        CartCommand::Qty { product_id, delta } => {
            let id = ProductId::new(product_id);
            if !in_cart(&store, &id, ctx) {
                return Ok(());
            }
            store.update_quantity(&id, delta);
            match store.get(&id) {
                Some(line) => ctx
                    .output
                    .success(&format!("{} now x{}", line.name, line.quantity)),
                None => ctx.output.success(&format!("Removed {} from the cart", id)),
            }
            show(&store, DeliveryMode::default(), ctx)
        }
        CartCommand::Notes { product_id, text } => {
            let id = ProductId::new(product_id);
            if !in_cart(&store, &id, ctx) {
                return Ok(());
            }
            store.update_notes(&id, text);
            ctx.output.success(&format!("Updated notes for {}", id));
            show(&store, DeliveryMode::default(), ctx)
        }
        CartCommand::Remove { product_id } => {
            let id = ProductId::new(product_id);
            if !in_cart(&store, &id, ctx) {
                return Ok(());
            }
            store.remove_from_cart(&id);
            ctx.output.success(&format!("Removed {} from the cart", id));
            show(&store, DeliveryMode::default(), ctx)
        }
        CartCommand::Clear { yes } => clear(&mut store, yes, ctx),
        CartCommand::Total { mode } => {
            let total = store.total_price(mode);
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "mode": mode,
                    "total": total.to_decimal(),
                    "display": total.display(),
                }));
            } else {
                println!("{}", total.display());
            }
            Ok(())
        }
        CartCommand::Count => {
            let count = store.cart_count();
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "count": count }));
            } else {
                println!("{}", count);
            }
            Ok(())
        }
        CartCommand::Reload => {
            let loaded = store.reload().len();
            ctx.output
                .success(&format!("Reloaded {} line(s) from storage", loaded));
            show(&store, DeliveryMode::default(), ctx)
        }
    }
}

fn add(store: &mut CartStore<FileStore>, id: &ProductId, ctx: &Context) -> Result<()> {
    let menu = ctx.load_menu()?;
    let product = menu.orderable(id)?;
    store.add_to_cart(product);

    let quantity = store.get(id).map(|l| l.quantity).unwrap_or_default();
    ctx.output
        .success(&format!("Added {} (x{})", product.name, quantity));
    show(store, DeliveryMode::default(), ctx)
}

fn clear(store: &mut CartStore<FileStore>, yes: bool, ctx: &Context) -> Result<()> {
    if store.is_empty() {
        ctx.output.info("Cart is already empty");
        return Ok(());
    }

    if !yes {
        if ctx.output.is_json() {
            bail!("Refusing to clear the cart without --yes in JSON mode");
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} item(s)?", store.cart_count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    store.clear_cart();
    ctx.output.success("Cart cleared");
    Ok(())
}

/// Warn and return false when `id` has no line; the cart treats it as a no-op.
fn in_cart(store: &CartStore<FileStore>, id: &ProductId, ctx: &Context) -> bool {
    if store.get(id).is_some() {
        return true;
    }
    ctx.output.warn(&format!("{} is not in the cart", id));
    false
}

fn show(store: &CartStore<FileStore>, mode: DeliveryMode, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": store.items(),
            "count": store.cart_count(),
            "pricing": store.pricing(mode),
        }));
        return Ok(());
    }

    ctx.output.header("Cart");

    if store.is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }

    let widths = [5, 24, 10, 10];
    ctx.output.table_row(&["QTY", "ITEM", "UNIT", "TOTAL"], &widths);
    for line in store.items() {
        let quantity = format!("{}x", line.quantity);
        let unit = line.price.display();
        let total = line.line_total().display();
        ctx.output
            .table_row(&[&quantity, &line.name, &unit, &total], &widths);
        if !line.notes.is_empty() {
            ctx.output.list_item(&format!("note: {}", line.notes));
        }
    }

    let pricing = store.pricing(mode);
    ctx.output.info("");
    ctx.output.kv("items", &store.cart_count().to_string());
    ctx.output.kv("subtotal", &pricing.subtotal.display());
    ctx.output
        .kv(&format!("fee ({})", mode), &pricing.delivery_fee.display());
    ctx.output.kv("total", &pricing.grand_total.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use aero_commerce::cart::{CartProduct, CategoryRef};
    use aero_commerce::money::{Currency, Money};

    fn json_context(dir: &std::path::Path) -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
        }
    }

    fn calabresa() -> CartProduct {
        CartProduct {
            id: ProductId::new("calabresa"),
            name: "Calabresa".to_string(),
            description: String::new(),
            price: Money::from_decimal(42.0, Currency::BRL),
            image: None,
            category: CategoryRef::new("Pizzas"),
            preparation_time: 25,
        }
    }

    #[test]
    fn test_json_clear_requires_yes() {
        let root = tempfile::tempdir().expect("tempdir");
        let ctx = json_context(root.path());
        let mut store = ctx.cart_store();
        store.add_to_cart(calabresa());

        assert!(clear(&mut store, false, &ctx).is_err());
        assert_eq!(store.cart_count(), 1);
        assert_eq!(ctx.cart_store().cart_count(), 1);

        clear(&mut store, true, &ctx).unwrap();
        assert!(store.is_empty());
        assert!(ctx.cart_store().is_empty());
    }
}
