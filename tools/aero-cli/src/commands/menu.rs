//! Menu listing.

use anyhow::{bail, Result};

use super::MenuArgs;
use crate::context::Context;
use crate::output::availability_badge;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let menu = ctx.load_menu()?;

    let categories: Vec<&str> = match args.category.as_deref() {
        Some(wanted) => {
            let found: Vec<&str> = menu
                .category_names()
                .into_iter()
                .filter(|name| name.eq_ignore_ascii_case(wanted))
                .collect();
            if found.is_empty() {
                bail!("No category named {:?} in the menu", wanted);
            }
            found
        }
        None => menu.category_names(),
    };

    if ctx.output.is_json() {
        let products: Vec<_> = categories
            .iter()
            .flat_map(|name| menu.in_category(*name))
            .filter(|p| !args.available || p.is_available())
            .collect();
        ctx.output.json(&products);
        return Ok(());
    }

    for name in categories {
        ctx.output.header(name);
        let widths = [16, 28, 10, 5];
        for product in menu
            .in_category(name)
            .filter(|p| !args.available || p.is_available())
        {
            let price = product.price.display();
            let prep = format!("{}min", product.preparation_time);
            ctx.output
                .table_row(&[product.id.as_str(), &product.name, &price, &prep], &widths);
            if !product.is_available() {
                ctx.output.list_item(&availability_badge(false));
            }
        }
    }

    Ok(())
}
