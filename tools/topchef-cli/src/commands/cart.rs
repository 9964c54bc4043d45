//! Cart editing commands.

use anyhow::Result;
use dialoguer::Confirm;
use topchef_commerce::cart::{CartCommand, CartStore};
use topchef_commerce::{LineItemId, Money};

use super::{AddArgs, ClearArgs, ItemArgs, QuantityArgs};
use crate::context::Context;

/// Open the store with the cart panel drawn after every change.
pub fn open_rendering_store(ctx: &Context) -> Result<CartStore> {
    let mut store = ctx.open_store()?;
    let output = ctx.output.clone();
    store.on_change(move |view| output.cart(view));
    Ok(store)
}

pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = open_rendering_store(ctx)?;
    store.add_item(&args.name, Money::new(args.price), args.image);
    ctx.output.success(&format!("{} ajouté au panier", args.name));
    Ok(())
}

pub fn remove(args: ItemArgs, ctx: &Context) -> Result<()> {
    let mut store = open_rendering_store(ctx)?;
    match store.get_item(args.id).map(|i| i.name.clone()) {
        Some(name) => {
            store.remove_item(args.id);
            ctx.output.success(&format!("{} retiré du panier", name));
        }
        None => {
            ctx.output.warn(&missing_item(args.id));
            store.remove_item(args.id);
        }
    }
    Ok(())
}

pub fn set_quantity(args: QuantityArgs, ctx: &Context) -> Result<()> {
    let mut store = open_rendering_store(ctx)?;
    if store.get_item(args.id).is_none() {
        ctx.output.warn(&missing_item(args.id));
        return Ok(());
    }
    store.dispatch(CartCommand::SetQuantity {
        item_id: args.id,
        quantity: args.quantity,
    });
    Ok(())
}

pub fn adjust(args: ItemArgs, delta: i64, ctx: &Context) -> Result<()> {
    let mut store = open_rendering_store(ctx)?;
    if store.get_item(args.id).is_none() {
        ctx.output.warn(&missing_item(args.id));
        return Ok(());
    }
    store.dispatch(CartCommand::Adjust {
        item_id: args.id,
        delta,
    });
    Ok(())
}

pub fn show(ctx: &Context) -> Result<()> {
    let mut store = open_rendering_store(ctx)?;
    store.render();
    Ok(())
}

pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut store = open_rendering_store(ctx)?;
    if store.is_empty() {
        ctx.output.info("Le panier est déjà vide");
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Retirer les {} article(s) du panier ?", store.count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Annulé");
            return Ok(());
        }
    }

    store.clear();
    ctx.output.success("Panier vidé");
    Ok(())
}

fn missing_item(id: LineItemId) -> String {
    format!("Aucun article {} dans le panier", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_item_message() {
        assert_eq!(
            missing_item(LineItemId::new(1718000000000)),
            "Aucun article 1718000000000 dans le panier"
        );
    }
}
