//! Order sending commands.

use anyhow::{anyhow, Result};
use serde::Serialize;
use topchef_commerce::cart::{CartStore, EMPTY_CART_MESSAGE};
use topchef_commerce::checkout::{
    DishSelection, OrderDetails, OrderExporter, OrderForm, OrderMessage, OutboundChannel,
};
use topchef_commerce::{CommerceError, Money};

use super::cart::open_rendering_store;
use super::{CheckoutArgs, OrderArgs};
use crate::context::Context;
use crate::output::Output;

/// Hands order links to the user, who opens them in WhatsApp.
struct LinkChannel {
    output: Output,
}

impl OutboundChannel for LinkChannel {
    fn dispatch(&mut self, url: &str) -> Result<(), CommerceError> {
        if !self.output.is_json() {
            self.output.info("Ouvrez ce lien pour envoyer la commande :");
            println!("  {}", url);
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct DispatchReport<'a> {
    sent: bool,
    url: &'a str,
    message: &'a str,
    total: Money,
}

pub fn checkout(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = checkout_store(ctx)?;

    if args.dry_run {
        let message = OrderMessage::checkout(store.items()).map_err(user_error)?;
        let url = ctx.config.whatsapp_link().url_for(&message);
        return preview(&message, &url, ctx);
    }

    let mut exporter = OrderExporter::new(
        ctx.config.whatsapp_link(),
        LinkChannel {
            output: ctx.output.clone(),
        },
    );
    let dispatch = exporter.checkout(&mut store).map_err(user_error)?;

    if ctx.output.is_json() {
        ctx.output.json(&DispatchReport {
            sent: true,
            url: &dispatch.url,
            message: dispatch.message.text(),
            total: dispatch.message.total(),
        });
    } else {
        ctx.output.success(dispatch.confirmation);
    }
    Ok(())
}

pub fn order(args: OrderArgs, ctx: &Context) -> Result<()> {
    let form = build_form(&args)?;

    if args.dry_run {
        form.validate().map_err(user_error)?;
        let message = OrderMessage::full_order(&form.details, form.lines()).map_err(user_error)?;
        let url = ctx.config.whatsapp_link().url_for(&message);
        return preview(&message, &url, ctx);
    }

    let mut exporter = OrderExporter::new(
        ctx.config.whatsapp_link(),
        LinkChannel {
            output: ctx.output.clone(),
        },
    );
    let dispatch = exporter.submit_order(&form).map_err(user_error)?;

    if ctx.output.is_json() {
        ctx.output.json(&DispatchReport {
            sent: true,
            url: &dispatch.url,
            message: dispatch.message.text(),
            total: dispatch.message.total(),
        });
    } else {
        ctx.output.success(dispatch.confirmation);
    }
    Ok(())
}

/// JSON output is a single report, so the cart panel is only drawn for
/// terminal output.
fn checkout_store(ctx: &Context) -> Result<CartStore> {
    if ctx.output.is_json() {
        ctx.open_store()
    } else {
        open_rendering_store(ctx)
    }
}

fn build_form(args: &OrderArgs) -> Result<OrderForm> {
    let mut details = OrderDetails::new(&args.name, &args.phone);
    details.order_type = args.order_type;
    if let Some(address) = &args.address {
        details.delivery_address = Some(address.clone());
    }
    if let Some(note) = &args.note {
        details = details.with_special_request(note);
    }

    let mut form = OrderForm::new(details);
    for dish in &args.dishes {
        form = form.with_dish(parse_dish_arg(dish)?);
    }
    Ok(form)
}

/// Parse `"Name - price"` with an optional `":quantity"` suffix.
fn parse_dish_arg(value: &str) -> Result<DishSelection> {
    let (value, quantity) = match value.rsplit_once(':') {
        Some((dish, qty)) if is_quantity(qty) => {
            let qty = qty
                .trim()
                .parse::<u32>()
                .map_err(|_| anyhow!("Quantité invalide '{}' dans '{}'", qty, value))?;
            (dish, Some(qty))
        }
        _ => (value, None),
    };
    DishSelection::parse(value, quantity).map_err(user_error)
}

fn is_quantity(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn preview(message: &OrderMessage, url: &str, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&DispatchReport {
            sent: false,
            url,
            message: message.text(),
            total: message.total(),
        });
        return Ok(());
    }

    ctx.output.header("Message");
    for line in message.text().lines() {
        println!("  {}", line);
    }
    println!();
    ctx.output.kv("Lien", url);
    ctx.output.warn("Simulation : rien n'a été envoyé");
    Ok(())
}

/// Turn domain errors into the messages shown to customers.
fn user_error(err: CommerceError) -> anyhow::Error {
    match err {
        CommerceError::EmptyCart => anyhow!(EMPTY_CART_MESSAGE),
        CommerceError::NoDishSelected => anyhow!("Veuillez sélectionner au moins un plat"),
        CommerceError::InvalidPhone(_) => anyhow!("Numéro WhatsApp invalide"),
        CommerceError::MissingAddress => anyhow!("Adresse de livraison requise"),
        CommerceError::ValidationError(_) => anyhow!("Veuillez saisir votre nom"),
        CommerceError::InvalidDishValue(value) => anyhow!("Plat invalide : {}", value),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use topchef_commerce::checkout::{OrderType, RecordingChannel, WhatsAppLink};

    fn order_args(dishes: &[&str]) -> OrderArgs {
        OrderArgs {
            name: "Awa".to_string(),
            phone: "+225 07 00 00 00 00".to_string(),
            order_type: OrderType::Delivery,
            address: Some("Cocody".to_string()),
            note: None,
            dishes: dishes.iter().map(|d| d.to_string()).collect(),
            dry_run: true,
        }
    }

    #[test]
    fn test_parse_dish_arg() {
        let dish = parse_dish_arg("Poulet braisé - 4500").unwrap();
        assert_eq!(dish.name, "Poulet braisé");
        assert_eq!(dish.price, Money::new(4500));
        assert_eq!(dish.quantity, 1);

        let dish = parse_dish_arg("Alloco - 500:3").unwrap();
        assert_eq!(dish.name, "Alloco");
        assert_eq!(dish.quantity, 3);
        assert_eq!(dish.subtotal(), Money::new(1500));

        let dish = parse_dish_arg("Menu: jour - 3000").unwrap();
        assert_eq!(dish.name, "Menu: jour");
        assert_eq!(dish.quantity, 1);
    }

    #[test]
    fn test_parse_dish_arg_rejects_bad_values() {
        assert!(parse_dish_arg("Alloco - 500:lots").is_err());
        assert!(parse_dish_arg("Alloco").is_err());
        assert!(parse_dish_arg("Alloco - cheap").is_err());
        assert!(parse_dish_arg("Alloco - 500:99999999999").is_err());
    }

    #[test]
    fn test_build_form() {
        let form = build_form(&order_args(&["Garba - 1000:2", "Soda - 1000"])).unwrap();

        assert_eq!(form.dishes.len(), 2);
        assert_eq!(form.total(), Money::new(3000));
        assert_eq!(form.details.shipping_address(), Some("Cocody"));
        assert!(form.validate().is_ok());
    }

    fn context_in(cwd: &std::path::Path, json: bool) -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, json),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_json_checkout_store_has_no_render_listener() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = checkout_store(&context_in(dir.path(), true)).unwrap();
        assert!(format!("{:?}", store).contains("listeners: 0"));

        store.add_item("Garba", Money::new(1000), "");
        let mut exporter = OrderExporter::new(WhatsAppLink::default(), RecordingChannel::default());
        exporter.checkout(&mut store).unwrap();
        assert!(store.is_empty());

        let store = checkout_store(&context_in(dir.path(), false)).unwrap();
        assert!(format!("{:?}", store).contains("listeners: 1"));
    }

    #[test]
    fn test_user_error_messages() {
        assert_eq!(
            user_error(CommerceError::EmptyCart).to_string(),
            EMPTY_CART_MESSAGE
        );
        assert_eq!(
            user_error(CommerceError::MissingAddress).to_string(),
            "Adresse de livraison requise"
        );
        assert_eq!(
            parse_dish_arg("Alloco").unwrap_err().to_string(),
            "Plat invalide : Alloco"
        );
    }
}
