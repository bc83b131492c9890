//! # Comanda
//!
//! A restaurant ordering app built on actor-owned stores.
//!
//! ## 🚀 Core Components
//!
//! - **[store_actor]**: The heart of the system. Contains the generic [`StoreActor`](store_actor::StoreActor) and [`StoreState`](store_actor::StoreState) trait.
//! - **[model](comanda_app::model)**: Pure data structures ([`CartState`], [`CheckoutDraft`], [`Restaurant`]) that implement `StoreState`.
//! - **[clients](comanda_app::clients)**: Type-safe wrappers (e.g., [`CartClient`]) that hide the complexity of message passing.
//! - **[lifecycle](comanda_app::lifecycle)**: The [`TableSession`] orchestrator that wires stores to the HTTP gateway.
//!
//! ## 📚 Quick Start
//!
//! The entry point below walks one guest through a visit:
//! 1.  Setting up the [`TableSession`].
//! 2.  Filling the bag and the checkout form.
//! 3.  Placing the order.
//!
//! ## 🧪 Testing
//!
//! See [`store_actor::mock`] for utilities to test clients without spawning full stores.

use std::sync::Arc;

use comanda_app::api::HttpOrderApi;
use comanda_app::config::Config;
use comanda_app::form::{Callback, Select, TextInput};
use comanda_app::lifecycle::TableSession;
use comanda_app::model::{CartState, MenuItem, Page, PaymentMethod, Restaurant, Table};
use comanda_app::views::{cart_panel, checkout_form, NAME_FIELD_LABEL};
use serde_json::json;
use store_actor::tracing::setup_tracing;
use store_actor::StoreHandle;
use tracing::{error, info, Instrument};

/// The restaurant the demo is seated at.
fn demo_restaurant() -> Restaurant {
    Restaurant {
        id: 1,
        name: "Cantina da Praça".to_string(),
        tables: vec![
            Table { id: 101, number: 1 },
            Table { id: 102, number: 2 },
            Table { id: 103, number: 3 },
        ],
        menu: vec![
            MenuItem {
                id: 11,
                name: "Feijoada".to_string(),
                price: 4500,
            },
            MenuItem {
                id: 12,
                name: "Pão de queijo".to_string(),
                price: 1200,
            },
            MenuItem {
                id: 13,
                name: "Caipirinha".to_string(),
                price: 1800,
            },
        ],
    }
}

fn render(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting comanda session");

    let config = Config::load();
    let api = Arc::new(HttpOrderApi::new(config.api_base_url));
    let session = TableSession::new(demo_restaurant(), api);

    // Sign in. Without a backend running this fails; the visit goes on and
    // the submission below will report the same way.
    let span = tracing::info_span!("sign_in");
    let sign_in_result = async {
        info!("Signing in");
        session
            .sign_in(&json!({
                "email": "ana@example.com",
                "password": "segredo",
            }))
            .await
    }
    .instrument(span)
    .await;

    match sign_in_result {
        Ok(_) => info!("Signed in"),
        Err(e) => error!(error = %e, "Sign in failed"),
    }

    // Follow the cart through its watch channel, the way a UI would
    let mut cart_feed = session.cart.subscribe();

    // Fill the bag
    session.cart.add_item(11).await.map_err(|e| e.to_string())?;
    session.cart.add_item(13).await.map_err(|e| e.to_string())?;
    session.cart.add_item(11).await.map_err(|e| e.to_string())?;
    session.cart.show().await.map_err(|e| e.to_string())?;

    let cart: CartState = cart_feed.borrow_and_update().clone();
    render(cart_panel(&cart, session.restaurant()).to_lines());

    // "Quero pedir" takes the guest to checkout
    session
        .router
        .navigate(Page::Checkout)
        .await
        .map_err(|e| e.to_string())?;

    // The checkout form: widgets report through callbacks, the session
    // dispatches, and committed values come back down as snapshots.
    let (edit_tx, mut edit_rx) = tokio::sync::mpsc::unbounded_channel();

    let name_tx = edit_tx.clone();
    let mut name_field = TextInput::new(
        NAME_FIELD_LABEL,
        Callback::new(move |text| {
            let _ = name_tx.send(Edit::Name(text));
        }),
    );

    let draft = session.checkout.snapshot().await.map_err(|e| e.to_string())?;
    let view = checkout_form(&draft, session.restaurant());

    let table_tx = edit_tx.clone();
    let table_select = Select::new(
        "Mesa",
        view.table_options.clone(),
        Callback::new(move |number| {
            let _ = table_tx.send(Edit::Table(number));
        }),
    );

    let payment_tx = edit_tx;
    let payment_select = Select::new(
        "Pagamento",
        PaymentMethod::ALL
            .iter()
            .map(|method| (method.label().to_string(), *method))
            .collect(),
        Callback::new(move |method| {
            let _ = payment_tx.send(Edit::Payment(method));
        }),
    );

    // The guest fills the form
    name_field.change("Ana Souza");
    table_select.choose(1);
    payment_select.choose(0);

    while let Ok(edit) = edit_rx.try_recv() {
        match edit {
            Edit::Name(text) => session.checkout.set_name(text).await,
            Edit::Table(number) => session.checkout.choose_table(number).await,
            Edit::Payment(method) => session.checkout.choose_payment(method).await,
        }
        .map_err(|e| e.to_string())?;
    }

    // Committed values come back down to the controlled widgets
    let draft = session.checkout.snapshot().await.map_err(|e| e.to_string())?;
    name_field.set_value(draft.user_name.clone().unwrap_or_default());
    render(checkout_form(&draft, session.restaurant()).to_lines());

    // Submit the order
    let span = tracing::info_span!("order_submission");
    let order_result = async {
        info!("Placing the table's order");
        session.place_order().await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(created) => {
            info!(order_id = created.id, "Order placed successfully");
            let page = session.router.current().await.map_err(|e| e.to_string())?;
            info!(?page, "Guest moved on");
            println!("Pedido #{} confirmado", created.id);
        }
        Err(e) => {
            error!(error = %e, "Order submission failed");
            // Nothing was lost; the bag renders exactly as before
            let cart: CartState = cart_feed.borrow_and_update().clone();
            render(cart_panel(&cart, session.restaurant()).to_lines());
        }
    }

    // Shutdown gracefully
    session.shutdown().await?;

    info!("Session completed");
    Ok(())
}

/// One form edit on its way from a widget to the checkout store.
enum Edit {
    Name(String),
    Table(u32),
    Payment(PaymentMethod),
}
