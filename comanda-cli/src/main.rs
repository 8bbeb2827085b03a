use comanda_catalog::MealType;
use comanda_core::PaymentMethod;
use comanda_order::{OrderRequest, OrderSession};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app_config;
mod presentation;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comanda_cli=info,comanda_order=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Comanda order demo");

    let presenter = presentation::Presenter::new(config.display);
    let mut session = OrderSession::new();

    // Lunch with extra cheese and a premium drink, paid by card.
    let request = OrderRequest {
        meal: MealType::Lunch,
        extra_cheese: true,
        extra_portion: false,
        premium_drink: true,
    };
    let card = PaymentMethod::card("1234567890123456");

    presenter.order_header();
    let outcome = session.process_order(request, &card);
    presenter.outcome(&card, &outcome);

    presenter.statistics(&session.statistics());
}
