use chrono::Local;
use comanda_core::PaymentMethod;
use comanda_order::{AssemblyStep, OrderOutcome, Statistics};

use crate::app_config::DisplayConfig;

const BANNER: &str = "═══════════════════════════════════════════════════════";
const RULE: &str = "───────────────────────────────────────────────────────";

/// Console narration for processed orders. The core crates never print;
/// everything rendered here comes out of the returned outcome values.
pub struct Presenter {
    display: DisplayConfig,
}

impl Presenter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    fn money(&self, cents: i64) -> String {
        format!(
            "{} {}.{:02}",
            self.display.currency_symbol,
            cents / 100,
            cents % 100
        )
    }

    fn money_average(&self, cents: f64) -> String {
        format!("{} {:.2}", self.display.currency_symbol, cents / 100.0)
    }

    pub fn order_header(&self) {
        println!("{BANNER}");
        println!("         PROCESANDO NUEVO PEDIDO");
        println!("{BANNER}");
        println!(
            "Fecha: {}",
            Local::now().format(&self.display.timestamp_format)
        );
        println!();
    }

    pub fn outcome(&self, method: &PaymentMethod, outcome: &OrderOutcome) {
        match outcome {
            OrderOutcome::Completed {
                order,
                assembly,
                receipt,
            } => {
                for step in assembly {
                    if let AssemblyStep::AddExtra(extra) = step {
                        println!(
                            "Agregado: {} (+{})",
                            extra.label(),
                            self.money(extra.price_delta_cents())
                        );
                    }
                }
                println!();

                println!("{RULE}");
                println!("RESUMEN DEL PEDIDO:");
                println!("{RULE}");
                println!("   {}", order.name());
                println!("      {}", order.description());
                println!("      Precio: {}", self.money(order.price_cents()));
                println!();

                println!("{RULE}");
                println!("PREPARACIÓN:");
                println!("{RULE}");
                for step in assembly {
                    println!("   - {}...", step.narration());
                }
                println!("Pedido completamente preparado");
                println!();

                println!("{RULE}");
                println!("PROCESAMIENTO DE PAGO:");
                println!("{RULE}");
                println!("Método seleccionado: {}", method.display_name());
                if let Some(last_four) = method.card_last_four() {
                    println!("   Tarjeta: **** **** **** {last_four}");
                }
                if let PaymentMethod::Transfer { account } = method {
                    println!("   Cuenta destino: {account}");
                }
                println!("Monto total: {}", self.money(receipt.amount_cents));
                if let Some(reference) = &receipt.reference {
                    match method {
                        PaymentMethod::Card { .. } => {
                            println!("   Código de autorización: {reference}")
                        }
                        _ => println!("   Referencia: {reference}"),
                    }
                }
                println!("PEDIDO COMPLETADO EXITOSAMENTE");
            }
            OrderOutcome::PaymentFailed {
                amount_cents,
                error,
            } => {
                println!("{RULE}");
                println!("PROCESAMIENTO DE PAGO:");
                println!("{RULE}");
                println!("Método seleccionado: {}", method.display_name());
                println!("Monto total: {}", self.money(*amount_cents));
                println!("Error en el procesamiento del pago: {error}");
            }
        }
        println!("{BANNER}");
        println!();
    }

    pub fn statistics(&self, stats: &Statistics) {
        println!("{BANNER}");
        println!("         ESTADÍSTICAS DEL RESTAURANTE");
        println!("{BANNER}");
        println!("Total de pedidos procesados: {}", stats.count);
        println!("Ingreso total: {}", self.money(stats.total_cents));
        println!(
            "Promedio por pedido: {}",
            self.money_average(stats.average_cents)
        );
        println!();
    }
}
