use clap::Parser;
use loket::application::engine::FormSession;
use loket::domain::category::TicketCategory;
use loket::domain::payment::PaymentState;
use loket::domain::recap::DailyRecap;
use loket::error::Result as LoketResult;
use loket::infrastructure::in_memory::InMemoryPriceStore;
use loket::interfaces::csv::order_reader::{OrderReader, OrderRecord};
use loket::interfaces::csv::price_reader::PriceListReader;
use loket::interfaces::csv::recap_writer::RecapWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file
    orders: PathBuf,

    /// Ticket price list CSV file
    #[arg(long)]
    prices: PathBuf,

    /// Print the aggregated daily recap instead of per-order rows
    #[arg(long)]
    recap: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let price_file = File::open(&cli.prices).into_diagnostic()?;
    let price_list = PriceListReader::new(price_file).read().into_diagnostic()?;
    let store = InMemoryPriceStore::with_prices(price_list);

    let orders_file = File::open(&cli.orders).into_diagnostic()?;
    let reader = OrderReader::new(orders_file);

    let stdout = io::stdout();
    let mut writer = RecapWriter::new(stdout.lock());
    let mut recap = DailyRecap::new();

    if !cli.recap {
        writer.write_order_header().into_diagnostic()?;
    }

    for row in reader.orders() {
        match row {
            Ok(order) => match derive_order(&store, &order).await {
                Ok(payment) => {
                    recap.record(&order.counts(), &payment);
                    if !cli.recap {
                        writer.write_order(&order.order, &payment).into_diagnostic()?;
                    }
                }
                Err(e) => {
                    eprintln!("Error processing order: {}", e);
                }
            },
            Err(e) => {
                eprintln!("Error reading order: {}", e);
            }
        }
    }

    if cli.recap {
        writer.write_recap(&recap).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

/// Runs one order through a form session, the same path the reservation forms
/// take: open against the price list, enter the counts and down payment, read
/// the derived payment state back.
async fn derive_order(store: &InMemoryPriceStore, order: &OrderRecord) -> LoketResult<PaymentState> {
    let mut session = FormSession::open(store, TicketCategory::ALL.to_vec()).await?;
    for category in TicketCategory::ALL {
        session.set_count(category, order.count(category))?;
    }
    session.set_down_payment(order.down_payment()?);
    Ok(session.payment().clone())
}
