use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_prices_csv(path: &Path) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["category", "unit_price"])?;
    wtr.write_record(["pelajar", "3000"])?;
    wtr.write_record(["umum", "5000"])?;
    wtr.write_record(["asing", "25000"])?;

    wtr.flush()?;
    Ok(())
}

pub fn generate_orders_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["order", "pelajar", "umum", "asing", "khusus", "down_payment"])?;
    for i in 1..=rows {
        wtr.write_record([
            &format!("WI-{:04}", i),
            "1",
            "0",
            "0",
            "0",
            "3000",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
