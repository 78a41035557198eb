pub mod order_reader;
pub mod price_reader;
pub mod recap_writer;
