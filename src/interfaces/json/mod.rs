pub mod decision_writer;
pub mod event_reader;
