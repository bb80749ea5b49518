mod bundled_dataset;
mod reading_session;
