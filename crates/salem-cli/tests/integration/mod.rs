mod browse_session;
mod config_files;
