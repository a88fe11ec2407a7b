#![allow(dead_code)]

use std::io::Cursor;

use configurator::adapter::inbound::cli::output::{Output, OutputConfig};
use configurator::adapter::inbound::cli::session::Session;
use configurator::application::ConfigurationStore;

/// Keystrokes for one wizard pass: model, paint, wheels, self-driving.
pub fn configure(model: u32, paint: u32, wheels: u32, fsd: u32) -> String {
    format!("1\n{model}\n{paint}\n{wheels}\n{fsd}\n")
}

/// Keystrokes for deleting by description.
pub fn delete(description: &str) -> String {
    format!("3\n{description}\n")
}

pub const VIEW: &str = "2\n";
pub const EXIT: &str = "4\n";

/// Build a session over `script` with plain text output.
pub fn session(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    session_with(script, OutputConfig::default())
}

pub fn session_with(script: &str, config: OutputConfig) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::new(
        Cursor::new(script.as_bytes().to_vec()),
        Output::new(Vec::new(), config),
    )
}

/// Run `script` to completion and return the store and transcript.
pub fn run(script: &str) -> (ConfigurationStore, String) {
    run_bytes(script.as_bytes())
}

/// Like [`run`], for input that is not necessarily valid UTF-8.
pub fn run_bytes(script: &[u8]) -> (ConfigurationStore, String) {
    let mut session = Session::new(
        Cursor::new(script.to_vec()),
        Output::new(Vec::new(), OutputConfig::default()),
    );
    session.run().expect("session runs");
    let (store, out) = session.into_parts();
    (store, String::from_utf8(out).expect("utf-8 transcript"))
}

/// Descriptions in store order.
pub fn descriptions(store: &ConfigurationStore) -> Vec<String> {
    store.iter().map(|c| c.description().to_string()).collect()
}
