mod api;
mod board;
mod config;
mod dom;
mod error;
mod markup;
mod model;
mod notice;
mod page;

use gloo::console::{error, log};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::board::ActivityBoard;
use crate::config::BoardConfig;
use crate::page::DomPage;

#[wasm_bindgen(start)]
pub fn start() {
    let config = BoardConfig::load();

    let board = match ActivityBoard::<ApiClient, DomPage>::attach(&config) {
        Ok(board) => board,
        Err(e) => {
            error!(format!("Activity board not started: {e}"));
            return;
        }
    };

    board.wire();
    log!("Activity board ready");

    spawn_local(async move { board.load_activities().await });
}

// Bin crates still want a Rust main; wasm-bindgen calls `start()` on init.
fn main() {}
