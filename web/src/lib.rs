use wasm_bindgen::prelude::*;

pub use elements::*;
pub use game::*;
pub use storage::*;

mod elements;
mod game;
mod storage;
mod utils;

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Error initializing logger");
    log::info!("Bingo module loaded");
}
