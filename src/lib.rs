// ============================================================================
// BILLED - Notes de frais (frontend Rust/WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: funciones que renderizan DOM
// - ViewModels: lógica de los contenedores (Bills, Login, NewBill)
// - Services: SOLO comunicación con el backend
// - Utils: storage, rutas, formato
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Instancia global de la aplicación
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Billed app iniciando...");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la aplicación (la llama el router tras cada navegación)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        }
    });
}
