// ============================================================================
// APP - Shell de la aplicación: router + render por ruta
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, BrowserDocument, DocumentApi};
use crate::services::{HttpStore, RemoteStore};
use crate::utils::constants::USER_STORAGE_KEY;
use crate::utils::storage::{LocalStorage, SessionStorage};
use crate::utils::Route;
use crate::views::{render_bills, render_dashboard, render_login, render_new_bill};

/// Dependencias compartidas que reciben las vistas y view-models
#[derive(Clone)]
pub struct AppContext {
    pub document: Rc<dyn DocumentApi>,
    pub storage: Rc<dyn SessionStorage>,
    pub store: Option<Rc<dyn RemoteStore>>,
    pub on_navigate: Rc<dyn Fn(Route)>,
}

/// Aplicación principal
pub struct App {
    route: Rc<RefCell<Route>>,
    context: AppContext,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("root")
            .ok_or_else(|| JsValue::from_str("No #root element found"))?;

        let storage: Rc<dyn SessionStorage> = Rc::new(LocalStorage);
        let store: Option<Rc<dyn RemoteStore>> = Some(Rc::new(HttpStore::new()));

        // Restaurar sesión: un usuario guardado entra directo a su página
        let initial_route = match storage.get_item(USER_STORAGE_KEY) {
            Some(json) => match serde_json::from_str::<serde_json::Value>(&json) {
                Ok(user) if user.get("type").and_then(|t| t.as_str()) == Some("Admin") => {
                    log::info!("💾 [APP] Sesión admin restaurada desde storage");
                    Route::Dashboard
                }
                Ok(_) => {
                    log::info!("💾 [APP] Sesión empleado restaurada desde storage");
                    Route::Bills
                }
                Err(_) => Route::Login,
            },
            None => Route::Login,
        };

        let route = Rc::new(RefCell::new(initial_route));

        let on_navigate: Rc<dyn Fn(Route)> = {
            let route = route.clone();
            Rc::new(move |destination| {
                *route.borrow_mut() = destination;
                crate::rerender_app();
            })
        };

        let context = AppContext {
            document: Rc::new(BrowserDocument),
            storage,
            store,
            on_navigate,
        };

        Ok(Self {
            route,
            context,
            root,
        })
    }

    /// Renderizar la ruta actual
    pub fn render(&self) -> Result<(), JsValue> {
        let route = *self.route.borrow();
        log::info!("🎬 [APP] Renderizando ruta {}", route.path());

        // Limpiar contenido anterior
        set_inner_html(&self.root, "");

        let view = match route {
            Route::Login => render_login(&self.context)?,
            Route::Bills => render_bills(&self.context)?,
            Route::NewBill => render_new_bill(&self.context)?,
            Route::Dashboard => render_dashboard(&self.context)?,
        };
        append_child(&self.root, &view)?;

        Ok(())
    }
}
