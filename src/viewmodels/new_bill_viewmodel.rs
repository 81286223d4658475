// ============================================================================
// NEW BILL VIEWMODEL - Formulario de nueva nota de frais
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::DocumentApi;
use crate::models::BillPayload;
use crate::services::RemoteStore;
use crate::utils::constants::{FILE_ERROR_ID, FILE_ERROR_MESSAGE, USER_STORAGE_KEY};
use crate::utils::storage::SessionStorage;
use crate::utils::Route;

/// Extensiones de justificativo aceptadas
const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// ViewModel del formulario de nueva nota
pub struct NewBillViewModel {
    document: Rc<dyn DocumentApi>,
    storage: Rc<dyn SessionStorage>,
    store: Option<Rc<dyn RemoteStore>>,
    on_navigate: Rc<dyn Fn(Route)>,
    file_url: RefCell<Option<String>>,
    file_name: RefCell<Option<String>>,
    bill_id: RefCell<Option<String>>,
}

impl NewBillViewModel {
    pub fn new(
        document: Rc<dyn DocumentApi>,
        storage: Rc<dyn SessionStorage>,
        store: Option<Rc<dyn RemoteStore>>,
        on_navigate: Rc<dyn Fn(Route)>,
    ) -> Self {
        Self {
            document,
            storage,
            store,
            on_navigate,
            file_url: RefCell::new(None),
            file_name: RefCell::new(None),
            bill_id: RefCell::new(None),
        }
    }

    /// Selección del justificativo: valida la extensión y sube el archivo
    pub async fn handle_change_file(&self) {
        let input = match self.document.element_by_id("file") {
            Some(input) => input,
            None => return,
        };

        // El input devuelve la ruta del navegador (C:\fakepath\...)
        let path = input.value();
        let file_name = path
            .rsplit(['\\', '/'])
            .next()
            .unwrap_or(path.as_str())
            .to_string();

        if !has_accepted_extension(&file_name) {
            input.set_value("");
            self.show_file_error();
            return;
        }

        self.clear_file_error();

        let store = match &self.store {
            Some(store) => store,
            None => return,
        };
        let email = self.session_email();

        match store.upload_receipt(&file_name, &email).await {
            Ok(receipt) => {
                *self.file_url.borrow_mut() = Some(receipt.file_url);
                *self.bill_id.borrow_mut() = Some(receipt.key);
                *self.file_name.borrow_mut() = Some(file_name);
            }
            Err(e) => log::error!("❌ Error subiendo el justificativo: {}", e),
        }
    }

    /// Envío del formulario: crea la nota pendiente y vuelve al listado
    pub async fn handle_submit(&self) -> Result<(), String> {
        if let Some(key) = self.bill_id.borrow().as_deref() {
            log::info!("📤 Enviando la nota con el justificativo {}", key);
        }

        let bill = BillPayload {
            email: self.session_email(),
            expense_type: self.field("expense-type"),
            name: self.field("expense-name"),
            date: self.field("datepicker"),
            amount: self.field("amount").parse().unwrap_or(0.0),
            vat: self.field("vat").parse().unwrap_or(0.0),
            pct: self.field("pct").parse().unwrap_or(20),
            commentary: self.field("commentary"),
            file_url: self.file_url.borrow().clone(),
            file_name: self.file_name.borrow().clone(),
            status: "pending".to_string(),
        };

        let store = match &self.store {
            Some(store) => store,
            None => return Ok(()),
        };

        store.bills_create(&bill).await?;
        (self.on_navigate)(Route::Bills);
        Ok(())
    }

    fn field(&self, id: &str) -> String {
        self.document
            .element_by_id(id)
            .map(|element| element.value())
            .unwrap_or_default()
    }

    /// Email del usuario conectado, leído del Session Store
    fn session_email(&self) -> String {
        self.storage
            .get_item(USER_STORAGE_KEY)
            .and_then(|json| serde_json::from_str::<serde_json::Value>(&json).ok())
            .and_then(|user| user.get("email").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_default()
    }

    /// Insertar el mensaje de error junto al input (idempotente: si ya está
    /// visible no se duplica)
    fn show_file_error(&self) {
        if self.document.element_by_id(FILE_ERROR_ID).is_some() {
            return;
        }
        if let Some(input) = self.document.element_by_id("file") {
            input.insert_adjacent_html(&format!(
                "<p id=\"{}\" class=\"file-error\">{}</p>",
                FILE_ERROR_ID, FILE_ERROR_MESSAGE
            ));
        }
    }

    fn clear_file_error(&self) {
        if let Some(message) = self.document.element_by_id(FILE_ERROR_ID) {
            message.remove();
        }
    }
}

/// La extensión tras el último punto, sin distinguir mayúsculas
fn has_accepted_extension(file_name: &str) -> bool {
    file_name
        .rsplit('.')
        .next()
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
