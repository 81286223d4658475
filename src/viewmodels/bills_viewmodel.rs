// ============================================================================
// BILLS VIEWMODEL - Lógica del listado de notas de frais
// ============================================================================

use std::rc::Rc;

use crate::dom::{DocumentApi, ElementApi};
use crate::models::FormattedBill;
use crate::services::RemoteStore;
use crate::utils::format::{format_date, format_status};
use crate::utils::Route;

/// ViewModel del listado - SOLO lógica de negocio
pub struct BillsViewModel {
    document: Rc<dyn DocumentApi>,
    store: Option<Rc<dyn RemoteStore>>,
    on_navigate: Rc<dyn Fn(Route)>,
}

impl BillsViewModel {
    pub fn new(
        document: Rc<dyn DocumentApi>,
        store: Option<Rc<dyn RemoteStore>>,
        on_navigate: Rc<dyn Fn(Route)>,
    ) -> Self {
        Self {
            document,
            store,
            on_navigate,
        }
    }

    /// Obtener las notas formateadas para mostrar.
    /// Sin backend configurado devuelve una lista vacía (no es un error).
    pub async fn get_bills(&self) -> Result<Vec<FormattedBill>, String> {
        let store = match &self.store {
            Some(store) => store,
            None => return Ok(Vec::new()),
        };

        let bills = store.bills_list().await?;

        let formatted = bills
            .into_iter()
            .map(|bill| {
                // Una fecha corrupta no tumba el listado: se conserva el
                // valor crudo de esa nota
                let date = match format_date(&bill.date) {
                    Ok(date) => date,
                    Err(e) => {
                        log::warn!("⚠️ {} - se muestra la fecha sin formatear", e);
                        bill.date.clone()
                    }
                };
                FormattedBill {
                    raw_date: bill.date.clone(),
                    date,
                    status: format_status(&bill.status),
                    id: bill.id,
                    email: bill.email,
                    expense_type: bill.expense_type,
                    name: bill.name,
                    amount: bill.amount,
                    vat: bill.vat,
                    pct: bill.pct,
                    commentary: bill.commentary,
                    file_url: bill.file_url,
                    file_name: bill.file_name,
                }
            })
            .collect();

        Ok(formatted)
    }

    /// Ir al formulario de nueva nota
    pub fn handle_click_new_bill(&self) {
        (self.on_navigate)(Route::NewBill);
    }

    /// Mostrar el justificativo de una nota en el modal
    pub fn handle_click_icon_eye(&self, icon: &dyn ElementApi) {
        let bill_url = icon.attribute("data-bill-url").unwrap_or_default();

        let modal = match self.document.element_by_id("modaleFile") {
            Some(modal) => modal,
            None => return,
        };

        let img_width = (modal.client_width() as f64 * 0.5).floor() as i32;
        if let Some(body) = self.document.query_selector("#modaleFile .modal-body") {
            body.set_inner_html(&format!(
                "<div style='text-align: center;' class=\"bill-proof-container\"><img width={} src={} alt=\"Bill\" /></div>",
                img_width, bill_url
            ));
        }
        modal.add_class("show");
    }
}

/// Orden de visualización: más recientes primero. La fecha ISO con ceros a
/// la izquierda se ordena lexicográficamente.
pub fn sort_bills_for_display(bills: &mut [FormattedBill]) {
    bills.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));
}
