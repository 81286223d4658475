// ============================================================================
// BILLS VIEW - Listado de notas de frais
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{
    append_child, get_element_by_id, on_click, remove_class, set_inner_html, BrowserElement,
    ElementBuilder,
};
use crate::models::FormattedBill;
use crate::viewmodels::{sort_bills_for_display, BillsViewModel};

/// Renderizar vista del listado de notas
pub fn render_bills(ctx: &AppContext) -> Result<Element, JsValue> {
    let vm = Rc::new(BillsViewModel::new(
        ctx.document.clone(),
        ctx.store.clone(),
        ctx.on_navigate.clone(),
    ));

    let page = ElementBuilder::new("div")?.class("bills-page").build();

    // Header con el botón de nueva nota
    let header = ElementBuilder::new("div")?.class("bills-header").build();
    let title = ElementBuilder::new("h1")?
        .class("content-title")
        .text("Mes notes de frais")
        .build();
    let new_bill_btn = ElementBuilder::new("button")?
        .id("btn-new-bill")?
        .attr("type", "button")?
        .class("btn-primary")
        .text("Nouvelle note de frais")
        .build();
    {
        let vm = vm.clone();
        on_click(&new_bill_btn, move |_| vm.handle_click_new_bill())?;
    }
    append_child(&header, &title)?;
    append_child(&header, &new_bill_btn)?;
    append_child(&page, &header)?;

    // Tabla (el cuerpo se rellena tras la carga asíncrona)
    let table = ElementBuilder::new("table")?.class("bills-table").build();
    let thead = ElementBuilder::new("thead")?
        .html("<tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr>")
        .build();
    let tbody = ElementBuilder::new("tbody")?.id("bills-table-body")?.build();
    append_child(&table, &thead)?;
    append_child(&table, &tbody)?;
    append_child(&page, &table)?;

    // Modal del justificativo
    let modal = render_receipt_modal()?;
    append_child(&page, &modal)?;

    // Carga asíncrona del listado
    {
        let vm = vm.clone();
        spawn_local(async move {
            match vm.get_bills().await {
                Ok(mut bills) => {
                    sort_bills_for_display(&mut bills);
                    if let Err(e) = fill_bills_table(&vm, &bills) {
                        log::error!("❌ [BILLS] Error renderizando el listado: {:?}", e);
                    }
                }
                Err(e) => log::error!("❌ [BILLS] Error obteniendo las notas: {}", e),
            }
        });
    }

    Ok(page)
}

/// Rellenar la tabla con las notas ya ordenadas (más recientes primero)
fn fill_bills_table(vm: &Rc<BillsViewModel>, bills: &[FormattedBill]) -> Result<(), JsValue> {
    let tbody = match get_element_by_id("bills-table-body") {
        Some(tbody) => tbody,
        None => return Ok(()),
    };
    set_inner_html(&tbody, "");

    for bill in bills {
        let row = ElementBuilder::new("tr")?.build();

        for text in [
            bill.expense_type.as_str(),
            bill.name.as_str(),
            bill.date.as_str(),
        ] {
            let cell = ElementBuilder::new("td")?.text(text).build();
            append_child(&row, &cell)?;
        }

        let amount = ElementBuilder::new("td")?
            .text(&format!("{} €", bill.amount))
            .build();
        append_child(&row, &amount)?;

        let status = ElementBuilder::new("td")?.text(&bill.status).build();
        append_child(&row, &status)?;

        // Icono para previsualizar el justificativo
        let actions = ElementBuilder::new("td")?.build();
        let icon = ElementBuilder::new("div")?
            .class("icon-eye")
            .attr("data-bill-url", &bill.file_url)?
            .build();
        {
            let vm = vm.clone();
            let icon_el = icon.clone();
            on_click(&icon, move |_| {
                vm.handle_click_icon_eye(&BrowserElement(icon_el.clone()));
            })?;
        }
        append_child(&actions, &icon)?;
        append_child(&row, &actions)?;

        append_child(&tbody, &row)?;
    }

    Ok(())
}

/// Modal que muestra la imagen del justificativo
fn render_receipt_modal() -> Result<Element, JsValue> {
    let modal = ElementBuilder::new("div")?
        .id("modaleFile")?
        .class("modal")
        .build();

    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let header = ElementBuilder::new("div")?.class("modal-header").build();
    let title = ElementBuilder::new("h5")?.text("Justificatif").build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let modal = modal.clone();
        on_click(&close_btn, move |_| {
            let _ = remove_class(&modal, "show");
        })?;
    }
    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;

    let body = ElementBuilder::new("div")?.class("modal-body").build();

    append_child(&content, &header)?;
    append_child(&content, &body)?;
    append_child(&modal, &content)?;

    Ok(modal)
}
