// ============================================================================
// NEW BILL VIEW - Formulario de nueva nota de frais
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_change, on_submit, ElementBuilder};
use crate::viewmodels::NewBillViewModel;

/// Tipos de dépense propuestos en el formulario
const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Renderizar vista de nueva nota
pub fn render_new_bill(ctx: &AppContext) -> Result<Element, JsValue> {
    let vm = Rc::new(NewBillViewModel::new(
        ctx.document.clone(),
        ctx.storage.clone(),
        ctx.store.clone(),
        ctx.on_navigate.clone(),
    ));

    let page = ElementBuilder::new("div")?.class("new-bill-page").build();

    let title = ElementBuilder::new("h1")?
        .class("content-title")
        .text("Envoyer une note de frais")
        .build();
    append_child(&page, &title)?;

    let form = ElementBuilder::new("form")?
        .id("form-new-bill")?
        .class("form-newbill")
        .build();

    // Tipo de dépense
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!("<option value=\"{}\">{}</option>", t, t))
        .collect();
    let expense_type = ElementBuilder::new("select")?
        .id("expense-type")?
        .class("form-input")
        .html(&options)
        .build();
    append_child(&form, &labeled_group("Type de dépense", expense_type)?)?;

    // Campos del formulario
    let name_input = text_input("expense-name", "text", "Vol Paris Londres")?;
    append_child(&form, &labeled_group("Nom de la dépense", name_input)?)?;

    let date_input = text_input("datepicker", "date", "")?;
    append_child(&form, &labeled_group("Date", date_input)?)?;

    let amount_input = text_input("amount", "number", "348")?;
    append_child(&form, &labeled_group("Montant TTC", amount_input)?)?;

    let vat_input = text_input("vat", "number", "70")?;
    append_child(&form, &labeled_group("TVA", vat_input)?)?;

    let pct_input = text_input("pct", "number", "20")?;
    append_child(&form, &labeled_group("%", pct_input)?)?;

    let commentary = ElementBuilder::new("textarea")?
        .id("commentary")?
        .class("form-input")
        .attr("rows", "3")?
        .build();
    append_child(&form, &labeled_group("Commentaire", commentary)?)?;

    // Justificativo: el filtro declarativo del input y la validación del
    // view-model aceptan las mismas extensiones
    let file_input = ElementBuilder::new("input")?
        .attr("type", "file")?
        .id("file")?
        .class("form-input")
        .attr("accept", "image/png, image/jpeg, image/jpg")?
        .build();
    {
        let vm = vm.clone();
        on_change(&file_input, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.handle_change_file().await;
            });
        })?;
    }
    append_child(&form, &labeled_group("Justificatif", file_input)?)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .id("btn-send-bill")?
        .class("btn-primary")
        .text("Envoyer")
        .build();
    append_child(&form, &submit)?;

    {
        let vm = vm.clone();
        on_submit(&form, move |event| {
            event.prevent_default();
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(e) = vm.handle_submit().await {
                    log::error!("❌ [NEW-BILL] {}", e);
                }
            });
        })?;
    }

    append_child(&page, &form)?;

    Ok(page)
}

/// Helper para crear un input con id fijo
fn text_input(id: &str, input_type: &str, placeholder: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .attr("type", input_type)?
        .id(id)?
        .attr("placeholder", placeholder)?
        .class("form-input")
        .build())
}

/// Helper para agrupar label + campo
fn labeled_group(label_text: &str, field: Element) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?.text(label_text).build();
    append_child(&group, &label)?;
    append_child(&group, &field)?;
    Ok(group)
}
