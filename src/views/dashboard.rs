// ============================================================================
// DASHBOARD VIEW - Panel de validación del administrador
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, ElementBuilder};

/// Renderizar el panel del administrador
pub fn render_dashboard(_ctx: &AppContext) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("dashboard-page").build();

    let title = ElementBuilder::new("h1")?
        .class("content-title")
        .text("Validations")
        .build();
    append_child(&page, &title)?;

    // Secciones por estado de las notas a revisar
    for (container_id, label) in [
        ("status-bills-container1", "En attente"),
        ("status-bills-container2", "Accepté"),
        ("status-bills-container3", "Refusé"),
    ] {
        let section = ElementBuilder::new("div")?.class("dashboard-status").build();
        let heading = ElementBuilder::new("h2")?.text(label).build();
        let container = ElementBuilder::new("div")?
            .id(container_id)?
            .class("status-bills-container")
            .build();
        append_child(&section, &heading)?;
        append_child(&section, &container)?;
        append_child(&page, &section)?;
    }

    Ok(page)
}
