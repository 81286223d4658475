// ============================================================================
// LOGIN VIEW - Formularios de empleado y administrador
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::viewmodels::LoginViewModel;

/// Renderizar vista de login
pub fn render_login(ctx: &AppContext) -> Result<Element, JsValue> {
    let vm = Rc::new(LoginViewModel::new(
        ctx.document.clone(),
        ctx.storage.clone(),
        ctx.store.clone(),
        ctx.on_navigate.clone(),
    ));

    let page = ElementBuilder::new("div")?.class("login-page").build();

    let header = ElementBuilder::new("div")?.class("login-header").build();
    let title = ElementBuilder::new("h1")?.text("Billed").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Gestion des notes de frais")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&page, &header)?;

    let forms = ElementBuilder::new("div")?.class("login-forms").build();

    // Formulario de empleado
    let employee_card = render_form(
        "Employé",
        "form-employee",
        "employee-email-input",
        "employee-password-input",
    )?;
    {
        let vm = vm.clone();
        on_submit(&employee_card.1, move |event| {
            event.prevent_default();
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(e) = vm.handle_submit_employee().await {
                    log::error!("❌ [LOGIN] {}", e);
                }
            });
        })?;
    }

    // Formulario de administrador
    let admin_card = render_form(
        "Administration",
        "form-admin",
        "admin-email-input",
        "admin-password-input",
    )?;
    {
        let vm = vm.clone();
        on_submit(&admin_card.1, move |event| {
            event.prevent_default();
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(e) = vm.handle_submit_admin().await {
                    log::error!("❌ [LOGIN] {}", e);
                }
            });
        })?;
    }

    append_child(&forms, &employee_card.0)?;
    append_child(&forms, &admin_card.0)?;
    append_child(&page, &forms)?;

    Ok(page)
}

/// Helper para crear un formulario de conexión; devuelve (card, form)
fn render_form(
    title: &str,
    form_id: &str,
    email_id: &str,
    password_id: &str,
) -> Result<(Element, Element), JsValue> {
    let card = ElementBuilder::new("div")?.class("login-card").build();

    let heading = ElementBuilder::new("h2")?.text(title).build();
    append_child(&card, &heading)?;

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .id(form_id)?
        .build();

    let email_group = form_group("Adresse email", email_id, "email", "exemple@billed.com")?;
    let password_group = form_group("Mot de passe", password_id, "password", "")?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text("Se connecter")
        .build();

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit)?;
    append_child(&card, &form)?;

    Ok((card, form))
}

/// Helper para crear form group
fn form_group(
    label_text: &str,
    id: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .id(id)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .class("form-input")
        .build();

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}
