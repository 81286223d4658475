// Capacidad de documento que reciben los view-models por inyección.
// Los contenedores nunca tocan el document global: en el navegador se les
// pasa BrowserDocument y en los tests un documento simulado.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::Element;

/// Acceso al documento
pub trait DocumentApi {
    /// Buscar elemento por id
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn ElementApi>>;
    /// Buscar elemento por selector CSS
    fn query_selector(&self, selector: &str) -> Option<Rc<dyn ElementApi>>;
}

/// Operaciones sobre un elemento del documento
pub trait ElementApi {
    /// Valor de un campo de formulario
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_inner_html(&self, html: &str);
    /// Insertar HTML inmediatamente después del elemento
    fn insert_adjacent_html(&self, html: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn client_width(&self) -> i32;
    /// Quitar el elemento del documento
    fn remove(&self);
}

/// Documento real del navegador
pub struct BrowserDocument;

impl DocumentApi for BrowserDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn ElementApi>> {
        crate::dom::get_element_by_id(id)
            .map(|element| Rc::new(BrowserElement(element)) as Rc<dyn ElementApi>)
    }

    fn query_selector(&self, selector: &str) -> Option<Rc<dyn ElementApi>> {
        crate::dom::query_selector(selector)
            .ok()
            .flatten()
            .map(|element| Rc::new(BrowserElement(element)) as Rc<dyn ElementApi>)
    }
}

/// Elemento real del navegador
pub struct BrowserElement(pub Element);

impl ElementApi for BrowserElement {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.0.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = self.0.dyn_ref::<web_sys::HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn insert_adjacent_html(&self, html: &str) {
        if self.0.insert_adjacent_html("afterend", html).is_err() {
            log::error!("❌ No se pudo insertar HTML junto al elemento");
        }
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn client_width(&self) -> i32 {
        self.0.client_width()
    }

    fn remove(&self) {
        self.0.remove();
    }
}
