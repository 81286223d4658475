// Documento simulado para tests (equivalente del DOM de jsdom).
// Los elementos se registran bajo una clave (id o selector) y exponen su
// estado en campos públicos para que los tests lo inspeccionen.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::api::{DocumentApi, ElementApi};

type Registry = Rc<RefCell<HashMap<String, Rc<FakeElement>>>>;

/// Documento falso
#[derive(Default)]
pub struct FakeDocument {
    elements: Registry,
}

impl FakeDocument {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Registrar un elemento bajo una clave (id o selector)
    pub fn insert(&self, key: &str) -> Rc<FakeElement> {
        let element = Rc::new(FakeElement {
            key: key.to_string(),
            registry: self.elements.clone(),
            ..Default::default()
        });
        self.elements
            .borrow_mut()
            .insert(key.to_string(), element.clone());
        element
    }

    pub fn get(&self, key: &str) -> Option<Rc<FakeElement>> {
        self.elements.borrow().get(key).cloned()
    }
}

impl DocumentApi for FakeDocument {
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn ElementApi>> {
        self.get(id).map(|element| element as Rc<dyn ElementApi>)
    }

    fn query_selector(&self, selector: &str) -> Option<Rc<dyn ElementApi>> {
        self.get(selector).map(|element| element as Rc<dyn ElementApi>)
    }
}

/// Elemento falso con estado observable
#[derive(Default)]
pub struct FakeElement {
    key: String,
    registry: Registry,
    pub value: RefCell<String>,
    pub attributes: RefCell<HashMap<String, String>>,
    pub inner_html: RefCell<String>,
    pub text: RefCell<String>,
    pub classes: RefCell<Vec<String>>,
    pub width: Cell<i32>,
    /// HTML insertado junto al elemento (una entrada por llamada)
    pub inserted_html: RefCell<Vec<String>>,
}

impl FakeElement {
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

impl ElementApi for FakeElement {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_inner_html(&self, html: &str) {
        *self.inner_html.borrow_mut() = html.to_string();
    }

    fn insert_adjacent_html(&self, html: &str) {
        self.inserted_html.borrow_mut().push(html.to_string());

        // Registro del elemento insertado: se extraen id y texto del HTML
        let id = html
            .split("id=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap_or_default()
            .to_string();
        let text = html
            .split('>')
            .nth(1)
            .and_then(|rest| rest.split('<').next())
            .unwrap_or_default()
            .to_string();

        let element = Rc::new(FakeElement {
            key: id.clone(),
            registry: self.registry.clone(),
            ..Default::default()
        });
        *element.text.borrow_mut() = text;
        self.registry.borrow_mut().insert(id, element);
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.classes.borrow_mut().push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }

    fn client_width(&self) -> i32 {
        self.width.get()
    }

    fn remove(&self) {
        self.registry.borrow_mut().remove(&self.key);
    }
}
