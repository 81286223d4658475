// Doble del backend para tests (equivalente del mock del store).
// Registra cada llamada y permite forzar fallos por operación.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::models::{Bill, BillPayload, LoginResponse, UploadedReceipt};
use crate::services::store::RemoteStore;

#[derive(Default)]
pub struct MockStore {
    pub bills: RefCell<Vec<Bill>>,
    pub fail_login: bool,
    /// Rechaza solamente el primer login (cuenta inexistente)
    pub fail_login_once: Cell<bool>,
    pub fail_users_create: bool,
    pub login_calls: RefCell<Vec<String>>,
    pub users_create_calls: RefCell<Vec<String>>,
    pub created_bills: RefCell<Vec<BillPayload>>,
    pub uploads: RefCell<Vec<(String, String)>>,
}

impl MockStore {
    /// Store con las cuatro notas de ejemplo
    pub fn with_fixtures() -> Self {
        Self {
            bills: RefCell::new(fixtures()),
            ..Default::default()
        }
    }
}

#[async_trait(?Send)]
impl RemoteStore for MockStore {
    async fn bills_list(&self) -> Result<Vec<Bill>, String> {
        Ok(self.bills.borrow().clone())
    }

    async fn upload_receipt(
        &self,
        file_name: &str,
        email: &str,
    ) -> Result<UploadedReceipt, String> {
        self.uploads
            .borrow_mut()
            .push((file_name.to_string(), email.to_string()));
        Ok(UploadedReceipt {
            file_url: format!("https://localhost:3456/images/{}", file_name),
            key: "1234".to_string(),
        })
    }

    async fn bills_create(&self, bill: &BillPayload) -> Result<(), String> {
        self.created_bills.borrow_mut().push(bill.clone());
        Ok(())
    }

    async fn login(&self, credentials: &str) -> Result<LoginResponse, String> {
        self.login_calls.borrow_mut().push(credentials.to_string());
        if self.fail_login || self.fail_login_once.replace(false) {
            return Err("Login failed".to_string());
        }
        Ok(LoginResponse {
            jwt: "mock-jwt-token".to_string(),
        })
    }

    async fn users_create(&self, data: &str) -> Result<(), String> {
        self.users_create_calls.borrow_mut().push(data.to_string());
        if self.fail_users_create {
            return Err("User creation failed".to_string());
        }
        Ok(())
    }
}

fn bill(
    id: &str,
    name: &str,
    expense_type: &str,
    status: &str,
    date: &str,
    amount: f64,
    vat: f64,
    commentary: &str,
    file_name: &str,
) -> Bill {
    Bill {
        id: id.to_string(),
        email: "a@a".to_string(),
        expense_type: expense_type.to_string(),
        status: status.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        amount,
        vat,
        pct: 20,
        commentary: commentary.to_string(),
        file_url: format!("https://test.storage.tld/v0/b/billable/{}", file_name),
        file_name: file_name.to_string(),
    }
}

/// Las cuatro notas del fixture clásico
pub fn fixtures() -> Vec<Bill> {
    vec![
        bill(
            "47qAXb6fIm2zOKkLzMro",
            "encore",
            "Hôtel et logement",
            "pending",
            "2004-04-04",
            400.0,
            80.0,
            "séminaire billed",
            "preview-facture-free-201801-pdf-1.jpg",
        ),
        bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            "test1",
            "Transports",
            "refused",
            "2001-01-01",
            100.0,
            20.0,
            "billet d'avion",
            "billet-avion-1.jpg",
        ),
        bill(
            "UIUZtnPQvnbFnB0ozvJh",
            "test3",
            "Services en ligne",
            "accepted",
            "2003-03-03",
            300.0,
            60.0,
            "abonnement logiciel",
            "facture-saas-3.png",
        ),
        bill(
            "qcCK3SzECmaZAGRrHjaC",
            "test2",
            "Restaurants et bars",
            "refused",
            "2002-02-02",
            200.0,
            40.0,
            "repas client",
            "note-restaurant-2.jpg",
        ),
    ]
}
