// ============================================================================
// LOGIN VIEWMODEL - Identificación del usuario y establecimiento de sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::DocumentApi;
use crate::models::{Credentials, LoginResponse, NewUserPayload, User, UserType};
use crate::services::RemoteStore;
use crate::utils::constants::{JWT_STORAGE_KEY, USER_STORAGE_KEY};
use crate::utils::storage::SessionStorage;
use crate::utils::Route;

/// ViewModel de login
pub struct LoginViewModel {
    document: Rc<dyn DocumentApi>,
    storage: Rc<dyn SessionStorage>,
    store: Option<Rc<dyn RemoteStore>>,
    on_navigate: Rc<dyn Fn(Route)>,
    previous_location: RefCell<String>,
}

impl LoginViewModel {
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
            previous_location: RefCell::new(String::new()),
        }
    }

    /// Envío del formulario de empleado
    pub async fn handle_submit_employee(&self) -> Result<(), String> {
        self.handle_submit(
            UserType::Employee,
            "employee-email-input",
            "employee-password-input",
            Route::Bills,
        )
        .await
    }

    /// Envío del formulario de administrador
    pub async fn handle_submit_admin(&self) -> Result<(), String> {
        self.handle_submit(
            UserType::Admin,
            "admin-email-input",
            "admin-password-input",
            Route::Dashboard,
        )
        .await
    }

    async fn handle_submit(
        &self,
        user_type: UserType,
        email_id: &str,
        password_id: &str,
        destination: Route,
    ) -> Result<(), String> {
        let email = self.input_value(email_id);
        let password = self.input_value(password_id);
        let user = User::connected(user_type, email, password);

        // El registro de usuario se persiste serializado bajo la clave fija
        let serialized =
            serde_json::to_string(&user).map_err(|e| format!("Serialization error: {}", e))?;
        self.storage.set_item(USER_STORAGE_KEY, &serialized);

        if let Err(e) = self.login(&user).await {
            // Primera conexión: la cuenta no existe todavía, se crea y se
            // reintenta el login una única vez
            log::info!("🆕 Login rechazado ({}), creando la cuenta...", e);
            self.create_user(&user).await?;
        }

        (self.on_navigate)(destination);
        *self.previous_location.borrow_mut() = destination.path().to_string();
        Ok(())
    }

    /// Login contra el backend. Sin backend configurado devuelve Ok(None)
    /// sin intentar la red.
    pub async fn login(&self, user: &User) -> Result<Option<LoginResponse>, String> {
        let store = match &self.store {
            Some(store) => store,
            None => return Ok(None),
        };

        let credentials = serde_json::to_string(&Credentials {
            email: &user.email,
            password: &user.password,
        })
        .map_err(|e| format!("Serialization error: {}", e))?;

        let response = store.login(&credentials).await?;
        self.storage.set_item(JWT_STORAGE_KEY, &response.jwt);
        Ok(Some(response))
    }

    /// Crear la cuenta y conectarse con ella. Sin backend devuelve Ok(None).
    pub async fn create_user(&self, user: &User) -> Result<Option<LoginResponse>, String> {
        let store = match &self.store {
            Some(store) => store,
            None => return Ok(None),
        };

        let name = user.email.split('@').next().unwrap_or_default();
        let payload = serde_json::to_string(&NewUserPayload {
            user_type: user.user_type,
            name,
            email: &user.email,
            password: &user.password,
        })
        .map_err(|e| format!("Serialization error: {}", e))?;

        store.users_create(&payload).await?;
        log::info!("User with {} is created", user.email);
        self.login(user).await
    }

    /// Última ruta visitada tras una conexión exitosa
    pub fn previous_location(&self) -> String {
        self.previous_location.borrow().clone()
    }

    fn input_value(&self, id: &str) -> String {
        self.document
            .element_by_id(id)
            .map(|input| input.value())
            .unwrap_or_default()
    }
}
