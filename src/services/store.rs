// Abstracción del servicio remoto de notas de frais.
// Los view-models reciben `Option<Rc<dyn RemoteStore>>`: sin backend
// configurado las operaciones devuelven un resultado vacío, no un error.

use async_trait::async_trait;

use crate::models::{Bill, BillPayload, LoginResponse, UploadedReceipt};

/// Operaciones expuestas por el backend
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Listar las notas de frais
    async fn bills_list(&self) -> Result<Vec<Bill>, String>;

    /// Subir un justificativo (ruta de creación de notas, payload de archivo)
    async fn upload_receipt(&self, file_name: &str, email: &str)
        -> Result<UploadedReceipt, String>;

    /// Crear la nota de frais
    async fn bills_create(&self, bill: &BillPayload) -> Result<(), String>;

    /// Login con las credenciales serializadas; devuelve el token jwt
    async fn login(&self, credentials: &str) -> Result<LoginResponse, String>;

    /// Crear una cuenta de usuario (payload serializado)
    async fn users_create(&self, data: &str) -> Result<(), String>;
}
