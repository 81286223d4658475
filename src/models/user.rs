use serde::{Deserialize, Serialize};

/// Rol del usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Registro de usuario guardado en el Session Store bajo la clave fija.
/// Cada conexión lo sobrescribe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
    pub password: String,
    pub status: String,
}

impl User {
    /// Usuario recién conectado (estado fijo "connected")
    pub fn connected(user_type: UserType, email: String, password: String) -> Self {
        Self {
            user_type,
            email,
            password,
            status: "connected".to_string(),
        }
    }
}

/// Credenciales serializadas como cuerpo de la operación de login
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Respuesta del login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
}

/// Payload de creación de cuenta (name = parte local del email)
#[derive(Debug, Serialize)]
pub struct NewUserPayload<'a> {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
