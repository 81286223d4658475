/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5678 (por defecto)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5678",
};

/// Clave del registro de usuario en el Session Store
pub const USER_STORAGE_KEY: &str = "user";

/// Clave del token jwt en el Session Store
pub const JWT_STORAGE_KEY: &str = "jwt";

/// Id del elemento de error del justificativo
pub const FILE_ERROR_ID: &str = "file-error-message";

/// Mensaje mostrado cuando el justificativo no es jpg/jpeg/png
pub const FILE_ERROR_MESSAGE: &str = "Seuls les fichiers jpg, jpeg et png sont acceptés";
