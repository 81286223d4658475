use serde::{Deserialize, Serialize};

/// Nota de frais tal como la devuelve el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    /// "pending" | "accepted" | "refused"
    pub status: String,
    pub name: String,
    /// Fecha ISO YYYY-MM-DD
    pub date: String,
    pub amount: f64,
    pub vat: f64,
    pub pct: u32,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// Copia de una nota lista para mostrar: fecha formateada y etiqueta de
/// estado. `raw_date` conserva la fecha ISO original, que es la que se usa
/// para ordenar el listado.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedBill {
    pub id: String,
    pub email: String,
    pub expense_type: String,
    pub status: String,
    pub name: String,
    pub date: String,
    pub raw_date: String,
    pub amount: f64,
    pub vat: f64,
    pub pct: u32,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
}

/// Payload de creación de una nota (estado inicial "pending")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: f64,
    pub vat: f64,
    pub pct: u32,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub status: String,
}

/// Respuesta del backend al subir un justificativo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedReceipt {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}
