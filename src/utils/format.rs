// Formato de fechas y estados para la vista del listado

use chrono::{Datelike, NaiveDate};

/// Meses abreviados en francés
const MONTHS_FR: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

/// Formatear una fecha ISO (YYYY-MM-DD, con hora opcional) para mostrar:
/// "2004-04-04" -> "4 Avr. 04"
pub fn format_date(iso: &str) -> Result<String, String> {
    let date_part = iso
        .get(..10)
        .ok_or_else(|| format!("Fecha inválida '{}'", iso))?;
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| format!("Fecha inválida '{}': {}", iso, e))?;

    let month = MONTHS_FR[date.month0() as usize];
    Ok(format!("{} {} {:02}", date.day(), month, date.year() % 100))
}

/// Etiqueta de estado visible para el usuario
pub fn format_status(status: &str) -> String {
    match status {
        "pending" => "En attente".to_string(),
        "accepted" => "Accepté".to_string(),
        "refused" => "Refusé".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_in_french_short_form() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Janv. 01");
        assert_eq!(format_date("2003-03-03").unwrap(), "3 Mars 03");
        assert_eq!(format_date("2022-12-25").unwrap(), "25 Déc. 22");
    }

    #[test]
    fn a_full_iso_timestamp_only_reads_the_date_part() {
        assert_eq!(format_date("2021-11-22T10:20:30.000Z").unwrap(), "22 Nov. 21");
    }

    #[test]
    fn garbage_dates_are_an_error() {
        assert!(format_date("").is_err());
        assert!(format_date("not-a-date").is_err());
        assert!(format_date("2004-13-04").is_err());
    }

    #[test]
    fn statuses_map_to_their_labels() {
        assert_eq!(format_status("pending"), "En attente");
        assert_eq!(format_status("accepted"), "Accepté");
        assert_eq!(format_status("refused"), "Refusé");
    }

    #[test]
    fn unknown_statuses_pass_through() {
        assert_eq!(format_status("archived"), "archived");
    }
}
