//! Docente Record
//!
//! One staff entry as served by the directory endpoint. Records are immutable
//! once received; a poll replaces the whole set.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt::Display;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Docente {
    /// Record identifier, unique within one snapshot
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,

    /// ISSEMYN key (opaque identifier)
    pub issemyn: String,

    /// Display name
    pub nombre: String,

    /// Phone number as sent by the server
    pub telefono: String,

    pub sexo: String,
}

impl Docente {
    #[cfg(test)]
    pub fn new(
        id: i64,
        issemyn: impl Into<String>,
        nombre: impl Into<String>,
        telefono: impl Into<String>,
        sexo: impl Into<String>,
    ) -> Self {
        Self {
            id,
            issemyn: issemyn.into(),
            nombre: nombre.into(),
            telefono: telefono.into(),
            sexo: sexo.into(),
        }
    }

    /// Label used for this record on the chart's categorical axis.
    pub fn chart_label(&self) -> String {
        format!("ID: {}", self.id)
    }
}

impl Display for Docente {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, ISSEMYN: {}, Nombre: {}, Teléfono: {}, Sexo: {}",
            self.id, self.issemyn, self.nombre, self.telefono, self.sexo
        )
    }
}

/// Accepts the id either as a JSON integer or as a string holding one.
/// PHP backends frequently encode integer columns as strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid docente id: {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_response_in_order() {
        let body = r#"[
            {"id": 3, "issemyn": "C3", "nombre": "Carla", "telefono": "555-3", "sexo": "F"},
            {"id": 1, "issemyn": "A1", "nombre": "Ana", "telefono": "555-1", "sexo": "F"}
        ]"#;
        let docentes: Vec<Docente> = serde_json::from_str(body).unwrap();
        assert_eq!(
            docentes,
            vec![
                Docente::new(3, "C3", "Carla", "555-3", "F"),
                Docente::new(1, "A1", "Ana", "555-1", "F"),
            ]
        );
    }

    #[test]
    fn test_accepts_numeric_string_id() {
        let body = r#"{"id": "42", "issemyn": "Z", "nombre": "Zoe", "telefono": "0", "sexo": "F"}"#;
        let docente: Docente = serde_json::from_str(body).unwrap();
        assert_eq!(docente.id, 42);
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        let body = r#"{"id": "abc", "issemyn": "Z", "nombre": "Zoe", "telefono": "0", "sexo": "F"}"#;
        assert!(serde_json::from_str::<Docente>(body).is_err());
    }

    #[test]
    fn test_rejects_missing_field() {
        let body = r#"{"id": 1, "issemyn": "Z", "nombre": "Zoe", "sexo": "F"}"#;
        assert!(serde_json::from_str::<Docente>(body).is_err());
    }

    #[test]
    fn test_chart_label() {
        let docente = Docente::new(7, "G7", "Gil", "555", "M");
        assert_eq!(docente.chart_label(), "ID: 7");
    }
}
