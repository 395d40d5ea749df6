use serde_json::Value;

/// Normalize an `especificaciones` payload into the text stored in the
/// database, validating structural well-formedness on the way.
///
/// Rules, matching the wire contract:
/// - absent / `null` → stored as SQL NULL
/// - a JSON string must itself parse as JSON (e.g. `"{\"a\": 1}"` is
///   accepted, `"not json{"` is rejected); the parsed structure is stored
/// - any other JSON value (object, array, number, bool) is stored as-is
pub fn normalize_especificaciones(value: Option<&Value>) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => {
            let parsed: Value = serde_json::from_str(raw).map_err(|_| {
                "Formato de especificaciones inválido. Debe ser un JSON válido".to_string()
            })?;
            Ok(Some(parsed.to_string()))
        }
        Some(other) => Ok(Some(other.to_string())),
    }
}

/// Parse the stored `especificaciones` text back into the wire value.
/// NULL (and any unparseable leftover) renders as `{}`.
pub fn especificaciones_to_value(stored: Option<&str>) -> Value {
    stored
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_else(|| serde_json::json!({}))
}

/// Strict parse of the `activo` query parameter.
///
/// Accepts `true`/`false` (case-insensitive); absent defaults to `true`.
/// Anything else is rejected instead of silently coerced to `false`.
pub fn parse_activo_flag(raw: Option<&str>) -> Result<bool, String> {
    match raw {
        None => Ok(true),
        Some(s) => match s.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(format!(
                "Valor de 'activo' no reconocido: '{}'. Use 'true' o 'false'",
                other
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn especificaciones_absent_or_null_stores_nothing() {
        assert_eq!(normalize_especificaciones(None).unwrap(), None);
        assert_eq!(normalize_especificaciones(Some(&Value::Null)).unwrap(), None);
    }

    #[test]
    fn especificaciones_object_round_trips() {
        let value = json!({"torque": "50Nm"});
        let stored = normalize_especificaciones(Some(&value)).unwrap().unwrap();
        assert_eq!(especificaciones_to_value(Some(&stored)), value);
    }

    #[test]
    fn especificaciones_valid_json_string_is_parsed() {
        let value = json!("{\"viscosidad\": \"10W40\"}");
        let stored = normalize_especificaciones(Some(&value)).unwrap().unwrap();
        assert_eq!(
            especificaciones_to_value(Some(&stored)),
            json!({"viscosidad": "10W40"})
        );
    }

    #[test]
    fn especificaciones_malformed_string_is_rejected() {
        let value = json!("not json{");
        let err = normalize_especificaciones(Some(&value)).unwrap_err();
        assert!(err.contains("especificaciones"));
    }

    #[test]
    fn especificaciones_array_and_scalars_are_accepted() {
        for value in [json!([1, 2, 3]), json!(42), json!(true)] {
            assert!(normalize_especificaciones(Some(&value)).is_ok());
        }
    }

    #[test]
    fn stored_null_renders_as_empty_object() {
        assert_eq!(especificaciones_to_value(None), json!({}));
    }

    #[test]
    fn activo_defaults_to_true() {
        assert!(parse_activo_flag(None).unwrap());
    }

    #[test]
    fn activo_accepts_true_false_case_insensitive() {
        assert!(parse_activo_flag(Some("true")).unwrap());
        assert!(!parse_activo_flag(Some("FALSE")).unwrap());
        assert!(parse_activo_flag(Some("True")).unwrap());
    }

    #[test]
    fn activo_rejects_unrecognized_values() {
        assert!(parse_activo_flag(Some("yes")).is_err());
        assert!(parse_activo_flag(Some("1")).is_err());
        assert!(parse_activo_flag(Some("")).is_err());
    }
}
