#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj))) => {
                obj.properties.keys().cloned().collect()
            }
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/regions",
            "/api/v1/diseases",
            "/api/v1/series",
            "/api/v1/forecast",
            "/api/v1/overview",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_forecast_report_schema_structure() {
        let properties = object_properties("ForecastReport");
        for field in [
            "region",
            "disease",
            "horizon",
            "trend",
            "history",
            "predictions",
            "final_prediction",
            "summary",
        ] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }
}
