#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use crate::error::AppError;
    use crate::handlers::validation::*;

    fn field_errors(payload: Value) -> crate::error::FieldErrors {
        match validate_service(&payload) {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("Expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_manicure_payload() {
        let input = validate_service(&json!({
            "name": "Manicure",
            "price": "50.00",
            "duration_minutes": 45
        }))
        .unwrap();

        assert_eq!(input.name, "Manicure");
        assert_eq!(input.price, BigDecimal::from_str("50.00").unwrap());
        assert_eq!(input.duration_minutes, 45);
        assert_eq!(input.description, None);
        assert_eq!(input.image, None);
    }

    #[test]
    fn test_numeric_inputs_are_coerced() {
        let input = validate_service(&json!({
            "name": "  Hair cut  ",
            "description": "",
            "price": 35.5,
            "duration_minutes": "30"
        }))
        .unwrap();

        assert_eq!(input.name, "Hair cut");
        assert_eq!(input.description.as_deref(), Some(""));
        assert_eq!(input.price, BigDecimal::from_str("35.5").unwrap());
        assert_eq!(input.duration_minutes, 30);
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = field_errors(json!({}));

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["duration_minutes", "name", "price"]
        );
        assert_eq!(errors.get("name").unwrap(), &[REQUIRED.to_string()]);
    }

    #[test]
    fn test_null_and_blank_name() {
        let errors = field_errors(json!({"name": null, "price": "1", "duration_minutes": 1}));
        assert_eq!(errors.get("name").unwrap(), &[NOT_NULL.to_string()]);

        let errors = field_errors(json!({"name": "   ", "price": "1", "duration_minutes": 1}));
        assert_eq!(errors.get("name").unwrap(), &[NOT_BLANK.to_string()]);

        let errors = field_errors(json!({"name": true, "price": "1", "duration_minutes": 1}));
        assert_eq!(errors.get("name").unwrap(), &[INVALID_STRING.to_string()]);
    }

    #[test]
    fn test_name_too_long() {
        let errors = field_errors(json!({
            "name": "x".repeat(101),
            "price": "10",
            "duration_minutes": 10
        }));

        assert_eq!(
            errors.get("name").unwrap(),
            &["Ensure this field has no more than 100 characters.".to_string()]
        );
    }

    #[test]
    fn test_non_numeric_price() {
        let errors = field_errors(json!({
            "name": "Manicure",
            "price": "fifty",
            "duration_minutes": 45
        }));

        assert_eq!(errors.get("price").unwrap(), &[INVALID_NUMBER.to_string()]);
        assert_eq!(errors.fields().count(), 1);
    }

    #[test]
    fn test_price_precision_limits() {
        let base = |price: Value| json!({"name": "Brows", "price": price, "duration_minutes": 20});

        assert!(validate_service(&base(json!("99999.99"))).is_ok());
        assert!(validate_service(&base(json!("0.50"))).is_ok());

        assert_eq!(
            field_errors(base(json!("10.005"))).get("price").unwrap(),
            &["Ensure that there are no more than 2 decimal places.".to_string()]
        );
        assert_eq!(
            field_errors(base(json!("12345678"))).get("price").unwrap(),
            &["Ensure that there are no more than 7 digits in total.".to_string()]
        );
        assert_eq!(
            field_errors(base(json!("123456.7"))).get("price").unwrap(),
            &["Ensure that there are no more than 5 digits before the decimal point.".to_string()]
        );
        assert_eq!(
            field_errors(base(json!([1]))).get("price").unwrap(),
            &[INVALID_NUMBER.to_string()]
        );
    }

    #[test]
    fn test_duration_must_be_integer() {
        let base = |duration: Value| json!({"name": "Wax", "price": "20", "duration_minutes": duration});

        assert_eq!(validate_service(&base(json!(45.0))).unwrap().duration_minutes, 45);
        assert_eq!(validate_service(&base(json!("60.00"))).unwrap().duration_minutes, 60);

        for invalid in [json!("abc"), json!(12.5), json!("1.5"), json!(false)] {
            assert_eq!(
                field_errors(base(invalid)).get("duration_minutes").unwrap(),
                &[INVALID_INTEGER.to_string()]
            );
        }

        assert_eq!(
            field_errors(base(json!(3_000_000_000i64)))
                .get("duration_minutes")
                .unwrap(),
            &["Ensure this value is less than or equal to 2147483647.".to_string()]
        );
    }

    #[test]
    fn test_image_paths() {
        let base = |image: Value| {
            json!({"name": "Nails", "price": "40", "duration_minutes": 30, "image": image})
        };

        assert_eq!(
            validate_service(&base(json!("nails.png"))).unwrap().image.as_deref(),
            Some("service_images/nails.png")
        );
        assert_eq!(
            validate_service(&base(json!("service_images/nails.png")))
                .unwrap()
                .image
                .as_deref(),
            Some("service_images/nails.png")
        );
        assert_eq!(validate_service(&base(json!(""))).unwrap().image, None);
        assert_eq!(validate_service(&base(Value::Null)).unwrap().image, None);

        for invalid in [json!("/etc/passwd"), json!("../secret.png"), json!(42)] {
            assert_eq!(
                field_errors(base(invalid)).get("image").unwrap(),
                &[INVALID_IMAGE_PATH.to_string()]
            );
        }
    }

    #[test]
    fn test_non_object_payload_is_bad_request() {
        match validate_service(&json!([{"name": "Manicure"}])) {
            Err(AppError::BadRequest(detail)) => assert!(detail.contains("got list")),
            other => panic!("Expected bad request, got {:?}", other),
        }
    }
}
