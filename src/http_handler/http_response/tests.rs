use super::astros::AstrosResponse;
use super::iss_now::{Coordinate, IssNowResponse};
use super::response_common::{HTTPResponseType, SchemaError, parse_json_body};

fn decode<T: HTTPResponseType>(body: &str) -> Result<T, SchemaError> {
    T::from_json(parse_json_body(body).unwrap())
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_json_body("{\"number\": 2, \"people\": [").unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
    assert!(parse_json_body("").is_err());
    assert!(parse_json_body("<html>502 Bad Gateway</html>").is_err());
}

#[test]
fn astros_body_decodes_with_and_without_craft() {
    let response: AstrosResponse = decode(
        r#"{"message":"success","number":2,"people":[{"name":"A","craft":"ISS"},{"name":"B"}]}"#,
    )
    .unwrap();
    assert_eq!(response.number(), 2);
    assert_eq!(response.message(), Some("success"));
    assert_eq!(response.people()[0].craft(), Some("ISS"));
    assert_eq!(response.people()[1].name(), "B");
    assert_eq!(response.people()[1].craft(), None);
}

#[test]
fn astros_body_with_missing_or_negative_fields_is_a_schema_error() {
    let missing_people = decode::<AstrosResponse>(r#"{"number":1}"#).unwrap_err();
    assert!(matches!(missing_people, SchemaError::Malformed(_)));

    let negative = decode::<AstrosResponse>(r#"{"number":-1,"people":[]}"#).unwrap_err();
    assert!(matches!(negative, SchemaError::Malformed(_)));

    let nameless = decode::<AstrosResponse>(r#"{"number":1,"people":[{"craft":"ISS"}]}"#).unwrap_err();
    assert!(matches!(nameless, SchemaError::Malformed(_)));
}

#[test]
fn coordinates_accept_strings_and_numbers() {
    let response: IssNowResponse = decode(
        r#"{"message":"success","timestamp":1700000000,"iss_position":{"longitude":"10.5","latitude":-3.2}}"#,
    )
    .unwrap();
    assert_eq!(response.timestamp(), 1_700_000_000);
    assert!((response.position().longitude().unwrap() - 10.5).abs() < f64::EPSILON);
    assert!((response.position().latitude().unwrap() + 3.2).abs() < f64::EPSILON);

    let integral: IssNowResponse =
        decode(r#"{"timestamp":0,"iss_position":{"longitude":12,"latitude":" 7 "}}"#).unwrap();
    assert!((integral.position().longitude().unwrap() - 12.0).abs() < f64::EPSILON);
    assert!((integral.position().latitude().unwrap() - 7.0).abs() < f64::EPSILON);
}

#[test]
fn non_numeric_coordinates_are_rejected() {
    let response: IssNowResponse =
        decode(r#"{"timestamp":0,"iss_position":{"longitude":"east","latitude":"NaN"}}"#).unwrap();
    assert_eq!(
        response.position().longitude().unwrap_err(),
        SchemaError::InvalidCoordinate { axis: "longitude", raw: "east".to_string() }
    );
    assert!(response.position().latitude().is_err());
    assert_eq!(Coordinate::Text("east".into()).to_string(), "east");
}

#[test]
fn iss_body_without_position_is_a_schema_error() {
    let err = decode::<IssNowResponse>(r#"{"timestamp":1700000000}"#).unwrap_err();
    assert!(err.to_string().contains("iss_position"));
}
