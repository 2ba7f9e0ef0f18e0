//! End-to-end tests for the mapping engine
//!
//! These tests drive the public API with typed models and DTOs, covering
//! flat mappings, nested objects, arrays of nested objects and mappings that
//! flatten or expand nested values.

use dtomap_core::{Constraint, Error, Mapper, SchemaValidator, Target};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    name: String,
    last_name: String,
    email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Address {
    address: String,
    city: String,
    country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserAddress {
    name: String,
    last_name: String,
    email: String,
    address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserAddresses {
    name: String,
    last_name: String,
    email: String,
    addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    full_name: String,
    email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWithoutEmailDto {
    full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AddressDto {
    address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWithAddressDto {
    full_name: String,
    email: String,
    address: AddressDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWithAddressesDto {
    full_name: String,
    email: String,
    addresses: Vec<AddressDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWithAddressesFlatDto {
    full_name: String,
    email: String,
    addresses: Vec<String>,
}

fn user() -> User {
    User {
        name: "Andres".to_string(),
        last_name: "Gutierrez".to_string(),
        email: "agutierrezt@slabcode.com".to_string(),
    }
}

fn user_two() -> User {
    User {
        name: "Samuel".to_string(),
        last_name: "Reyes".to_string(),
        email: "wsreyes@slabcode.com".to_string(),
    }
}

fn address() -> Address {
    Address {
        address: "KR 44A # 24D-21".to_string(),
        city: "Bogota".to_string(),
        country: "Colombia".to_string(),
    }
}

fn user_with_address() -> UserAddress {
    let u = user();
    UserAddress {
        name: u.name,
        last_name: u.last_name,
        email: u.email,
        address: address(),
    }
}

fn user_with_addresses() -> UserAddresses {
    let u = user();
    UserAddresses {
        name: u.name,
        last_name: u.last_name,
        email: u.email,
        addresses: vec![address()],
    }
}

const ADDRESS_LINE: &str = "KR 44A # 24D-21, Bogota, Colombia";

fn line(address: &serde_json::Value) -> String {
    format!(
        "{}, {}, {}",
        address["address"].as_str().unwrap_or_default(),
        address["city"].as_str().unwrap_or_default(),
        address["country"].as_str().unwrap_or_default()
    )
}

fn user_mapper() -> Mapper {
    let mut mapper = Mapper::new();
    mapper
        .add_mapping("fullName", |src, _| {
            Ok(json!(format!(
                "{} {}",
                src.get_str("name").unwrap_or_default(),
                src.get_str("lastName").unwrap_or_default()
            )))
        })
        .add_mapping("email", |src, _| Ok(json!(src.get_str("email").unwrap_or_default())));
    mapper
}

fn address_mapper() -> Mapper {
    let mut mapper = Mapper::new();
    mapper.add_mapping("address", |src, _| Ok(json!(line(&src.to_value()))));
    mapper
}

#[test]
fn test_full_name_and_email_example() {
    let dto: UserDto = user_mapper().transform_into(&user()).unwrap();
    assert_eq!(
        dto,
        UserDto {
            full_name: "Andres Gutierrez".to_string(),
            email: "agutierrezt@slabcode.com".to_string(),
        }
    );
}

#[test]
fn test_ignored_properties() {
    let mut mapper = Mapper::new();
    mapper.add_mapping("fullName", |src, _| {
        Ok(json!(format!(
            "{} {}",
            src.get_str("name").unwrap_or_default(),
            src.get_str("lastName").unwrap_or_default()
        )))
    });

    let dtos: Vec<UserWithoutEmailDto> = mapper.transform_vec_into(&[user(), user_two()]).unwrap();
    assert_eq!(dtos.len(), 2);
    assert_eq!(dtos[0].full_name, "Andres Gutierrez");
    assert_eq!(dtos[1].full_name, "Samuel Reyes");
}

#[test]
fn test_nested_object_with_function_rule() {
    let mut mapper = user_mapper();
    mapper.add_mapping("address", |src, _| {
        let address = src.get("address").cloned().unwrap_or_default();
        Ok(json!({ "address": line(&address) }))
    });

    let dto: UserWithAddressDto = mapper.transform_into(&user_with_address()).unwrap();
    assert_eq!(dto.address.address, ADDRESS_LINE);
}

#[test]
fn test_nested_object_with_sub_mapper() {
    let mut mapper = user_mapper();
    mapper.add_mapper("address", "address", address_mapper());

    let dtos: Vec<UserWithAddressDto> = mapper.transform_into(&vec![user_with_address()]).unwrap();
    assert_eq!(dtos.len(), 1);
    assert_eq!(dtos[0].address, AddressDto { address: ADDRESS_LINE.to_string() });
    assert_eq!(dtos[0].full_name, "Andres Gutierrez");
}

#[test]
fn test_nested_object_to_primitive() {
    let mut mapper = user_mapper();
    mapper.add_mapping("address", |src, _| {
        Ok(json!(line(src.get("address").unwrap_or(&serde_json::Value::Null))))
    });

    let result = mapper.transform(&serde_json::to_value(user_with_address()).unwrap()).unwrap();
    assert_eq!(result["address"], ADDRESS_LINE);
}

#[test]
fn test_array_of_nested_objects_with_sub_mapper() {
    let mut mapper = user_mapper();
    mapper.add_mapper("addresses", "addresses", address_mapper());

    let dto: UserWithAddressesDto = mapper.transform_into(&user_with_addresses()).unwrap();
    assert_eq!(dto.addresses, vec![AddressDto { address: ADDRESS_LINE.to_string() }]);
}

#[test]
fn test_array_of_nested_objects_to_array_of_primitives() {
    let mut mapper = user_mapper();
    mapper.add_mapping("addresses", |src, _| {
        let lines: Vec<String> = src
            .get_array("addresses")
            .map(|items| items.iter().map(line).collect())
            .unwrap_or_default();
        Ok(json!(lines))
    });

    let dto: UserWithAddressesFlatDto = mapper.transform_into(&user_with_addresses()).unwrap();
    assert_eq!(dto.addresses, vec![ADDRESS_LINE.to_string()]);
}

#[test]
fn test_array_of_primitives_to_array_of_objects() {
    let mut mapper = Mapper::new();
    mapper
        .add_mapping("name", |src, _| {
            let full = src.get_str("fullName").unwrap_or_default();
            Ok(json!(full.split(' ').next().unwrap_or_default()))
        })
        .add_mapping("lastName", |src, _| {
            let full = src.get_str("fullName").unwrap_or_default();
            Ok(json!(full.split(' ').nth(1).unwrap_or_default()))
        })
        .add_mapping("email", |src, _| Ok(json!(src.get_str("email").unwrap_or_default())))
        .add_mapping("addresses", |src, _| {
            let mut addresses = Vec::new();
            for item in src.get_array("addresses").into_iter().flatten() {
                let parts: Vec<&str> = item.as_str().unwrap_or_default().split(',').collect();
                if parts.len() != 3 {
                    return Err(Error::rule(format!("malformed address line: {}", item)));
                }
                addresses.push(json!({
                    "address": parts[0],
                    "city": parts[1].trim(),
                    "country": parts[2].trim(),
                }));
            }
            Ok(json!(addresses))
        });

    let flat = UserWithAddressesFlatDto {
        full_name: "Andres Gutierrez".to_string(),
        email: "agutierrezt@slabcode.com".to_string(),
        addresses: vec![ADDRESS_LINE.to_string()],
    };

    let restored: Vec<UserAddresses> = mapper.transform_vec_into(&[flat.clone()]).unwrap();
    assert_eq!(restored, vec![user_with_addresses()]);

    let broken = UserWithAddressesFlatDto {
        addresses: vec!["no commas here".to_string()],
        ..flat
    };
    let err = mapper.transform_into::<_, UserAddresses>(&broken).unwrap_err();
    assert!(err.to_string().contains("malformed address line"));
}

#[test]
fn test_typed_target_on_nested_mapper() {
    #[derive(Debug, Serialize, Deserialize)]
    struct VerifiedAddressDto {
        address: String,
        #[serde(default)]
        verified: bool,
    }

    let nested = address_mapper().with_target(Target::typed::<VerifiedAddressDto>());
    let mut mapper = user_mapper();
    mapper.add_mapper("addresses", "addresses", nested);

    let result = mapper.transform(&serde_json::to_value(user_with_addresses()).unwrap()).unwrap();
    assert_eq!(result["addresses"], json!([{"address": ADDRESS_LINE, "verified": false}]));
}

#[test]
fn test_validation_over_typed_input() {
    let validator = SchemaValidator::new()
        .field("fullName", [Constraint::Defined, Constraint::IsString])
        .field("email", [Constraint::IsEmail]);
    let mapper = user_mapper().with_validator(validator);

    let mut bad = user_two();
    bad.email = "wsreyes".to_string();

    let ok: Vec<UserDto> = mapper
        .transform_and_validate_into(&vec![user(), user_two()], None)
        .unwrap();
    assert_eq!(ok.len(), 2);

    let err = mapper
        .transform_and_validate_into::<_, Vec<UserDto>>(&vec![user(), bad, user()], None)
        .unwrap_err();
    let err = err.as_transformation().expect("validation error");
    assert!(err.message.contains("position 1"));
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "email");
}
