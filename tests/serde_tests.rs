//! Serialization goes through the validating constructor.

#![cfg(all(feature = "serde", feature = "cpf", feature = "cnpj"))]

use cpfcnpj::{Cnpj, Cpf, TaxId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Customer {
    name: String,
    cpf: Cpf,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Company {
    name: String,
    cnpj: Cnpj,
}

#[test]
fn serializes_as_plain_string() {
    let customer = Customer {
        name: "Maria".into(),
        cpf: Cpf::new("111.444.777-35"),
    };
    let json = serde_json::to_string(&customer).unwrap();
    assert_eq!(json, r#"{"name":"Maria","cpf":"111.444.777-35"}"#);

    let back: Customer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, customer);
}

#[test]
fn deserialize_keeps_representation() {
    let company: Company =
        serde_json::from_str(r#"{"name":"Banco","cnpj":"00000000000191"}"#).unwrap();
    assert_eq!(company.cnpj.as_str(), "00000000000191");
}

#[test]
fn deserialize_rejects_bad_checksum() {
    let err = serde_json::from_str::<Company>(r#"{"name":"X","cnpj":"00.000.000/0001-92"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid CNPJ"), "{err}");
}

#[test]
fn deserialize_rejects_bad_shape() {
    let err = serde_json::from_str::<Customer>(r#"{"name":"X","cpf":"123"}"#).unwrap_err();
    assert!(err.to_string().contains("CPF must have 11 digits"), "{err}");
}

#[test]
fn serializing_unchecked_value_is_allowed() {
    let json = serde_json::to_string(&Cpf::new("garbage")).unwrap();
    assert_eq!(json, r#""garbage""#);
    assert!(serde_json::from_str::<Cpf>(&json).is_err());
}
