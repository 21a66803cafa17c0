//! Demonstrates the two failure kinds and how to tell them apart.
//!
//! Run with: `cargo run --example error_handling`

use cpfcnpj::*;

fn main() {
    let inputs = [
        "111.444.777-35",
        "11144477736",
        "00.000.000/0001-91",
        "00.000.000/0001-92",
        "123",
        "",
    ];

    println!("=== Document detection ===\n");
    for input in inputs {
        match Document::parse(input) {
            Ok(doc) => {
                let plain = doc.unformatted().map(|d| d.to_string());
                let punctuated = doc.formatted().map(|d| d.to_string());
                println!(
                    "  {input:<20} OK   {} plain={} punctuated={}",
                    doc.kind(),
                    plain.unwrap_or_default(),
                    punctuated.unwrap_or_default()
                );
            }
            Err(e @ DocumentError::Format { .. }) => {
                println!("  {input:<20} SHAPE  {e}");
            }
            Err(e) => {
                println!("  {input:<20} DIGIT  {e}");
            }
        }
    }

    println!("\n=== In-place reshaping ===\n");
    let mut cpf = Cpf::new("11144477735");
    match cpf.format() {
        Ok(()) => println!("  formatted: {cpf}"),
        Err(e) => println!("  format failed: {e}"),
    }
    match cpf.unformat() {
        Ok(()) => println!("  unformatted: {cpf}"),
        Err(e) => println!("  unformat failed: {e}"),
    }

    let mut broken = Cnpj::new("00.000.000/0001");
    if let Err(e) = broken.format() {
        println!("  {broken}: {e} (value unchanged)");
    }

    println!("\n=== Completing check digits ===\n");
    for base in ["111444777", "114447770001"] {
        let kind = if base.len() == 9 {
            DocumentKind::Cpf
        } else {
            DocumentKind::Cnpj
        };
        match kind.complete(base) {
            Ok(full) => println!("  {kind} {base} -> {full}"),
            Err(e) => println!("  {kind} {base}: {e}"),
        }
    }
}
