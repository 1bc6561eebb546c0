use ibancheck::core::*;

fn main() {
    // ── 1. Format errors: the string is not IBAN-shaped ───────────────
    println!("=== Format Errors ===");
    for raw in ["", "NLXX0000001", "gb29nwbk60161331926819", "GB29"] {
        match parse(raw) {
            Ok(iban) => println!("  Parsed {iban} (unexpected)"),
            Err(e) => println!("  {e}"),
        }
    }

    // ── 2. Validation errors: parsed, but rejected ────────────────────
    println!("\n=== Validation Errors ===");
    let cases = [
        Iban::new("", "29", "NWBK60161331926819"),
        Iban::new("GB", "29", ""),
        Iban::new("XX", "29", "NWBK60161331926819"),
        Iban::new("GB", "29", "NWBK6016133192681"),
        Iban::new("GB", "92", "NWBK60161331926819"),
        Iban::new("GB", "25", "123456789012345678"),
        Iban::new("BE", "41", "539007547035"),
    ];
    for case in cases {
        let iban = match case {
            Ok(iban) => iban,
            Err(e) => {
                println!("  Cannot build: {e}");
                continue;
            }
        };
        match validate(&iban) {
            Ok(()) => println!("  {iban}: valid"),
            Err(e) => println!("  {iban}: {e}"),
        }
    }

    // ── 3. Matching on the reason ─────────────────────────────────────
    println!("\n=== Reasons ===");
    match check("GB29NWBK601613319268190") {
        Err(IbanError::Validation(ValidationError::IncorrectLength { expected, actual })) => {
            println!("  Expected {expected} characters, got {actual}");
        }
        other => println!("  Unexpected: {other:?}"),
    }

    // ── 4. Broken rule tables fail when the registry is built ─────────
    println!("\n=== Registry Errors ===");
    let broken = RuleSpec {
        country_code: "ZZ",
        length: 10,
        bban_pattern: "[0-9",
        bban_checksum: BbanChecksum::NotRequired,
    };
    match Registry::from_specs(&[broken]) {
        Ok(_) => println!("  Built (unexpected)"),
        Err(e) => println!("  {e}"),
    }
}
