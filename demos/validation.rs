use ibancheck::core::*;

fn main() {
    let inputs = [
        "GB29 NWBK 6016 1331 9268 19",
        "GB92NWBK60161331926819",
        "NL02ABNA0123456789",
        "BE68539007547034",
        "BA391290079401028494",
        "XX29NWBK60161331926819",
    ];

    println!("Supported countries:");
    for code in Registry::builtin().countries() {
        if let Some(rule) = Registry::builtin().get(code) {
            println!("  {code}: {} characters, BBAN checksum {:?}", rule.length(), rule.bban_checksum());
        }
    }

    println!("\nResults:");
    for raw in inputs {
        let compacted = compact(raw);
        match check(&compacted) {
            Ok(iban) => println!("  {:<32} valid   {}", raw, iban.print_format()),
            Err(e) => println!("  {:<32} invalid {}", raw, e),
        }
    }
}
