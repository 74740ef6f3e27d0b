use ethcall::{common::Hex, revert};

// Revert payload captured from a failed call against the local node.
const SAMPLE: &str = "0x00f20c5d4807f75147f1a4c6d38b53c3aad02cf3f867d9addb4cd1eb965233f76f3d4d72";

fn main() -> eyre::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [revert-data-hex]", args[0]);
        std::process::exit(1);
    }

    let input = args.get(1).map(String::as_str).unwrap_or(SAMPLE);
    let data: Hex = input.parse()?;
    println!("{}", revert::decode(data.as_bytes()));
    Ok(())
}
