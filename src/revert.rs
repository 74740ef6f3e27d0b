use primitive_types::U256;

use crate::common::Hex;

/// `keccak256("Error(string)")[..4]`
pub const ERROR_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];
/// `keccak256("Panic(uint256)")[..4]`
pub const PANIC_SELECTOR: [u8; 4] = [0x4e, 0x48, 0x7b, 0x71];

/// Decoded form of the data a reverting call returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Revert {
    Empty,
    Error(String),
    Panic(U256),
    Custom { selector: [u8; 4], args: Hex },
    Raw(Hex),
}

pub fn decode(ret: &[u8]) -> Revert {
    if ret.is_empty() {
        return Revert::Empty;
    }
    if ret.len() < 4 {
        return Revert::Raw(ret.into());
    }
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&ret[..4]);

    if selector == ERROR_SELECTOR {
        if let Some(message) = decode_error_string(ret) {
            return Revert::Error(message);
        }
    }
    if selector == PANIC_SELECTOR && ret.len() == 4 + 32 {
        return Revert::Panic(U256::from_big_endian(&ret[4..]));
    }
    Revert::Custom {
        selector,
        args: ret[4..].into(),
    }
}

/// Extracts the ABI-encoded string argument following a 4-byte selector.
pub fn decode_error_string(ret: &[u8]) -> Option<String> {
    let args = ret.get(4..)?;
    let offset = read_usize(args, 0)?;
    let size = read_usize(args, offset)?;
    let start = offset.checked_add(32)?;
    let data = args.get(start..start.checked_add(size)?)?;
    String::from_utf8(data.to_vec()).ok()
}

fn read_usize(data: &[u8], at: usize) -> Option<usize> {
    let word = data.get(at..at.checked_add(32)?)?;
    let word = U256::from_big_endian(word);
    if word > U256::from(u32::MAX) {
        return None;
    }
    Some(word.as_usize())
}

pub fn panic_description(code: &U256) -> Option<&'static str> {
    if *code > U256::from(u8::MAX) {
        return None;
    }
    let description = match code.as_u32() {
        0x00 => "generic compiler panic",
        0x01 => "assertion failed",
        0x11 => "arithmetic overflow or underflow",
        0x12 => "division or modulo by zero",
        0x21 => "invalid enum value",
        0x22 => "invalid storage byte array encoding",
        0x31 => "pop on empty array",
        0x32 => "array index out of bounds",
        0x41 => "out of memory",
        0x51 => "call to uninitialized function",
        _ => return None,
    };
    Some(description)
}

impl std::fmt::Display for Revert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revert::Empty => f.write_str("no revert data"),
            Revert::Error(message) => write!(f, "Error({message:?})"),
            Revert::Panic(code) => match panic_description(code) {
                Some(description) => write!(f, "Panic(0x{code:x}: {description})"),
                None => write!(f, "Panic(0x{code:x})"),
            },
            Revert::Custom { selector, args } => {
                write!(f, "custom error 0x{}", hex::encode(selector))?;
                if !args.is_empty() {
                    write!(f, " with args {args}")?;
                }
                Ok(())
            }
            Revert::Raw(data) => write!(f, "raw revert data {data}"),
        }
    }
}
