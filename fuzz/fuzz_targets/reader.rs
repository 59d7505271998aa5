#![no_main]

use bytecursor::{Endian, Reader};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

// The first byte picks the access pattern, the rest is the region being parsed. Checked
// accessors must never panic, whatever the input.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, body)) = data.split_first() else {
        return;
    };

    let Ok(mut reader) = Reader::from_buffer(body) else {
        return;
    };
    let endian = match selector % 3 {
        0 => Endian::Native,
        1 => Endian::Little,
        _ => Endian::Big,
    };

    while reader.remaining().unwrap_or(0) > 0 {
        let step = match (selector >> 2) & 0x7 {
            0 => reader.read_value::<u8>(endian).map(u64::from),
            1 => reader.read_value::<u16>(endian).map(u64::from),
            2 => reader.read_value::<u32>(endian).map(u64::from),
            3 => reader.read_value::<f64>(endian).map(f64::to_bits),
            4 => reader.read_normalized::<i16>(endian).map(|v| u64::from(v.to_bits())),
            5 => reader.read_normalized::<u64>(endian).map(f64::to_bits),
            6 => reader
                .peek_value::<u64>(endian)
                .and_then(|v| reader.read_u8().map(|_| v)),
            _ => reader.read_value::<i64>(endian).map(|v| v as u64),
        };
        if step.is_err() {
            let _ = reader.read_u8();
        }
        if selector & 0x80 != 0 && step.is_ok() {
            break;
        }
    }

    let mut store = Cursor::new(body);
    let mut reader = Reader::from_file(&mut store);
    while reader.read_u32_be().is_ok() {}
    let _ = reader.read_u8();
});
