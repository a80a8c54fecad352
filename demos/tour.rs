//! A short tour of `BitArray`.
//!
//! Run with: cargo run --example tour

use bitarray::{BitArray, Result};

fn main() -> Result<()> {
    // 10010
    let mut bits = BitArray::from_bit_string("10010");
    println!("{bits}");

    // 01101
    bits.apply_complement();
    println!("{bits}");

    // 11100
    bits.apply_xor(&BitArray::from_bools([true, false, false, false, true]))?;
    println!("{bits}");

    // 11101
    bits.set(4, true)?;
    println!("{bits}");

    // 0:1;1:1;2:1;3:0;4:1;
    let listing: String = bits
        .iter()
        .map(|(index, bit)| format!("{}:{};", index, u8::from(bit)))
        .collect();
    println!("{listing}");

    // [true,true,true,false,true]
    println!("{}", bits.to_json()?);

    // 14
    let bits = BitArray::from_bit_string("1100000000000010");
    println!("{:?}", bits.next_set_bit(4)?);

    // 2 through 29
    for width in 2..30 {
        let padded = format!("{:0<width$}", "10", width = width);
        let bits = BitArray::from_bit_string(&format!("{padded}100"));
        match bits.next_set_bit(2)? {
            Some(index) => println!("{padded} -- {index}"),
            None => println!("{padded} -- not found"),
        }
    }

    Ok(())
}
