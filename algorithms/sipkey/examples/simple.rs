//! Sipkey Basic Example
//!
//! Minimal usage: `let tag = sipkey::digest(&key, &data)?;`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), sipkey::SipError> {
    let key = *b"an example key!!";

    let data = b"Hello, World!";
    let tag = sipkey::digest(&key, data)?;
    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Tag:  {}", sipkey::to_hex(&tag));

    // Connection 4-tuple: src addr, dst addr, src port, dst port
    let flow = sipkey::digest_4x64(&key, 0x0A00_0001, 0x0A00_0002, 51_000, 443)?;
    println!("Flow: {}", sipkey::to_hex(&flow));

    Ok(())
}
