use hamming_codec::cs::ecc::hamming::{decode, encode, DataWord};
use hamming_codec::Result;

fn main() -> Result<()> {
    let original: DataWord = "1011".parse()?;
    println!("Original data (d1 d2 d3 d4): {}", original);
    println!("{}", "-".repeat(30));

    let codeword = encode(original);
    println!("Encoded codeword (7 bits): {}", codeword);
    println!("{}", "-".repeat(30));

    println!("Case 1: clean transmission");
    println!("  Received codeword: {}", codeword);
    let (decoded, position) = decode(codeword);
    report(position);
    println!("  Decoded data: {}", decoded);
    assert_eq!(decoded, original);
    println!("  Result: data intact");
    println!("{}", "-".repeat(30));

    println!("Case 2: single-bit error");
    let error_position = 5;
    let received = codeword.flip(error_position)?;
    println!("  Sent codeword: {}", codeword);
    println!("  (flipping position {})", error_position);
    println!("  Received codeword: {}", received);
    let (decoded, position) = decode(received);
    report(position);
    println!("  Decoded and corrected data: {}", decoded);
    assert_eq!(position, error_position);
    assert_eq!(decoded, original);
    println!("  Result: error located and corrected, data recovered");
    println!("{}", "-".repeat(30));

    Ok(())
}

fn report(position: usize) {
    if position > 0 {
        println!("    [detect] error at position {}", position);
        println!("    [correct] flipped the bit at position {}", position);
    } else {
        println!("    [detect] no error detected");
    }
}
