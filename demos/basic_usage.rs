use echelonian::{Direction, EchelonianTranslator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let translator = EchelonianTranslator::new();

    println!("🔤 Echelonian Transliteration Demo\n");

    let english = "Hello, World! 123";
    println!("📝 English input: {}", english);

    let glyphs = translator.to_echelonian(english);
    println!("✅ Echelonian: {}\n", glyphs);

    // Case is folded on the way in, so it does not survive the round trip
    let back = translator.to_english(&glyphs);
    println!("🔄 Back to English: {}", back);
    assert_eq!(back, english.to_lowercase());

    println!("\n📜 Full record:");
    let translation = translator.translate_input(Direction::Encode, "  good vibes only  ")?;
    println!("{}", serde_json::to_string_pretty(&translation)?);

    println!("\n🔑 Glyph table:");
    for &(letter, glyph) in translator.table() {
        println!("├─ {} → {}", letter, glyph);
    }

    match translator.translate_input(Direction::Decode, "   ") {
        Ok(_) => println!("\nunexpected translation of blank input"),
        Err(e) => println!("\n⚠️  {}", e),
    }

    Ok(())
}
