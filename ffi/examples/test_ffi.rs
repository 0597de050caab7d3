// Drives the engine the way the JNI surface does, sentinel conversion
// included, without needing a JVM on the other side.
use dice_engine::Engine;

fn roll_demo(seed: u64, count: i32, sides: i32) -> i32 {
    let mut engine = Engine::from_seed(seed);
    engine.roll_multiple(count, sides).unwrap_or(-1)
}

fn main() {
    println!("FFI Version: dice-ffi {}", dice_engine::version());

    let result = roll_demo(42, 3, 6);
    println!("roll_demo(42, 3, 6) = {}", result);

    let result2 = roll_demo(2025, 1, 20);
    println!("roll_demo(2025, 1, 20) = {}", result2);

    // Invalid parameters map to the sentinel; a d1 is legal
    println!("roll_demo(42, 0, 6) = {}", roll_demo(42, 0, 6));
    println!("roll_demo(42, 1, 1) = {}", roll_demo(42, 1, 1));

    // Test determinism
    println!("Determinism check:");
    println!(
        "  First call:  roll_demo(999, 2, 10) = {}",
        roll_demo(999, 2, 10)
    );
    println!(
        "  Second call: roll_demo(999, 2, 10) = {}",
        roll_demo(999, 2, 10)
    );
}
