use std::sync::Mutex;

use dice_engine::Engine;
use jni::JNIEnv;
use jni::objects::{JClass, JString};
use jni::sys::{jint, jlong, jstring};
use serde_json::json;

/// Process-wide engine for the C-style surface, lazily entropy-seeded on
/// first use. Every entry point, including re-seeding via `init`,
/// serializes on this lock.
static ENGINE: Mutex<Option<Engine>> = Mutex::new(None);

fn with_engine<T>(f: impl FnOnce(&mut Engine) -> T) -> T {
    let mut guard = ENGINE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(guard.get_or_insert_with(Engine::new))
}

fn ok(env: &JNIEnv, value: serde_json::Value) -> jstring {
    let payload = json!({ "ok": true, "result": value });
    env.new_string(serde_json::to_string(&payload).unwrap())
        .unwrap()
        .into_raw()
}

fn err(env: &JNIEnv, e: impl std::fmt::Display) -> jstring {
    let payload = json!({ "ok": false, "error": e.to_string() });
    env.new_string(serde_json::to_string(&payload).unwrap())
        .unwrap()
        .into_raw()
}

#[no_mangle]
pub extern "system" fn Java_com_dice_Ffi_version<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> JString<'local> {
    env.new_string(format!("dice-ffi {}", dice_engine::version()))
        .expect("new_string failed")
}

/// Re-seed the process-wide engine. Seed 0 means entropy seeding, so
/// callers without a seed of their own still get differing runs.
#[no_mangle]
pub extern "system" fn Java_com_dice_Ffi_init(
    _env: JNIEnv<'_>,
    _class: JClass<'_>,
    seed: jlong,
) {
    let seed = (seed != 0).then_some(seed as u64);
    let mut guard = ENGINE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(Engine::seeded(seed));
}

/// Roll one die. Returns -1 on sides <= 0; valid results are always
/// positive, so the sentinel is unambiguous.
#[no_mangle]
pub extern "system" fn Java_com_dice_Ffi_roll(
    _env: JNIEnv<'_>,
    _class: JClass<'_>,
    sides: jint,
) -> jint {
    with_engine(|engine| engine.roll(sides).unwrap_or(-1))
}

/// Roll `count` dice and return the sum, or -1 on invalid parameters.
#[no_mangle]
pub extern "system" fn Java_com_dice_Ffi_rollMultiple(
    _env: JNIEnv<'_>,
    _class: JClass<'_>,
    count: jint,
    sides: jint,
) -> jint {
    with_engine(|engine| engine.roll_multiple(count, sides).unwrap_or(-1))
}

/// Roll dice notation like "3d6+2" and return the total, or -1 on
/// malformed text.
#[no_mangle]
pub extern "system" fn Java_com_dice_Ffi_rollNotation(
    mut env: JNIEnv,
    _class: JClass,
    notation: JString,
) -> jint {
    let text: String = match env.get_string(&notation) {
        Ok(s) => s.into(),
        Err(_) => return -1,
    };
    with_engine(|engine| engine.roll_notation(&text).unwrap_or(-1))
}

/// Roll `count` dice and return `{ok, result: {rolls, sum}}`; a flat
/// sentinel cannot carry the per-die array, so this crosses as JSON.
#[no_mangle]
pub extern "system" fn Java_com_dice_Ffi_rollIndividualJson(
    env: JNIEnv,
    _class: JClass,
    count: jint,
    sides: jint,
) -> jstring {
    match with_engine(|engine| engine.roll_individual(count, sides)) {
        Ok(result) => ok(&env, serde_json::to_value(result).unwrap()),
        Err(e) => err(&env, e),
    }
}

// Seed-scoped helpers for testing without JNI overhead
pub fn roll_internal(seed: u64, count: i32, sides: i32) -> i32 {
    let mut engine = Engine::from_seed(seed);
    engine.roll_multiple(count, sides).unwrap_or(-1)
}

pub fn roll_notation_internal(seed: u64, notation: &str) -> i32 {
    let mut engine = Engine::from_seed(seed);
    engine.roll_notation(notation).unwrap_or(-1)
}
